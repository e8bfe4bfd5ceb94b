use crate::info::{ClassInfo, TypePath};

// -----------------------------------------------------------------------------
// Class

/// A static accessor to the member tables of a type.
///
/// This is the host capability that reflective access is built on: it lists
/// the fields, methods and constructors a type declares, and names its
/// superclass and interfaces. Every `Class + Send + Sync` type is
/// automatically [`Reflect`](crate::Reflect).
///
/// # Implementation
///
/// Build the [`ClassInfo`] once and keep it in a static cell.
///
/// ```
/// use bean_reflect::{
///     impl_type_path, impls::NonGenericClassInfoCell,
///     info::{Class, ClassInfo, FieldInfo},
/// };
///
/// #[derive(Clone)]
/// struct Ball {
///     color: String,
/// }
///
/// impl_type_path!(Ball in "toys");
///
/// impl Class for Ball {
///     fn class_info() -> &'static ClassInfo {
///         static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
///         CELL.get_or_init(|| {
///             ClassInfo::new::<Self>().with_fields([FieldInfo::new::<Self, String>(
///                 "color",
///                 |ball| &ball.color,
///                 |ball| &mut ball.color,
///             )])
///         })
///     }
/// }
///
/// assert_eq!(Ball::class_info().declared_fields().len(), 1);
/// ```
pub trait Class: TypePath {
    /// Returns the member tables of this type.
    fn class_info() -> &'static ClassInfo;
}

// -----------------------------------------------------------------------------
// Extends

/// Declares that a type embeds its superclass `S`.
///
/// Rust has no subtyping between structs, so inheritance is expressed by
/// composition: the subclass holds a value of the superclass and exposes it
/// here. [`Superclass::of`](crate::info::Superclass::of) turns this into the
/// projections used to reach inherited members.
///
/// ```
/// use bean_reflect::info::Extends;
/// # use bean_reflect::{impl_type_path, impls::NonGenericClassInfoCell, info::{Class, ClassInfo}};
///
/// struct Animal { legs: u32 }
/// struct Dog { animal: Animal }
/// # impl_type_path!(Animal in "zoo");
/// # impl_type_path!(Dog in "zoo");
/// # impl Class for Animal {
/// #     fn class_info() -> &'static ClassInfo {
/// #         static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
/// #         CELL.get_or_init(ClassInfo::new::<Self>)
/// #     }
/// # }
/// # impl Class for Dog {
/// #     fn class_info() -> &'static ClassInfo {
/// #         static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
/// #         CELL.get_or_init(ClassInfo::new::<Self>)
/// #     }
/// # }
///
/// impl Extends<Animal> for Dog {
///     fn base(&self) -> &Animal { &self.animal }
///     fn base_mut(&mut self) -> &mut Animal { &mut self.animal }
/// }
/// ```
pub trait Extends<S: Class>: Class {
    /// Returns the embedded superclass part.
    fn base(&self) -> &S;

    /// Returns the embedded superclass part mutably.
    fn base_mut(&mut self) -> &mut S;
}
