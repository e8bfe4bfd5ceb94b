use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{Class, ClassInfo, Extends};

// -----------------------------------------------------------------------------
// TypeArgument

/// An argument of a parameterized superclass, as in `DogRepository extends
/// Repository<Dog>`.
#[derive(Clone, Copy)]
pub enum TypeArgument {
    /// A concrete class.
    Class(fn() -> &'static ClassInfo),
    /// An unresolved type parameter of the subclass, identified by name.
    Parameter(&'static str),
}

impl TypeArgument {
    /// A concrete class argument.
    #[inline]
    pub const fn of<T: Class>() -> Self {
        Self::Class(T::class_info)
    }

    /// An unresolved type parameter.
    #[inline]
    pub const fn parameter(name: &'static str) -> Self {
        Self::Parameter(name)
    }

    /// Returns the class, or `None` for a type parameter.
    #[inline]
    pub fn class(&self) -> Option<&'static ClassInfo> {
        match self {
            Self::Class(class) => Some(class()),
            Self::Parameter(_) => None,
        }
    }
}

impl core::fmt::Debug for TypeArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Class(class) => f.write_str(class().type_path()),
            Self::Parameter(name) => f.write_str(name),
        }
    }
}

// -----------------------------------------------------------------------------
// Superclass

/// The immediate superclass of a class.
///
/// Holds the superclass accessor, the projections from an instance of the
/// subclass to its embedded superclass part, and the type arguments the
/// subclass passes to a parameterized superclass.
#[derive(Clone)]
pub struct Superclass {
    class: fn() -> &'static ClassInfo,
    upcast: fn(&dyn Reflect) -> Option<&dyn Reflect>,
    upcast_mut: fn(&mut dyn Reflect) -> Option<&mut dyn Reflect>,
    type_arguments: Vec<TypeArgument>,
}

impl Superclass {
    /// The superclass `S` of `T`, reached through [`Extends`].
    pub fn of<T, S>() -> Self
    where
        T: Extends<S> + Send + Sync,
        S: Class + Send + Sync,
    {
        Self {
            class: S::class_info,
            upcast: upcast::<T, S>,
            upcast_mut: upcast_mut::<T, S>,
            type_arguments: Vec::new(),
        }
    }

    /// Sets the type arguments passed to the superclass.
    pub fn with_type_arguments(mut self, arguments: impl IntoIterator<Item = TypeArgument>) -> Self {
        self.type_arguments = arguments.into_iter().collect();
        self
    }

    /// The superclass.
    #[inline]
    pub fn class(&self) -> &'static ClassInfo {
        (self.class)()
    }

    /// The type arguments passed to the superclass, in declaration order.
    #[inline]
    pub fn type_arguments(&self) -> &[TypeArgument] {
        &self.type_arguments
    }

    /// Projects an instance of the subclass to its superclass part.
    ///
    /// Returns `None` if `target` is not an instance of the subclass.
    #[inline]
    pub fn upcast<'a>(&self, target: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.upcast)(target)
    }

    /// Mutable version of [`Superclass::upcast`].
    #[inline]
    pub fn upcast_mut<'a>(&self, target: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        (self.upcast_mut)(target)
    }
}

impl core::fmt::Debug for Superclass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Superclass")
            .field("class", &self.class().type_path())
            .field("type_arguments", &self.type_arguments)
            .finish()
    }
}

fn upcast<T, S>(target: &dyn Reflect) -> Option<&dyn Reflect>
where
    T: Extends<S> + Send + Sync,
    S: Class + Send + Sync,
{
    target.downcast_ref::<T>().map(|value| value.base() as &dyn Reflect)
}

fn upcast_mut<T, S>(target: &mut dyn Reflect) -> Option<&mut dyn Reflect>
where
    T: Extends<S> + Send + Sync,
    S: Class + Send + Sync,
{
    target
        .downcast_mut::<T>()
        .map(|value| value.base_mut() as &mut dyn Reflect)
}
