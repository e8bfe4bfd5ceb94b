//! Containers for static storage of class information.
//!
//! This is usually used to implement [`Class`](crate::info::Class).
//!
//! ## NonGenericClassInfoCell
//!
//! For non generic types, [`NonGenericClassInfoCell`] stores the [`ClassInfo`].
//! Internally, there is an [`OnceLock<T>`], almost no additional expenses.
//!
//! There is no `NonGenericTypePathCell` because it can be replaced by a static string literal.
//!
//! ## GenericTypeCell
//!
//! For generic types, provide the following containers:
//! - [`GenericClassInfoCell`]: Storage [`ClassInfo`]
//! - [`GenericTypePathCell`]: Storage [`String`]
//!
//! If the type is generic, the `static CELL` inside the function is shared by
//! every instantiation. Therefore, the inner of this container is a
//! [`TypeIdMap<T>`] wrapped in [`RwLock`].

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use bean_utils::TypeIdMap;

use crate::info::ClassInfo;

mod sealed {
    use super::ClassInfo;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for ClassInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic class information.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for static storage of non-generic class information.
///
/// See [`Class`](crate::info::Class) for an example.
pub type NonGenericClassInfoCell = NonGenericTypeCell<ClassInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the value stored in the cell.
    ///
    /// If the cell is empty, a new value is generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

impl<T: TypedProperty> Default for NonGenericTypeCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for static storage of class information with generics.
///
/// See more information in [`GenericClassInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for static storage of class information with generics.
///
/// ```
/// use bean_reflect::{
///     impls::{concat, GenericClassInfoCell, GenericTypePathCell},
///     info::{Class, ClassInfo, TypePath},
/// };
///
/// struct Crate<T>(T);
///
/// impl<T: TypePath> TypePath for Crate<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["zoo::Crate<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Crate<", T::type_name(), ">"]))
///     }
/// }
///
/// impl<T: TypePath> Class for Crate<T> {
///     fn class_info() -> &'static ClassInfo {
///         static CELL: GenericClassInfoCell = GenericClassInfoCell::new();
///         CELL.get_or_insert::<Self>(ClassInfo::new::<Self>)
///     }
/// }
///
/// assert_eq!(<Crate<u8>>::class_info().type_name(), "Crate<u8>");
/// assert_eq!(<Crate<bool>>::class_info().type_name(), "Crate<bool>");
/// ```
pub type GenericClassInfoCell = GenericTypeCell<ClassInfo>;

/// Container for static storage of type path with generics.
///
/// See [`GenericClassInfoCell`].
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns a reference to the value stored for type `G`.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl<T: TypedProperty> Default for GenericTypeCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
