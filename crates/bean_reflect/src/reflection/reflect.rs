use alloc::boxed::Box;
use core::any::Any;

use crate::error::TypeMismatch;
use crate::info::{Class, ClassInfo, DynamicTypePath, Type, TypePath};

// -----------------------------------------------------------------------------
// Reflect

/// The object-safe runtime view of a class instance.
///
/// Automatically implemented for every `T: Class + Send + Sync`, so a value
/// only needs a [`Class`] implementation to take part in reflective access.
///
/// `&dyn Reflect` is the "object of unknown concrete shape" that wrappers,
/// resolvers and the invoker operate on.
///
/// ```
/// use bean_reflect::{Reflect, info::Type};
///
/// let value: Box<dyn Reflect> = Box::new(String::from("rex"));
/// assert_eq!(value.reflect_type(), Type::of::<String>());
/// assert_eq!(value.reflect_class().type_name(), "String");
/// assert_eq!(value.take::<String>().unwrap(), "rex");
/// ```
pub trait Reflect: DynamicTypePath + Any + Send + Sync {
    /// Returns the runtime [`Type`] of the underlying value.
    fn reflect_type(&self) -> Type;

    /// Returns the [`ClassInfo`] of the underlying value.
    ///
    /// This is the most-derived class, even when the value was reached
    /// through a supertype.
    fn reflect_class(&self) -> &'static ClassInfo;

    /// Casts this type to a reflected value.
    fn as_reflect(&self) -> &dyn Reflect;

    /// Casts this type to a mutable reflected value.
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;

    /// Casts this type to a boxed reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl<T: Class + Send + Sync> Reflect for T {
    #[inline]
    fn reflect_type(&self) -> Type {
        Type::of::<T>()
    }

    #[inline]
    fn reflect_class(&self) -> &'static ClassInfo {
        T::class_info()
    }

    #[inline]
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }

    #[inline]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        self
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.reflect_type().is::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// Fails with [`TypeMismatch`] naming both types if the underlying value
    /// is not of type `T`.
    pub fn take<T: Any + TypePath>(self: Box<dyn Reflect>) -> Result<T, TypeMismatch> {
        let actual = self.reflect_type_path();
        <Box<dyn Any>>::downcast::<T>(self)
            .map(|value| *value)
            .map_err(|_| TypeMismatch::new(T::type_path(), actual))
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(self.reflect_type_name())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests
