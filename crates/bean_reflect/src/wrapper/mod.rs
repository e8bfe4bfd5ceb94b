//! Property access by name, backed by a prebuilt [`PropertyCache`].
//!
//! - [`BeanWrapper`]: bound to one object.
//! - [`ClassWrapper`]: bound to a class, the object is passed per call.
//!
//! Both build their cache once at construction, so repeated property access
//! costs one hash lookup. Methods are not cached, see [`ops::invoke`](crate::ops::invoke).

mod bean_wrapper;
mod cache;
mod class_wrapper;

pub use bean_wrapper::BeanWrapper;
pub use cache::PropertyCache;
pub use class_wrapper::ClassWrapper;

use alloc::vec::Vec;

use crate::error::BeanError;
use crate::info::{ClassInfo, Type};

/// Behaviour shared by the wrapper facades.
pub trait Wrapper {
    /// The property cache of the wrapped class.
    fn property_cache(&self) -> &PropertyCache;

    /// The wrapped class.
    #[inline]
    fn class(&self) -> &'static ClassInfo {
        self.property_cache().class()
    }

    /// The declared type of a property.
    fn property_type(&self, name: &str) -> Result<Type, BeanError> {
        self.property_cache().lookup(name).map(|handle| handle.ty())
    }

    #[inline]
    fn contains_property(&self, name: &str) -> bool {
        self.property_cache().contains(name)
    }

    /// All property names, most-derived class first.
    fn property_names(&self) -> Vec<&'static str> {
        self.property_cache().names().collect()
    }

    /// Number of properties.
    #[inline]
    fn len(&self) -> usize {
        self.property_cache().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.property_cache().is_empty()
    }
}
