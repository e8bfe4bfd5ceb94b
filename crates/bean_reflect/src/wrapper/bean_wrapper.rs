use alloc::boxed::Box;
use core::any::Any;

use crate::access::{downcast, get_field, set_field};
use crate::error::BeanError;
use crate::info::TypePath;
use crate::wrapper::{PropertyCache, Wrapper};
use crate::{Args, Reflect, ops};

/// Property access on one object.
///
/// The property map is built from the runtime class of the object when the
/// wrapper is created.
///
/// ```
/// use bean_reflect::{
///     impl_type_path, impls::NonGenericClassInfoCell,
///     info::{Class, ClassInfo, FieldInfo},
///     wrapper::{BeanWrapper, Wrapper},
/// };
///
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
/// let mut ball = Ball { color: String::from("red") };
/// let mut wrapper = BeanWrapper::wrap(&mut ball);
///
/// wrapper.set("color", String::from("blue")).unwrap();
/// assert_eq!(wrapper.get::<String>("color").unwrap(), "blue");
/// assert!(wrapper.get_value("size").unwrap_err().is_not_found());
/// ```
pub struct BeanWrapper<'a> {
    bean: &'a mut dyn Reflect,
    cache: PropertyCache,
}

impl<'a> BeanWrapper<'a> {
    /// Wraps `bean`, building the property map of its runtime class.
    pub fn wrap(bean: &'a mut dyn Reflect) -> Self {
        let cache = PropertyCache::new(bean.reflect_class());
        Self { bean, cache }
    }

    /// The wrapped object.
    #[inline]
    pub fn bean(&self) -> &dyn Reflect {
        &*self.bean
    }

    /// The wrapped object, mutably.
    #[inline]
    pub fn bean_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.bean
    }

    /// Reads a property as an `R`.
    pub fn get<R: Any + TypePath>(&self, name: &str) -> Result<R, BeanError> {
        downcast(self.get_value(name)?)
    }

    /// Reads a property as a reflected value.
    pub fn get_value(&self, name: &str) -> Result<Box<dyn Reflect>, BeanError> {
        let handle = self.cache.lookup(name)?;
        get_field(handle, Some(&*self.bean))
    }

    /// Writes a property.
    #[inline]
    pub fn set(&mut self, name: &str, value: impl Reflect) -> Result<(), BeanError> {
        self.set_value(name, Box::new(value))
    }

    /// Writes a property from a reflected value.
    pub fn set_value(&mut self, name: &str, value: Box<dyn Reflect>) -> Result<(), BeanError> {
        let handle = self.cache.lookup(name)?;
        set_field(handle, Some(&mut *self.bean), value)
    }

    /// Invokes a method of the wrapped object, see [`ops::invoke`].
    pub fn invoke<R: Any + TypePath>(&mut self, name: &str, args: Args) -> Result<R, BeanError> {
        ops::invoke(&mut *self.bean, name, args)
    }
}

impl Wrapper for BeanWrapper<'_> {
    #[inline]
    fn property_cache(&self) -> &PropertyCache {
        &self.cache
    }
}
