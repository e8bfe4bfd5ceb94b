use alloc::boxed::Box;
use core::any::Any;

use crate::access::{downcast, get_field, set_field};
use crate::error::BeanError;
use crate::info::{Class, ClassInfo, TypePath};
use crate::resolve::FieldHandle;
use crate::wrapper::{PropertyCache, Wrapper};
use crate::Reflect;

/// Property access for every object of a class.
///
/// The wrapper holds no object: it is built once per class and can be shared
/// between threads, with the target passed to each call.
///
/// Objects of subclasses are accepted; their part declared by the wrapped
/// class is accessed.
pub struct ClassWrapper {
    cache: PropertyCache,
}

impl ClassWrapper {
    /// Wraps `class`, building its property map.
    #[inline]
    pub fn wrap(class: &'static ClassInfo) -> Self {
        Self {
            cache: PropertyCache::new(class),
        }
    }

    /// Wraps the class of `T`.
    #[inline]
    pub fn of<T: Class>() -> Self {
        Self::wrap(T::class_info())
    }

    /// Reads a property of `bean` as an `R`.
    pub fn get<R: Any + TypePath>(&self, bean: &dyn Reflect, name: &str) -> Result<R, BeanError> {
        downcast(self.get_value(bean, name)?)
    }

    /// Reads a property of `bean` as a reflected value.
    pub fn get_value(&self, bean: &dyn Reflect, name: &str) -> Result<Box<dyn Reflect>, BeanError> {
        get_field(self.cache.lookup(name)?, Some(bean))
    }

    /// Writes a property of `bean`.
    #[inline]
    pub fn set(
        &self,
        bean: &mut dyn Reflect,
        name: &str,
        value: impl Reflect,
    ) -> Result<(), BeanError> {
        self.set_value(bean, name, Box::new(value))
    }

    /// Writes a property of `bean` from a reflected value.
    pub fn set_value(
        &self,
        bean: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
    ) -> Result<(), BeanError> {
        set_field(self.cache.lookup(name)?, Some(bean), value)
    }

    /// Reads a static property as an `R`.
    ///
    /// Instance properties fail with an abnormal
    /// [`NullTarget`](crate::error::NullTarget).
    pub fn get_static<R: Any + TypePath>(&self, name: &str) -> Result<R, BeanError> {
        downcast(self.get_static_value(name)?)
    }

    /// Reads a static property as a reflected value.
    pub fn get_static_value(&self, name: &str) -> Result<Box<dyn Reflect>, BeanError> {
        get_field(self.cache.lookup(name)?, None)
    }

    /// Writes a static property.
    #[inline]
    pub fn set_static(&self, name: &str, value: impl Reflect) -> Result<(), BeanError> {
        self.set_static_value(name, Box::new(value))
    }

    /// Writes a static property from a reflected value.
    pub fn set_static_value(&self, name: &str, value: Box<dyn Reflect>) -> Result<(), BeanError> {
        set_field(self.cache.lookup(name)?, None, value)
    }

    /// All properties, most-derived class first.
    #[inline]
    pub fn properties(&self) -> impl Iterator<Item = FieldHandle> {
        self.cache.iter()
    }
}

impl Wrapper for ClassWrapper {
    #[inline]
    fn property_cache(&self) -> &PropertyCache {
        &self.cache
    }
}

impl core::fmt::Debug for ClassWrapper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ClassWrapper").field(&self.cache).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use std::thread;

    use super::ClassWrapper;
    use crate::error::{NullTarget, TargetMismatch};
    use crate::info::{Class, Type};
    use crate::testing::{self, Animal, Collar, Dog};
    use crate::wrapper::Wrapper;

    #[test]
    fn one_wrapper_many_objects() {
        let wrapper = ClassWrapper::of::<Dog>();
        let rex = Dog::new("rex", "lab");
        let kit = Dog::new("kit", "pug");

        assert_eq!(wrapper.get::<String>(&rex, "name").unwrap(), "rex");
        assert_eq!(wrapper.get::<String>(&kit, "breed").unwrap(), "pug");
    }

    #[test]
    fn superclass_wrapper_accepts_subclass_objects() {
        let wrapper = ClassWrapper::of::<Animal>();
        let mut dog = Dog::new("rex", "lab");

        assert_eq!(wrapper.get::<String>(&dog, "name").unwrap(), "animal");
        wrapper.set(&mut dog, "age", 11_u32).unwrap();
        assert_eq!(dog.animal.age, 11);
    }

    #[test]
    fn unrelated_object_is_abnormal() {
        let wrapper = ClassWrapper::of::<Dog>();
        let err = wrapper.get_value(&Collar::default(), "breed").unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<TargetMismatch>());
    }

    #[test]
    fn static_properties_without_instance() {
        let wrapper = ClassWrapper::wrap(Animal::class_info());
        assert_eq!(wrapper.get_static::<&'static str>("kingdom").unwrap(), testing::kingdom());
        assert_eq!(wrapper.property_type("kingdom").unwrap(), Type::of::<&'static str>());

        let err = wrapper.get_static_value("age").unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<NullTarget>());
    }

    #[test]
    fn static_property_write() {
        let wrapper = ClassWrapper::of::<Dog>();
        wrapper.set_static("registered", 4_u32).unwrap();
        assert_eq!(wrapper.get_static::<u32>("registered").unwrap(), 4);
    }

    #[test]
    fn properties_listing() {
        let wrapper = ClassWrapper::of::<Dog>();
        let names: Vec<_> = wrapper.properties().map(|p| p.name()).collect();
        assert_eq!(names, wrapper.property_names());
        assert!(wrapper.contains_property("kingdom"));
        assert!(!wrapper.contains_property("wings"));
    }

    #[test]
    fn shared_between_threads() {
        let wrapper = ClassWrapper::of::<Dog>();
        let dogs = [Dog::new("a", "lab"), Dog::new("b", "pug")];

        thread::scope(|scope| {
            for dog in &dogs {
                let wrapper = &wrapper;
                scope.spawn(move || {
                    for _ in 0..100 {
                        let name = wrapper.get::<String>(dog, "name").unwrap();
                        assert_eq!(name, dog.name);
                    }
                });
            }
        });
    }
}
