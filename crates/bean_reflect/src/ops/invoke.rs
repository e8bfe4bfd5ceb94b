use alloc::boxed::Box;
use core::any::Any;

use crate::access::{construct, downcast, invoke_method};
use crate::error::BeanError;
use crate::info::{ClassInfo, Type, TypePath};
use crate::resolve::{argument_types, find_constructor, find_method};
use crate::{Args, Reflect};

// -----------------------------------------------------------------------------
// Construction

/// Creates an instance of `class` through its no-argument constructor.
pub fn new_instance(class: &'static ClassInfo) -> Result<Box<dyn Reflect>, BeanError> {
    new_instance_with_types(class, Args::new(), &[])
}

/// Creates an instance of `class`, choosing the constructor by the runtime
/// types of `args`.
pub fn new_instance_with(
    class: &'static ClassInfo,
    args: Args,
) -> Result<Box<dyn Reflect>, BeanError> {
    let types = argument_types(&args);
    new_instance_with_types(class, args, &types)
}

/// Creates an instance of `class` through the constructor declaring exactly
/// `types`.
pub fn new_instance_with_types(
    class: &'static ClassInfo,
    args: Args,
    types: &[Type],
) -> Result<Box<dyn Reflect>, BeanError> {
    let constructor = find_constructor(class, types)?;
    construct(constructor, args)
}

// -----------------------------------------------------------------------------
// Invocation

/// Invokes the method `name` on `target`, choosing the overload by the
/// runtime types of `args`, and returns its result as an `R`.
///
/// The method is resolved on the runtime class of `target` each time this is
/// called. An argument whose runtime type is not exactly the declared
/// parameter type does not match.
///
/// ```
/// use bean_reflect::{args, ops};
///
/// let mut text = String::from("bean");
/// let len: usize = ops::invoke(&mut text, "len", args![]).unwrap();
/// assert_eq!(len, 4);
///
/// let err = ops::invoke::<usize>(&mut text, "size", args![]).unwrap_err();
/// assert_eq!(err.to_string(), "method size() can not be found in the class String");
/// ```
pub fn invoke<R: Any + TypePath>(
    target: &mut dyn Reflect,
    name: &str,
    args: Args,
) -> Result<R, BeanError> {
    let types = argument_types(&args);
    invoke_with_types(target, name, args, &types)
}

/// Invokes the method `name` declaring exactly `types` on `target`.
///
/// Use this when an argument's runtime type differs from the declared
/// parameter type, or to pick one overload explicitly.
pub fn invoke_with_types<R: Any + TypePath>(
    target: &mut dyn Reflect,
    name: &str,
    args: Args,
    types: &[Type],
) -> Result<R, BeanError> {
    let handle = find_method(target.reflect_class(), name, types)?;
    downcast(invoke_method(handle, Some(target), args)?)
}

/// Invokes the static method `name` of `class`.
pub fn invoke_static<R: Any + TypePath>(
    class: &'static ClassInfo,
    name: &str,
    args: Args,
) -> Result<R, BeanError> {
    let types = argument_types(&args);
    let handle = find_method(class, name, &types)?;
    downcast(invoke_method(handle, None, args)?)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::args;
    use crate::error::NullTarget;
    use crate::info::Class;
    use crate::testing::{Animal, Collar, Dog};

    #[test]
    fn construct_by_runtime_argument_types() {
        let value = new_instance_with(Animal::class_info(), args![String::from("kit"), 2_u32]);
        let animal = downcast::<Animal>(value.unwrap()).unwrap();
        assert_eq!(animal.age, 2);

        let collar = new_instance(Collar::class_info()).unwrap();
        assert!(collar.is::<Collar>());
    }

    #[test]
    fn missing_constructor_is_not_found() {
        let err = new_instance(Dog::class_info()).unwrap_err();
        assert!(err.is_not_found());

        let types = [Type::of::<String>(), Type::of::<String>()];
        let dog = new_instance_with_types(
            Dog::class_info(),
            args![String::from("rex"), String::from("lab")],
            &types,
        );
        assert_eq!(downcast::<Dog>(dog.unwrap()).unwrap().breed, "lab");
    }

    #[test]
    fn invoke_inherited_method() {
        let mut dog = Dog::new("rex", "lab");
        let sound: String = invoke(&mut dog, "bark", args![]).unwrap();
        assert_eq!(sound, "animal makes a sound");

        let text: String = invoke(&mut dog, "describe", args![]).unwrap();
        assert_eq!(text, "dog rex");
    }

    #[test]
    fn runtime_type_mismatch_is_not_found() {
        let mut dog = Dog::new("rex", "lab");
        let err = invoke::<String>(&mut dog, "fetch", args![7_u32]).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "method fetch(u32) can not be found in the class Dog"
        );
    }

    #[test]
    fn explicit_types_pick_overload() {
        let mut dog = Dog::new("rex", "lab");

        invoke_with_types::<()>(&mut dog, "rename", args!["max"], &[Type::of::<&'static str>()])
            .unwrap();
        assert_eq!(dog.name, "max");

        invoke::<()>(&mut dog, "rename", args![String::from("old")]).unwrap();
        assert_eq!(dog.animal.name, "old");
        assert_eq!(dog.name, "max");
    }

    #[test]
    fn explicit_types_with_wrong_values_are_abnormal() {
        let mut dog = Dog::new("rex", "lab");
        let err = invoke_with_types::<String>(
            &mut dog,
            "fetch",
            args![1_u8],
            &[Type::of::<String>()],
        )
        .unwrap_err();
        assert!(err.is_abnormal());
    }

    #[test]
    fn static_invocation() {
        let animal: Animal =
            invoke_static(Animal::class_info(), "named", args![String::from("kit")]).unwrap();
        assert_eq!(animal.name, "kit");

        let err = invoke_static::<String>(Animal::class_info(), "bark", args![]).unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<NullTarget>());
    }
}
