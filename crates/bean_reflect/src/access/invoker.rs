use alloc::boxed::Box;
use core::any::Any;

use crate::access::target::{project, project_mut, require};
use crate::error::{ArgumentCount, BeanError, TypeMismatch};
use crate::info::{ConstructorInfo, FieldAccessor, MethodCall, Type, TypePath};
use crate::resolve::{FieldHandle, MethodHandle};
use crate::{Args, Reflect};

// -----------------------------------------------------------------------------
// Fields

/// Reads the value of a field.
///
/// `target` is ignored for static fields and required for instance fields.
/// An instance field declared by a superclass is read from the superclass
/// part of `target`.
pub fn get_field(
    handle: FieldHandle,
    target: Option<&dyn Reflect>,
) -> Result<Box<dyn Reflect>, BeanError> {
    match handle.info().accessor() {
        FieldAccessor::Static { get, .. } => get().map_err(BeanError::abnormal),
        FieldAccessor::Instance { get, .. } => {
            let target = require(target, handle.owner(), handle.name())?;
            let owner = project(target, handle.owner())?;
            get(owner).map_err(BeanError::abnormal)
        }
    }
}

/// Writes the value of a field.
///
/// The value must have exactly the declared type of the field. On error the
/// field is left unchanged.
pub fn set_field(
    handle: FieldHandle,
    target: Option<&mut dyn Reflect>,
    value: Box<dyn Reflect>,
) -> Result<(), BeanError> {
    check_value(handle.ty(), &*value)?;
    match handle.info().accessor() {
        FieldAccessor::Static { set, .. } => set(value).map_err(BeanError::abnormal),
        FieldAccessor::Instance { set, .. } => {
            let target = require(target, handle.owner(), handle.name())?;
            let owner = project_mut(target, handle.owner())?;
            set(owner, value).map_err(BeanError::abnormal)
        }
    }
}

// -----------------------------------------------------------------------------
// Methods

/// Calls a method with `args`.
///
/// The arguments must match the declared parameters in number and type.
/// An error returned by the method body is reported as
/// [`BeanError::Abnormal`] with the original error as its cause.
pub fn invoke_method(
    handle: MethodHandle,
    target: Option<&mut dyn Reflect>,
    args: Args,
) -> Result<Box<dyn Reflect>, BeanError> {
    check_arguments(handle.params(), &args)?;
    match handle.info().call() {
        MethodCall::Static(call) => call(args).map_err(BeanError::abnormal),
        MethodCall::Instance(call) => {
            let target = require(target, handle.owner(), handle.name())?;
            let owner = project_mut(target, handle.owner())?;
            call(owner, args).map_err(BeanError::abnormal)
        }
    }
}

/// Creates a new instance through a constructor.
pub fn construct(
    constructor: &ConstructorInfo,
    args: Args,
) -> Result<Box<dyn Reflect>, BeanError> {
    check_arguments(constructor.params(), &args)?;
    (constructor.call())(args).map_err(BeanError::abnormal)
}

// -----------------------------------------------------------------------------
// Results

/// Unboxes a reflected result as an `R`.
///
/// Fails with an abnormal [`TypeMismatch`] if the value is not an `R`.
pub fn downcast<R: Any + TypePath>(value: Box<dyn Reflect>) -> Result<R, BeanError> {
    value.take::<R>().map_err(BeanError::abnormal)
}

// -----------------------------------------------------------------------------
// Checks

fn check_value(expected: Type, value: &dyn Reflect) -> Result<(), BeanError> {
    let actual = value.reflect_type();
    if actual == expected {
        Ok(())
    } else {
        Err(BeanError::abnormal(TypeMismatch::new(
            expected.path(),
            actual.path(),
        )))
    }
}

fn check_arguments(params: &[Type], args: &Args) -> Result<(), BeanError> {
    if params.len() != args.len() {
        return Err(BeanError::abnormal(ArgumentCount {
            expected: params.len(),
            actual: args.len(),
        }));
    }
    params
        .iter()
        .zip(args.iter())
        .try_for_each(|(param, arg)| check_value(*param, arg))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::*;
    use crate::error::{NullTarget, TargetMismatch};
    use crate::info::Class;
    use crate::resolve::{find_constructor, find_field, find_method};
    use crate::testing::{Animal, Collar, Dog};

    #[test]
    fn read_own_and_inherited_fields() {
        let dog = Dog::new("rex", "lab");
        let class = Dog::class_info();

        let name = get_field(find_field(class, "name").unwrap(), Some(&dog)).unwrap();
        assert_eq!(downcast::<String>(name).unwrap(), "rex");

        let age = get_field(find_field(class, "age").unwrap(), Some(&dog)).unwrap();
        assert_eq!(downcast::<u32>(age).unwrap(), 3);
    }

    #[test]
    fn write_inherited_field_through_projection() {
        let mut dog = Dog::new("rex", "lab");
        let age = find_field(Dog::class_info(), "age").unwrap();

        set_field(age, Some(&mut dog), Box::new(9_u32)).unwrap();
        assert_eq!(dog.animal.age, 9);
    }

    #[test]
    fn shared_reference_field_keeps_identity() {
        let dog = Dog::new("rex", "lab");
        let collar = find_field(Dog::class_info(), "collar").unwrap();

        let value = get_field(collar, Some(&dog)).unwrap();
        let value = downcast::<Arc<Collar>>(value).unwrap();
        assert!(Arc::ptr_eq(&value, &dog.collar));
    }

    #[test]
    fn wrong_value_type_leaves_field_unchanged() {
        let mut dog = Dog::new("rex", "lab");
        let breed = find_field(Dog::class_info(), "breed").unwrap();

        let err = set_field(breed, Some(&mut dog), Box::new(5_u8)).unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<TypeMismatch>());
        assert_eq!(dog.breed, "lab");
    }

    #[test]
    fn instance_member_without_target() {
        let name = find_field(Dog::class_info(), "name").unwrap();
        let err = get_field(name, None).unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<NullTarget>());
    }

    #[test]
    fn unrelated_target() {
        let collar = Collar::default();
        let breed = find_field(Dog::class_info(), "breed").unwrap();

        let err = get_field(breed, Some(&collar)).unwrap_err();
        let cause = err.as_abnormal().unwrap().downcast_ref::<TargetMismatch>();
        assert_eq!(cause.unwrap().actual, "zoo::Collar");
    }

    #[test]
    fn inherited_method_runs_on_superclass_part() {
        let mut dog = Dog::new("rex", "lab");
        let grow = find_method(Dog::class_info(), "grow", &[Type::of::<u32>()]).unwrap();

        let age = invoke_method(grow, Some(&mut dog), crate::args![2_u32]).unwrap();
        assert_eq!(downcast::<u32>(age).unwrap(), 5);
        assert_eq!(dog.animal.age, 5);
    }

    #[test]
    fn argument_checks() {
        let mut dog = Dog::new("rex", "lab");
        let fetch = find_method(Dog::class_info(), "fetch", &[Type::of::<String>()]).unwrap();

        let err = invoke_method(fetch, Some(&mut dog), crate::args![]).unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<ArgumentCount>());

        let err = invoke_method(fetch, Some(&mut dog), crate::args![1_u8]).unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<TypeMismatch>());
    }

    #[test]
    fn host_failure_is_abnormal_with_original_cause() {
        let mut animal = Animal::default();
        let fail = find_method(Animal::class_info(), "fail", &[]).unwrap();

        let err = invoke_method(fail, Some(&mut animal), crate::args![]).unwrap_err();
        assert!(err.is_abnormal());
        assert_eq!(err.to_string(), "animal refused");
    }

    #[test]
    fn static_method_needs_no_target() {
        let named = find_method(Animal::class_info(), "named", &[Type::of::<String>()]).unwrap();
        let value = invoke_method(named, None, crate::args![String::from("kit")]).unwrap();
        assert_eq!(downcast::<Animal>(value).unwrap().name, "kit");
    }

    #[test]
    fn construct_with_arguments() {
        let params = [Type::of::<String>(), Type::of::<u32>()];
        let constructor = find_constructor(Animal::class_info(), &params).unwrap();

        let value = construct(constructor, crate::args![String::from("kit"), 1_u32]).unwrap();
        let animal = downcast::<Animal>(value).unwrap();
        assert_eq!((animal.name.as_str(), animal.age), ("kit", 1));
    }

    #[test]
    fn downcast_to_wrong_type() {
        let err = downcast::<u32>(Box::new(String::new())).unwrap_err();
        assert!(err.as_abnormal().unwrap().is::<TypeMismatch>());
    }
}
