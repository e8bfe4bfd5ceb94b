use crate::Reflect;
use crate::error::{BeanError, NullTarget, TargetMismatch};
use crate::info::ClassInfo;
use crate::resolve::ancestors;

/// Reaches the part of `target` declared by `owner`.
///
/// Starts at the runtime class of `target` and follows superclass upcasts
/// until `owner` is reached. Fails if `owner` is not among the ancestors.
pub(crate) fn project<'a>(
    target: &'a dyn Reflect,
    owner: &'static ClassInfo,
) -> Result<&'a dyn Reflect, BeanError> {
    let actual = target.reflect_class();
    let mut current = target;
    for class in ancestors(actual) {
        if class.ty() == owner.ty() {
            return Ok(current);
        }
        let Some(next) = class.superclass().and_then(|s| s.upcast(current)) else {
            break;
        };
        current = next;
    }
    Err(mismatch(owner, actual))
}

/// Mutable version of [`project`].
pub(crate) fn project_mut<'a>(
    target: &'a mut dyn Reflect,
    owner: &'static ClassInfo,
) -> Result<&'a mut dyn Reflect, BeanError> {
    let actual = target.reflect_class();
    let mut current = target;
    for class in ancestors(actual) {
        if class.ty() == owner.ty() {
            return Ok(current);
        }
        let Some(superclass) = class.superclass() else {
            break;
        };
        current = match superclass.upcast_mut(current) {
            Some(next) => next,
            None => break,
        };
    }
    Err(mismatch(owner, actual))
}

/// Unwraps the target of an instance member.
#[inline]
pub(crate) fn require<T>(
    target: Option<T>,
    owner: &'static ClassInfo,
    member: &'static str,
) -> Result<T, BeanError> {
    target.ok_or_else(|| {
        BeanError::abnormal(NullTarget {
            class: owner.type_name(),
            member,
        })
    })
}

#[cold]
fn mismatch(owner: &'static ClassInfo, actual: &'static ClassInfo) -> BeanError {
    BeanError::abnormal(TargetMismatch {
        expected: owner.type_path(),
        actual: actual.type_path(),
    })
}

#[cfg(test)]
mod tests {
    use super::{project, project_mut};
    use crate::Reflect;
    use crate::error::TargetMismatch;
    use crate::info::Class;
    use crate::testing::{Animal, Dog};

    #[test]
    fn project_reaches_declaring_class() {
        let dog = Dog::new("rex", "lab");
        let target: &dyn Reflect = &dog;

        let own = project(target, Dog::class_info()).unwrap();
        assert_eq!(own.downcast_ref::<Dog>().unwrap().name, "rex");

        let base = project(target, Animal::class_info()).unwrap();
        assert_eq!(base.downcast_ref::<Animal>().unwrap().name, "animal");
    }

    #[test]
    fn project_mut_writes_into_base() {
        let mut dog = Dog::new("rex", "lab");
        {
            let base = project_mut(&mut dog, Animal::class_info()).unwrap();
            base.downcast_mut::<Animal>().unwrap().age = 9;
        }
        assert_eq!(dog.animal.age, 9);
        assert_eq!(dog.name, "rex");
    }

    #[test]
    fn project_to_subclass_is_mismatch() {
        let animal = Animal::default();
        let err = project(&animal, Dog::class_info()).unwrap_err();
        let cause = err.as_abnormal().unwrap().downcast_ref::<TargetMismatch>();
        assert_eq!(cause.unwrap().expected, "zoo::Dog");
    }
}
