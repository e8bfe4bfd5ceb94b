use crate::error::{BeanError, IndexOutOfBounds, NotFoundError};
use crate::info::{ClassInfo, TypeArgument};

/// The first type argument `class` passes to its superclass.
///
/// For `DogRepository extends Repository<Dog>` this is `Dog`.
#[inline]
pub fn generic_superclass_param(class: &'static ClassInfo) -> Result<&'static ClassInfo, BeanError> {
    generic_superclass_param_at(class, 0)
}

/// The type argument at `index` that `class` passes to its superclass.
///
/// Fails with [`NotFoundError::GenericSuperclass`] when `class` has no
/// superclass, passes no type arguments, or passes an unresolved type
/// parameter. An `index` past the last argument fails with an abnormal
/// [`IndexOutOfBounds`].
pub fn generic_superclass_param_at(
    class: &'static ClassInfo,
    index: usize,
) -> Result<&'static ClassInfo, BeanError> {
    let not_generic = || -> BeanError {
        NotFoundError::GenericSuperclass {
            class: class.type_name(),
        }
        .into()
    };

    let superclass = class.superclass().ok_or_else(not_generic)?;
    let arguments = superclass.type_arguments();
    if arguments.is_empty() {
        return Err(not_generic());
    }

    match arguments.get(index) {
        Some(TypeArgument::Class(argument)) => Ok(argument()),
        Some(TypeArgument::Parameter(_)) => Err(not_generic()),
        None => Err(BeanError::abnormal(IndexOutOfBounds {
            index,
            len: arguments.len(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::Class;
    use crate::testing::{Dog, DogRepository, OpenRepository, Repository};

    #[test]
    fn concrete_type_arguments() {
        let class = DogRepository::class_info();
        assert!(generic_superclass_param(class).unwrap().type_is::<Dog>());
        assert_eq!(
            generic_superclass_param_at(class, 1).unwrap().type_name(),
            "String"
        );
    }

    #[test]
    fn index_out_of_range_is_abnormal() {
        let err = generic_superclass_param_at(DogRepository::class_info(), 2).unwrap_err();
        let cause = err.as_abnormal().unwrap().downcast_ref::<IndexOutOfBounds>();
        assert_eq!(cause.copied(), Some(IndexOutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn missing_or_unresolved_arguments_are_not_found() {
        let err = generic_superclass_param(Dog::class_info()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dog class must have a superclass with a generic type"
        );

        assert!(generic_superclass_param(Repository::class_info()).unwrap_err().is_not_found());
        assert!(generic_superclass_param(OpenRepository::class_info()).unwrap_err().is_not_found());
    }
}
