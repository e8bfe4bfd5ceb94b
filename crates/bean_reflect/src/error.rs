//! Error outcomes of reflective access.
//!
//! Every fallible operation of this crate returns [`BeanError`], which is one
//! of two kinds:
//!
//! - [`NotFoundError`]: a domain failure, the requested member does not exist.
//!   The message names the member and the simple name of the class.
//! - [`AbnormalError`]: an underlying failure while touching a member that
//!   does exist. The original cause is kept and can be inspected.
//!
//! The remaining types in this module are the causes produced by the crate
//! itself. Host accessors may fail with any error, see [`HostError`].

use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error as StdError;

use thiserror::Error;

/// The error type returned by host accessors, method bodies and constructors.
pub type HostError = Box<dyn StdError + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// BeanError

/// The error type of all reflective operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BeanError {
    /// The requested field, property, method or constructor does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The member exists, but accessing it failed.
    #[error(transparent)]
    Abnormal(#[from] AbnormalError),
}

impl BeanError {
    /// Wraps an underlying cause as [`BeanError::Abnormal`].
    #[inline]
    pub fn abnormal(cause: impl Into<HostError>) -> Self {
        Self::Abnormal(AbnormalError::new(cause))
    }

    /// Returns `true` for [`BeanError::NotFound`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for [`BeanError::Abnormal`].
    #[inline]
    pub fn is_abnormal(&self) -> bool {
        matches!(self, Self::Abnormal(_))
    }

    /// Returns the domain error, if this is one.
    #[inline]
    pub fn as_not_found(&self) -> Option<&NotFoundError> {
        match self {
            Self::NotFound(err) => Some(err),
            Self::Abnormal(_) => None,
        }
    }

    /// Returns the abnormal error, if this is one.
    #[inline]
    pub fn as_abnormal(&self) -> Option<&AbnormalError> {
        match self {
            Self::Abnormal(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// NotFoundError

/// A requested member does not exist in the class hierarchy.
///
/// `class` is always the simple name of the class the lookup started from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundError {
    #[error("{name} property can not be found in the class {class}")]
    Field { class: &'static str, name: String },

    #[error("class {class} has no property named {name}")]
    Property { class: &'static str, name: String },

    #[error("method {signature} can not be found in the class {class}")]
    Method {
        class: &'static str,
        signature: String,
    },

    #[error("constructor {signature} can not be found in the class {class}")]
    Constructor {
        class: &'static str,
        signature: String,
    },

    #[error("{class} class must have a superclass with a generic type")]
    GenericSuperclass { class: &'static str },
}

impl NotFoundError {
    /// The simple name of the class the lookup started from.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Field { class, .. }
            | Self::Property { class, .. }
            | Self::Method { class, .. }
            | Self::Constructor { class, .. }
            | Self::GenericSuperclass { class } => *class,
        }
    }
}

// -----------------------------------------------------------------------------
// AbnormalError

/// An underlying failure while accessing an existing member.
///
/// Displays as the cause and reports it as [`source`](StdError::source), so
/// callers can find out what actually went wrong:
///
/// ```
/// use bean_reflect::error::{AbnormalError, TypeMismatch};
///
/// let err = AbnormalError::new(TypeMismatch::new("u32", "alloc::string::String"));
/// assert!(err.is::<TypeMismatch>());
/// assert_eq!(err.downcast_ref::<TypeMismatch>().unwrap().expected, "u32");
/// ```
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct AbnormalError {
    #[source]
    cause: HostError,
}

impl AbnormalError {
    /// Wraps the given cause.
    #[inline]
    pub fn new(cause: impl Into<HostError>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// Returns the original cause.
    #[inline]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Returns `true` if the cause is of type `E`.
    #[inline]
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.cause.is::<E>()
    }

    /// Returns the cause as `E`, if it is one.
    #[inline]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }

    /// Unwraps the original cause.
    #[inline]
    pub fn into_cause(self) -> HostError {
        self.cause
    }
}

// -----------------------------------------------------------------------------
// Causes

/// A value does not have the type it was required to have.
///
/// Raised for a wrong argument, a wrong value assigned to a field, or a typed
/// read whose requested result type differs from the actual one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("type mismatch: expected `{expected}`, found `{actual}`")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub actual: &'static str,
}

impl TypeMismatch {
    #[inline]
    pub const fn new(expected: &'static str, actual: &'static str) -> Self {
        Self { expected, actual }
    }
}

/// The target object is not an instance of the class declaring the member.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("object of class `{actual}` is not an instance of `{expected}`")]
pub struct TargetMismatch {
    pub expected: &'static str,
    pub actual: &'static str,
}

/// An instance member was accessed without a target object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("instance member `{member}` of class `{class}` requires a target object")]
pub struct NullTarget {
    pub class: &'static str,
    pub member: &'static str,
}

/// The number of arguments differs from the number of declared parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("wrong number of arguments: expected {expected}, found {actual}")]
pub struct ArgumentCount {
    pub expected: usize,
    pub actual: usize,
}

/// A type argument index is past the end of the argument list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("type argument index {index} out of bounds for length {len}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// No class is registered under the given name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("class `{name}` can not be found")]
pub struct ClassNotFound {
    pub name: String,
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::error::Error;

    use super::{AbnormalError, BeanError, NotFoundError, TypeMismatch};

    #[test]
    fn not_found_message_names_member_and_class() {
        let err = BeanError::from(NotFoundError::Field {
            class: "Dog",
            name: "wings".into(),
        });
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "wings property can not be found in the class Dog"
        );
        assert_eq!(err.as_not_found().map(NotFoundError::class), Some("Dog"));
    }

    #[test]
    fn abnormal_keeps_cause_identity() {
        let err = BeanError::abnormal(TypeMismatch::new("u32", "bool"));
        assert!(err.is_abnormal());
        assert_eq!(
            err.to_string(),
            "type mismatch: expected `u32`, found `bool`"
        );

        let source = err.source().unwrap();
        assert!(source.is::<TypeMismatch>());

        let abnormal = err.as_abnormal().unwrap();
        assert!(abnormal.is::<TypeMismatch>());
        assert!(!abnormal.is::<core::fmt::Error>());
    }

    #[test]
    fn abnormal_from_host_message() {
        let err = AbnormalError::new("disk on fire");
        assert_eq!(err.to_string(), "disk on fire");
        assert_eq!(err.into_cause().to_string(), "disk on fire");
    }
}
