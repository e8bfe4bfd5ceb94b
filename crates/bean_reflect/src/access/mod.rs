//! Reading, writing and calling resolved members.
//!
//! The functions here take handles produced by [`resolve`](crate::resolve)
//! and apply them to a target object. Instance members declared by a
//! superclass are applied to the superclass part of the target, reached
//! through the [`Superclass`](crate::info::Superclass) projections.
//!
//! Every failure is reported as [`BeanError::Abnormal`](crate::error::BeanError)
//! with one of these causes:
//!
//! - [`NullTarget`](crate::error::NullTarget): no target for an instance member.
//! - [`TargetMismatch`](crate::error::TargetMismatch): the target does not
//!   inherit from the declaring class.
//! - [`ArgumentCount`](crate::error::ArgumentCount) or
//!   [`TypeMismatch`](crate::error::TypeMismatch): bad arguments or values.
//! - Any error returned by the host accessor or method body, unchanged.

mod invoker;
mod target;

pub use invoker::{construct, downcast, get_field, invoke_method, set_field};
