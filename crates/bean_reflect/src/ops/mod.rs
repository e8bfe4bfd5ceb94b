//! Class-level utilities.
//!
//! - Construction: [`new_instance`], [`new_instance_with`], [`new_instance_with_types`].
//! - Invocation by name: [`invoke`], [`invoke_with_types`], [`invoke_static`].
//! - Generic superclass arguments: [`generic_superclass_param`],
//!   [`generic_superclass_param_at`].
//! - Predicates: [`is_from`], [`is_nested_type`], [`class_of`].
//! - Hierarchy listing: [`superclasses`], [`interfaces`].

mod generics;
mod invoke;
mod predicate;

pub use generics::{generic_superclass_param, generic_superclass_param_at};
pub use invoke::{
    invoke, invoke_static, invoke_with_types, new_instance, new_instance_with,
    new_instance_with_types,
};
pub use predicate::{ClassOrObject, class_of, is_from, is_nested_type};

pub use crate::resolve::{interfaces, superclasses};
