//! Member discovery across a class hierarchy.
//!
//! Lookups walk from the given class to the root of its hierarchy, most-derived
//! first, and stop at the first level declaring a match. Nothing here is cached.

mod field;
mod hierarchy;
mod method;

pub use field::{
    FieldHandle, FieldScope, declared_field_names, declared_fields,
    declared_non_static_field_names, declared_non_static_fields, find_field, list_field_names,
    list_fields, referable_field_names, referable_fields, referable_non_static_field_names,
    referable_non_static_fields,
};
pub use hierarchy::{Ancestors, ancestors, interfaces, superclasses};
pub use method::{MethodHandle, argument_types, find_constructor, find_method};
