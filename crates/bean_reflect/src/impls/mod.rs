//! [`Class`](crate::info::Class) implementations for std types, and the
//! static cells used to build them.

use alloc::string::String;

mod cell;
mod generic;
mod primitives;

pub use cell::{
    GenericClassInfoCell, GenericTypeCell, GenericTypePathCell, NonGenericClassInfoCell,
    NonGenericTypeCell,
};

/// Concatenates string slices into one `String`, allocating once.
///
/// Used to build type paths of generic types.
pub fn concat(parts: &[&str]) -> String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut out = String::with_capacity(len);
    parts.iter().for_each(|part| out.push_str(part));
    out
}
