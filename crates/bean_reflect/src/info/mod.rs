//! Static descriptions of reflected types.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, the "simple name".
//!
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//!
//! - [`Type`]: A `TypeId` plus the type's names. Equality is by `TypeId`.
//!
//! - [`Class`]: A trait for obtaining the member tables of a type.
//!
//! - [`Extends`]: Declares the embedded superclass of a type.
//!
//! - [`ClassInfo`]: The member tables themselves:
//!     - [`Superclass`]: accessor, upcast projections and [`TypeArgument`]s.
//!     - [`FieldInfo`]: name, declared type, [`Modifiers`] and accessor.
//!     - [`MethodInfo`]: name, parameter types, return type and call.
//!     - [`ConstructorInfo`]: parameter types and call.

// -----------------------------------------------------------------------------
// Modules

mod class;
mod class_info;
mod field_info;
mod method_info;
mod modifiers;
mod superclass;
mod type_path;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_info::FieldAccessor;
pub(crate) use method_info::MethodCall;
pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use class::{Class, Extends};
pub use class_info::{ClassInfo, ClassKind};
pub use field_info::FieldInfo;
pub use method_info::{ConstructorInfo, MethodInfo, render_signature};
pub use modifiers::Modifiers;
pub use superclass::{Superclass, TypeArgument};
pub use type_path::{DynamicTypePath, Type, TypePath};
