//! Class lookup by name.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, classes declared through
//! [`register_class!`](crate::register_class) are collected at link time by
//! the [`inventory`](https://docs.rs/inventory) crate and added by
//! [`ClassRegistry::auto_register`]. Only concrete types can be submitted.

mod class_registry;

pub use class_registry::ClassRegistry;
