#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod error;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod resolve;
pub mod wrapper;

#[cfg(test)]
mod testing;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use reflection::{Args, Reflect};
