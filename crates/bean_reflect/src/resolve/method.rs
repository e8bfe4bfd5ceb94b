use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use crate::error::{BeanError, NotFoundError};
use crate::info::{ClassInfo, ConstructorInfo, MethodInfo, Modifiers, Type, render_signature};
use crate::resolve::ancestors;
use crate::Args;

// -----------------------------------------------------------------------------
// MethodHandle

/// A resolved method with one exact parameter signature.
///
/// Method handles are not cached; each invocation by name resolves again.
#[derive(Clone, Copy)]
pub struct MethodHandle {
    owner: &'static ClassInfo,
    info: &'static MethodInfo,
}

impl MethodHandle {
    /// The class declaring the method.
    #[inline]
    pub fn owner(&self) -> &'static ClassInfo {
        self.owner
    }

    #[inline]
    pub fn info(&self) -> &'static MethodInfo {
        self.info
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    #[inline]
    pub fn params(&self) -> &'static [Type] {
        self.info.params()
    }

    #[inline]
    pub fn return_type(&self) -> Type {
        self.info.return_type()
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.info.modifiers()
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.info.is_static()
    }

    /// Renders `name(Param, Types)`.
    #[inline]
    pub fn signature(&self) -> String {
        self.info.signature()
    }
}

impl core::fmt::Debug for MethodHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}::{}", self.owner.type_name(), self.signature())
    }
}

// -----------------------------------------------------------------------------
// Lookup

/// Finds the method `name` taking exactly `params`, walking from `class` to
/// the root.
///
/// Parameter types must be equal, in order, to the declared ones. There is no
/// widening and no matching by supertype. The most-derived level declaring the
/// signature wins.
pub fn find_method(
    class: &'static ClassInfo,
    name: &str,
    params: &[Type],
) -> Result<MethodHandle, BeanError> {
    for owner in ancestors(class) {
        match owner.declared_method(name, params) {
            Some(info) => return Ok(MethodHandle { owner, info }),
            None => trace!(
                "`{}` does not declare `{}`",
                owner.type_name(),
                render_signature(name, params)
            ),
        }
    }
    Err(NotFoundError::Method {
        class: class.type_name(),
        signature: render_signature(name, params),
    }
    .into())
}

/// The runtime types of `args`, used as parameter types when the caller
/// does not name them.
///
/// An argument whose runtime type differs from the declared parameter type
/// will therefore not find the method.
#[inline]
pub fn argument_types(args: &Args) -> Vec<Type> {
    args.types()
}

/// Finds the constructor of `class` taking exactly `params`.
///
/// Only `class` itself is searched: constructors are not inherited.
pub fn find_constructor(
    class: &'static ClassInfo,
    params: &[Type],
) -> Result<&'static ConstructorInfo, BeanError> {
    class.declared_constructor(params).ok_or_else(|| {
        NotFoundError::Constructor {
            class: class.type_name(),
            signature: render_signature(class.type_name(), params),
        }
        .into()
    })
}

// -----------------------------------------------------------------------------
// Tests
