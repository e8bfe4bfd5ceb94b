use alloc::vec::Vec;

use bean_utils::hash::HashSet;
use log::trace;

use crate::error::{BeanError, NotFoundError};
use crate::info::{ClassInfo, FieldInfo, Modifiers, Type};
use crate::resolve::ancestors;

// -----------------------------------------------------------------------------
// FieldHandle

/// A resolved field on a specific level of a class hierarchy.
///
/// Handles bypass declared visibility: every field can be read and written
/// through the [invoker](crate::access), whatever its [`Modifiers`].
#[derive(Clone, Copy)]
pub struct FieldHandle {
    owner: &'static ClassInfo,
    info: &'static FieldInfo,
}

impl FieldHandle {
    #[inline]
    pub(crate) fn new(owner: &'static ClassInfo, info: &'static FieldInfo) -> Self {
        Self { owner, info }
    }

    /// The class declaring the field.
    #[inline]
    pub fn owner(&self) -> &'static ClassInfo {
        self.owner
    }

    #[inline]
    pub fn info(&self) -> &'static FieldInfo {
        self.info
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    /// The declared type of the field.
    #[inline]
    pub fn ty(&self) -> Type {
        *self.info.ty()
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.info.modifiers()
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.info.is_static()
    }
}

impl core::fmt::Debug for FieldHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}::{}: {}",
            self.owner.type_name(),
            self.name(),
            self.info.type_name()
        )
    }
}

// -----------------------------------------------------------------------------
// FieldScope

/// Which fields [`list_fields`] returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldScope {
    /// Walk superclasses too, not only the class itself.
    pub inherited: bool,
    /// Drop fields carrying the `STATIC` modifier.
    pub exclude_static: bool,
}

impl FieldScope {
    /// Fields the class itself declares.
    pub const DECLARED: Self = Self {
        inherited: false,
        exclude_static: false,
    };
    /// Instance fields the class itself declares.
    pub const DECLARED_NON_STATIC: Self = Self {
        inherited: false,
        exclude_static: true,
    };
    /// Fields reachable by name through the whole hierarchy.
    pub const REFERABLE: Self = Self {
        inherited: true,
        exclude_static: false,
    };
    /// Instance fields reachable by name through the whole hierarchy.
    pub const REFERABLE_NON_STATIC: Self = Self {
        inherited: true,
        exclude_static: true,
    };
}

// -----------------------------------------------------------------------------
// Lookup

/// Finds the field named `name`, walking from `class` to the root.
///
/// The most-derived declaration wins, so a subclass field shadows a
/// superclass field of the same name.
pub fn find_field(class: &'static ClassInfo, name: &str) -> Result<FieldHandle, BeanError> {
    for owner in ancestors(class) {
        if let Some(info) = owner.declared_field(name) {
            return Ok(FieldHandle::new(owner, info));
        }
    }
    Err(NotFoundError::Field {
        class: class.type_name(),
        name: name.into(),
    }
    .into())
}

/// Lists the fields of `class` within `scope`, most-derived first.
///
/// Static fields are dropped first when requested, then every name is kept
/// once, at its most-derived declaration.
pub fn list_fields(class: &'static ClassInfo, scope: FieldScope) -> Vec<FieldHandle> {
    let depth = if scope.inherited { usize::MAX } else { 1 };

    let mut seen = HashSet::<&'static str>::default();
    let mut fields = Vec::new();
    for owner in ancestors(class).take(depth) {
        for info in owner.declared_fields() {
            if scope.exclude_static && info.is_static() {
                continue;
            }
            if !seen.insert(info.name()) {
                trace!(
                    "field `{}::{}` is shadowed in `{}`",
                    owner.type_name(),
                    info.name(),
                    class.type_name()
                );
                continue;
            }
            fields.push(FieldHandle::new(owner, info));
        }
    }
    fields
}

/// Fields `class` declares itself.
pub fn declared_fields(class: &'static ClassInfo) -> Vec<FieldHandle> {
    list_fields(class, FieldScope::DECLARED)
}

/// Instance fields `class` declares itself.
pub fn declared_non_static_fields(class: &'static ClassInfo) -> Vec<FieldHandle> {
    list_fields(class, FieldScope::DECLARED_NON_STATIC)
}

/// Fields reachable by name from `class`.
pub fn referable_fields(class: &'static ClassInfo) -> Vec<FieldHandle> {
    list_fields(class, FieldScope::REFERABLE)
}

/// Instance fields reachable by name from `class`.
pub fn referable_non_static_fields(class: &'static ClassInfo) -> Vec<FieldHandle> {
    list_fields(class, FieldScope::REFERABLE_NON_STATIC)
}

/// Names of [`list_fields`], in the same order.
pub fn list_field_names(class: &'static ClassInfo, scope: FieldScope) -> Vec<&'static str> {
    list_fields(class, scope)
        .iter()
        .map(FieldHandle::name)
        .collect()
}

/// Names of [`declared_fields`].
pub fn declared_field_names(class: &'static ClassInfo) -> Vec<&'static str> {
    list_field_names(class, FieldScope::DECLARED)
}

/// Names of [`declared_non_static_fields`].
pub fn declared_non_static_field_names(class: &'static ClassInfo) -> Vec<&'static str> {
    list_field_names(class, FieldScope::DECLARED_NON_STATIC)
}

/// Names of [`referable_fields`].
pub fn referable_field_names(class: &'static ClassInfo) -> Vec<&'static str> {
    list_field_names(class, FieldScope::REFERABLE)
}

/// Names of [`referable_non_static_fields`].
pub fn referable_non_static_field_names(class: &'static ClassInfo) -> Vec<&'static str> {
    list_field_names(class, FieldScope::REFERABLE_NON_STATIC)
}

// -----------------------------------------------------------------------------
// Tests
