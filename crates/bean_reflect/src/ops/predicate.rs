use alloc::vec::Vec;
use core::any::TypeId;

use crate::Reflect;
use crate::info::ClassInfo;
use crate::resolve::ancestors;

/// Either a class or an object whose runtime class is used.
#[derive(Clone, Copy)]
pub enum ClassOrObject<'a> {
    Class(&'static ClassInfo),
    Object(&'a dyn Reflect),
}

impl ClassOrObject<'_> {
    /// The class itself, or the runtime class of the object.
    #[inline]
    pub fn class(&self) -> &'static ClassInfo {
        match self {
            Self::Class(class) => class,
            Self::Object(object) => object.reflect_class(),
        }
    }
}

impl From<&'static ClassInfo> for ClassOrObject<'_> {
    #[inline]
    fn from(class: &'static ClassInfo) -> Self {
        Self::Class(class)
    }
}

impl<'a> From<&'a dyn Reflect> for ClassOrObject<'a> {
    #[inline]
    fn from(object: &'a dyn Reflect) -> Self {
        Self::Object(object)
    }
}

/// The class itself, or the runtime class of the object.
#[inline]
pub fn class_of(candidate: ClassOrObject<'_>) -> &'static ClassInfo {
    candidate.class()
}

/// Returns `true` if `candidate` is `target`, inherits from it, or
/// implements it as an interface, directly or through a superclass or
/// another interface.
///
/// ```
/// use bean_reflect::{info::Class, ops::{is_from, ClassOrObject}};
///
/// assert!(is_from(ClassOrObject::Class(u32::class_info()), u32::class_info()));
/// assert!(!is_from(ClassOrObject::Object(&1_u8), u32::class_info()));
/// ```
pub fn is_from(candidate: ClassOrObject<'_>, target: &ClassInfo) -> bool {
    let mut visited = Vec::new();
    ancestors(candidate.class()).any(|class| implements(class, target, &mut visited))
}

// `visited` holds every class already checked, so cyclic interface tables
// terminate.
fn implements(class: &'static ClassInfo, target: &ClassInfo, visited: &mut Vec<TypeId>) -> bool {
    let id = class.ty().id();
    if visited.contains(&id) {
        return false;
    }
    visited.push(id);
    class.ty() == target.ty()
        || class
            .interfaces()
            .any(|interface| implements(interface, target, visited))
}

/// Returns `true` if the type is declared inside another type.
///
/// This looks at the simple name: with generics removed, a nested type is
/// named `Outer::Inner`.
pub fn is_nested_type(class: &ClassInfo) -> bool {
    let name = class.type_name();
    let name = name.split_once('<').map_or(name, |(head, _)| head);
    name.contains("::")
}
