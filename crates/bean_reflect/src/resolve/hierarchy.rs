use alloc::vec::Vec;
use core::any::TypeId;
use core::iter::FusedIterator;

use log::warn;

use crate::info::ClassInfo;

/// Iterator over a class and its superclasses, most-derived first.
///
/// Each class is yielded once. A superclass chain that loops back on itself
/// ends at the first repeated class.
///
/// Created by [`ancestors`].
#[derive(Clone)]
pub struct Ancestors {
    next: Option<&'static ClassInfo>,
    seen: Vec<TypeId>,
}

impl Iterator for Ancestors {
    type Item = &'static ClassInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let id = current.ty().id();
        if self.seen.contains(&id) {
            warn!("superclass chain of `{}` is cyclic", current.type_path());
            return None;
        }
        self.seen.push(id);
        self.next = current.superclass_info();
        Some(current)
    }
}

impl FusedIterator for Ancestors {}

/// Walks from `class` up to the root of its hierarchy, `class` included.
///
/// ```
/// use bean_reflect::{info::Class, resolve::ancestors};
///
/// let names: Vec<_> = ancestors(u32::class_info()).map(|c| c.type_name()).collect();
/// assert_eq!(names, ["u32"]);
/// ```
#[inline]
pub fn ancestors(class: &'static ClassInfo) -> Ancestors {
    Ancestors {
        next: Some(class),
        seen: Vec::new(),
    }
}

/// All superclasses of `class`, nearest first, `class` excluded.
///
/// Empty for a root class.
pub fn superclasses(class: &'static ClassInfo) -> Vec<&'static ClassInfo> {
    ancestors(class).skip(1).collect()
}

/// The interfaces `class` itself declares, in declaration order.
pub fn interfaces(class: &'static ClassInfo) -> Vec<&'static ClassInfo> {
    class.interfaces().collect()
}

#[cfg(test)]
mod tests {
    use super::{ancestors, interfaces, superclasses};
    use crate::impls::NonGenericClassInfoCell;
    use crate::info::{Class, ClassInfo, Extends, Superclass};
    use crate::testing::{Animal, Dog, Pet};

    struct Egg;
    struct Hen;

    crate::impl_type_path!(Egg in "farm");
    crate::impl_type_path!(Hen in "farm");

    impl Extends<Hen> for Egg {
        fn base(&self) -> &Hen {
            &Hen
        }

        fn base_mut(&mut self) -> &mut Hen {
            unreachable!()
        }
    }

    impl Extends<Egg> for Hen {
        fn base(&self) -> &Egg {
            &Egg
        }

        fn base_mut(&mut self) -> &mut Egg {
            unreachable!()
        }
    }

    impl Class for Egg {
        fn class_info() -> &'static ClassInfo {
            static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
            CELL.get_or_init(|| {
                ClassInfo::new::<Self>().with_superclass(Superclass::of::<Self, Hen>())
            })
        }
    }

    impl Class for Hen {
        fn class_info() -> &'static ClassInfo {
            static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
            CELL.get_or_init(|| {
                ClassInfo::new::<Self>().with_superclass(Superclass::of::<Self, Egg>())
            })
        }
    }

    #[test]
    fn inclusive_walk_ends_at_root() {
        let names: Vec<_> = ancestors(Dog::class_info())
            .map(|class| class.type_name())
            .collect();
        assert_eq!(names, ["Dog", "Animal"]);
    }

    #[test]
    fn exclusive_walk() {
        let supers = superclasses(Dog::class_info());
        assert_eq!(supers.len(), 1);
        assert!(supers[0].type_is::<Animal>());
        assert!(superclasses(Animal::class_info()).is_empty());
    }

    #[test]
    fn declared_interfaces() {
        let list = interfaces(Dog::class_info());
        assert_eq!(list.len(), 1);
        assert!(list[0].type_is::<Pet>());
        assert!(interfaces(Animal::class_info()).is_empty());
    }

    #[test]
    fn cyclic_chain_stops_at_repeat() {
        let names: Vec<_> = ancestors(Egg::class_info())
            .map(|class| class.type_name())
            .collect();
        assert_eq!(names, ["Egg", "Hen"]);
    }
}
