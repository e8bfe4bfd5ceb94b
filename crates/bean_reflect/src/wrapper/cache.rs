use alloc::vec::Vec;

use bean_utils::hash::{FixedHashState, HashMap};
use log::debug;

use crate::error::{BeanError, NotFoundError};
use crate::info::ClassInfo;
use crate::resolve::{FieldHandle, FieldScope, list_fields};

/// Name to field map of one class, built once.
///
/// Holds every field reachable by name from the class, statics included,
/// each name bound to its most-derived declaration. The map never changes
/// after construction, so lookups are plain hash map reads.
pub struct PropertyCache {
    class: &'static ClassInfo,
    properties: HashMap<&'static str, FieldHandle>,
    order: Vec<&'static str>,
}

impl PropertyCache {
    /// Walks the hierarchy of `class` and builds its property map.
    pub fn new(class: &'static ClassInfo) -> Self {
        let fields = list_fields(class, FieldScope::REFERABLE);

        let mut properties = HashMap::with_capacity_and_hasher(fields.len(), FixedHashState);
        let mut order = Vec::with_capacity(fields.len());
        for handle in fields {
            properties.entry(handle.name()).or_insert_with(|| {
                order.push(handle.name());
                handle
            });
        }

        debug!(
            "built property map of `{}` with {} entries",
            class.type_path(),
            properties.len()
        );

        Self {
            class,
            properties,
            order,
        }
    }

    /// The class the map was built from.
    #[inline]
    pub fn class(&self) -> &'static ClassInfo {
        self.class
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// The field bound to `name`, if any.
    #[inline]
    pub fn get(&self, name: &str) -> Option<FieldHandle> {
        self.properties.get(name).copied()
    }

    /// The field bound to `name`, or a [`NotFoundError::Property`].
    pub fn lookup(&self, name: &str) -> Result<FieldHandle, BeanError> {
        self.get(name).ok_or_else(|| {
            NotFoundError::Property {
                class: self.class.type_name(),
                name: name.into(),
            }
            .into()
        })
    }

    /// Property names, most-derived class first, in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.order.iter().copied()
    }

    /// Property handles, in the order of [`names`](Self::names).
    pub fn iter(&self) -> impl Iterator<Item = FieldHandle> {
        self.order
            .iter()
            .filter_map(|name| self.properties.get(name).copied())
    }
}

impl core::fmt::Debug for PropertyCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyCache")
            .field("class", &self.class.type_path())
            .field("properties", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyCache;
    use crate::info::Class;
    use crate::testing::{Animal, Dog};

    #[test]
    fn first_declaration_wins() {
        let cache = PropertyCache::new(Dog::class_info());
        assert_eq!(cache.len(), 7);
        assert!(cache.get("name").unwrap().owner().type_is::<Dog>());
        assert!(cache.get("age").unwrap().owner().type_is::<Animal>());
        assert!(cache.contains("kingdom"));
    }

    #[test]
    fn names_in_hierarchy_order() {
        let cache = PropertyCache::new(Animal::class_info());
        let names: Vec<_> = cache.names().collect();
        assert_eq!(names, ["name", "age", "kingdom"]);
        assert_eq!(cache.iter().filter(|h| h.is_static()).count(), 1);
    }

    #[test]
    fn unknown_property() {
        let cache = PropertyCache::new(Dog::class_info());
        let err = cache.lookup("wings").unwrap_err();
        assert_eq!(err.to_string(), "class Dog has no property named wings");
    }
}
