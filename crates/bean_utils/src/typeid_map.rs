use core::any::TypeId;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map from [`TypeId`] to `V` that uses the id bits as the hash.
///
/// ```
/// use core::any::TypeId;
/// use bean_utils::TypeIdMap;
///
/// let mut classes = TypeIdMap::new();
/// assert!(classes.try_insert(TypeId::of::<u8>(), || "u8"));
/// assert_eq!(classes.get(&TypeId::of::<u8>()), Some(&"u8"));
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Stores `f()` under `type_id` unless an entry is already present.
    ///
    /// `f` runs only when the slot is vacant. Returns whether it ran.
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        let Entry::Vacant(slot) = self.0.entry(type_id) else {
            return false;
        };
        slot.insert(f());
        true
    }

    /// The entry for `type_id`, filled with `f()` first when vacant.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        self.0.entry(type_id).or_insert_with(f)
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The stored values, in no particular order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Tests
