use std::fmt;

use crate::id::Axis;

/// A sparse map keyed by a dense [Axis] enumeration.
///
/// Values live in a fixed slot array indexed by the key's ordinal, so
/// lookups never hash. A separate key list records first-insertion order,
/// which is the order [AxisMap::keys] and [AxisMap::iter] yield. `N` must
/// equal the number of axis values; the registry's type aliases pass the
/// enum's `COUNT`.
#[derive(Clone, PartialEq)]
pub struct AxisMap<K: Axis, V, const N: usize> {
    slots: [Option<V>; N],
    order: Vec<K>,
}

impl<K: Axis, V, const N: usize> AxisMap<K, V, N> {
    /// Create an empty map.
    pub fn new() -> Self {
        debug_assert_eq!(N, K::all().len(), "slot count must match {}", K::NAME);
        Self {
            slots: std::array::from_fn(|_| None),
            order: Vec::new(),
        }
    }

    /// The value at `key`, if present.
    pub fn get(&self, key: K) -> Option<&V> {
        self.slots.get(key.index()).and_then(Option::as_ref)
    }

    /// The value at `key`, mutably, if present.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.slots.get_mut(key.index()).and_then(Option::as_mut)
    }

    /// Whether `key` holds a value.
    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// The value at `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let slot = &mut self.slots[key.index()];
        if slot.is_none() {
            self.order.push(key);
        }
        slot.get_or_insert_with(default)
    }

    /// Present keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied()
    }

    /// Present entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.order
            .iter()
            .filter_map(move |&key| self.get(key).map(|value| (key, value)))
    }

    /// Number of present keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no key is present.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K: Axis, V, const N: usize> Default for AxisMap<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Axis, V: fmt::Debug, const N: usize> fmt::Debug for AxisMap<K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
