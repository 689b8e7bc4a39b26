//! The ordered map container.
//!
//! [`Map`] pairs a `HashMap` index with a `Vec` holding the keys in insertion order.
//! The order vector is the iteration plan and the table answers lookups. Both fields
//! are private to this module and every mutation below updates them together, so the
//! order vector always holds exactly the table's key set, each key once.
//!
//! # Ordering rules
//!
//! - A new key is appended to the end of the order.
//! - Setting an existing key replaces its value and keeps its position.
//! - Deleting a key removes its slot; re-inserting it later appends it again.
//! - [`Map::set_order`] replaces the order wholesale after sanitizing it.
//!
//! ```
//! use omap::Map;
//!
//! let mut map = Map::new();
//! map.set("b", 2);
//! map.set("a", 1);
//! map.set("b", 20);
//!
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//! assert_eq!(map.get("b"), Some(&20));
//! ```

mod absent;
mod entry;

use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::Index;

use tracing::debug;

pub use absent::OptionMapExt;
pub use entry::Entry;

/// An insertion-ordered map.
///
/// Keys must be hashable for the index and cloneable because each key is held
/// once by the table and once by the order vector. Operations that need a
/// deterministic fallback order ([`Map::set_order`], [`Map::from_unordered`])
/// additionally require `K: Ord`.
#[derive(Debug, Clone)]
pub struct Map<K, V> {
    entries: HashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K, V> Map<K, V> {
    /// Create an empty map. No storage is allocated until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Number of keys in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reports whether the map holds nothing. See also [`OptionMapExt::is_zero`].
    pub fn is_zero(&self) -> bool {
        self.is_empty()
    }

    pub(crate) fn order(&self) -> &[K] {
        &self.order
    }

    pub(crate) fn table(&self) -> &HashMap<K, V> {
        &self.entries
    }

    pub(crate) fn into_parts(self) -> (Vec<K>, HashMap<K, V>) {
        (self.order, self.entries)
    }
}

impl<K, V> Map<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Build a map from entries, in the order given.
    ///
    /// A key that appears more than once keeps its first position and its last value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<K, V>>,
    {
        let entries = entries.into_iter();
        let mut map = Self::with_capacity(entries.size_hint().0);
        for entry in entries {
            let (key, value) = entry.into_parts();
            map.set(key, value);
        }
        map
    }

    /// Drain a key/value sequence into a new map.
    ///
    /// Equivalent to `iter.into_iter().collect::<Map<_, _>>()`.
    pub fn collect_from<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        map.insert_all(pairs);
        map
    }

    /// Look up the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Look up the value for `key`, returning a mutable reference.
    ///
    /// Only the value can change through this reference, so the order is unaffected.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Look up `key` and report whether it was found.
    ///
    /// Returns a default value together with `false` when the key is absent.
    pub fn get_or_default<Q>(&self, key: &Q) -> (V, bool)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        match self.entries.get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    /// The value for `key`, or the default value when the key is absent.
    pub fn value<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        self.get_or_default(key).0
    }

    /// Reports whether `key` is in the map.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Set the value for `key`.
    ///
    /// A new key is appended to the order. An existing key has its value replaced
    /// in place and keeps its position; the previous value is returned.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.entry(key) {
            hash_map::Entry::Occupied(mut slot) => Some(slot.insert(value)),
            hash_map::Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(value);
                None
            }
        }
    }

    /// Set every pair from `pairs`, in sequence order.
    ///
    /// Keys already in the map keep their position; later duplicates within
    /// `pairs` overwrite earlier values.
    pub fn insert_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Remove `key` and its slot in the order. Deleting an absent key does nothing.
    ///
    /// The order slot is found by a linear scan, so this costs O(len).
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.entries.remove(key)?;
        if let Some(position) = self
            .order
            .iter()
            .position(|k| <K as Borrow<Q>>::borrow(k) == key)
        {
            self.order.remove(position);
        }
        Some(value)
    }

    /// A copy of the map with the order reversed.
    pub fn backward(&self) -> Self
    where
        V: Clone,
    {
        let mut reversed = self.clone();
        reversed.order.reverse();
        reversed
    }
}

impl<K, V> Map<K, V>
where
    K: Eq + Hash + Ord + Clone,
{
    /// Build a map from an unordered table.
    ///
    /// There is no insertion history to recover, so the initial order is the
    /// ascending key order.
    pub fn from_unordered(values: HashMap<K, V>) -> Self {
        let mut order: Vec<K> = values.keys().cloned().collect();
        order.sort();
        Self {
            entries: values,
            order,
        }
    }

    /// Replace the order of the map.
    ///
    /// The new order is sanitized first: keys that are not in the map and
    /// repeated keys are dropped, then every map key missing from the result is
    /// appended in ascending order. The stored order is therefore always a
    /// permutation of the current key set.
    ///
    /// ```
    /// use omap::Map;
    ///
    /// let mut map = Map::collect_from([(1, "a"), (2, "b"), (3, "c")]);
    /// map.set_order([5, 2]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// ```
    pub fn set_order<I>(&mut self, order: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut placed: HashSet<&K> = HashSet::with_capacity(self.entries.len());
        let mut sanitized = Vec::with_capacity(self.entries.len());
        let mut dropped = 0usize;

        for key in order {
            match self.entries.get_key_value(&key) {
                Some((stored, _)) if placed.insert(stored) => sanitized.push(key),
                _ => dropped += 1,
            }
        }

        let mut missing: Vec<K> = self
            .entries
            .keys()
            .filter(|key| !placed.contains(key))
            .cloned()
            .collect();
        missing.sort();

        if dropped > 0 || !missing.is_empty() {
            debug!(
                dropped,
                appended = missing.len(),
                "Sanitized requested map order"
            );
        }

        sanitized.extend(missing);
        self.order = sanitized;
    }
}

impl<K, V> PartialEq for Map<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    /// Two maps are equal when they hold the same pairs in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.entries == other.entries
    }
}

impl<K, V> Eq for Map<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, Q, V> Index<&Q> for Map<K, V>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not present in map")
    }
}

impl<K, V> FromIterator<(K, V)> for Map<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::collect_from(iter)
    }
}

impl<K, V> FromIterator<Entry<K, V>> for Map<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<K, V> Extend<(K, V)> for Map<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<K, V> From<HashMap<K, V>> for Map<K, V>
where
    K: Eq + Hash + Ord + Clone,
{
    fn from(values: HashMap<K, V>) -> Self {
        Self::from_unordered(values)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Map<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::collect_from(pairs)
    }
}
