//! Helpers for maps that may not exist yet.
//!
//! A map that has never been created is modelled as `Option<Map<K, V>>::None`.
//! Read-only helpers on the option degrade to empty results, and
//! [`OptionMapExt::set`] creates the map on first use.

use std::borrow::Borrow;
use std::hash::Hash;

use super::Map;

/// Read and write an optional map as if `None` were an empty map.
///
/// ```
/// use omap::{Map, OptionMapExt};
///
/// let mut tags: Option<Map<String, u32>> = None;
/// assert!(tags.is_zero());
/// assert_eq!(tags.map_len(), 0);
///
/// tags.set("alpha".to_string(), 1);
/// assert!(tags.has("alpha"));
/// ```
pub trait OptionMapExt<K, V> {
    /// Number of keys, 0 when the map is absent.
    fn map_len(&self) -> usize;

    /// `true` when the map is absent or empty.
    fn is_zero(&self) -> bool;

    fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Set a value, creating the map first if it is absent.
    fn set(&mut self, key: K, value: V) -> Option<V>;
}

impl<K, V> OptionMapExt<K, V> for Option<Map<K, V>>
where
    K: Eq + Hash + Clone,
{
    fn map_len(&self) -> usize {
        self.as_ref().map_or(0, Map::len)
    }

    fn is_zero(&self) -> bool {
        self.as_ref().is_none_or(Map::is_zero)
    }

    fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.as_ref().is_some_and(|map| map.has(key))
    }

    fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.as_ref().and_then(|map| map.get(key))
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.get_or_insert_with(|| Map::with_capacity(1)).set(key, value)
    }
}
