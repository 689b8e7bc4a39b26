//! Iterators over a [`Map`] in insertion order and in reverse.
//!
//! Every iterator walks the map's order vector and looks each key up in the
//! table; none of them takes a snapshot. They borrow the map, so the map cannot
//! be structurally modified while one is alive. Calling the producing method again
//! starts a fresh pass over the current state, and dropping an iterator part way
//! through has no side effects.
//!
//! | Method                     | Yields          | Order    |
//! |----------------------------|-----------------|----------|
//! | [`Map::keys`]              | `&K`            | forward  |
//! | [`Map::keys_backward`]     | `&K`            | backward |
//! | [`Map::iter`]              | `(&K, &V)`      | forward  |
//! | [`Map::iter_backward`]     | `(&K, &V)`      | backward |
//! | [`Map::values`]            | `&V`            | forward  |
//! | [`Map::values_backward`]   | `&V`            | backward |

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::{FusedIterator, Rev};
use std::slice;
use std::vec;

use crate::map::Map;

/// Keys of a [`Map`] in insertion order.
#[derive(Debug, Clone)]
pub struct Keys<'a, K> {
    order: slice::Iter<'a, K>,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.order.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}
impl<K> FusedIterator for Keys<'_, K> {}

/// Key/value pairs of a [`Map`] in insertion order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    order: slice::Iter<'a, K>,
    table: &'a HashMap<K, V>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            table: self.table,
        }
    }
}

impl<'a, K: Eq + Hash, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.order.find_map(|key| table.get(key).map(|value| (key, value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let table = self.table;
        while let Some(key) = self.order.next_back() {
            if let Some(value) = table.get(key) {
                return Some((key, value));
            }
        }
        None
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K: Eq + Hash, V> FusedIterator for Iter<'_, K, V> {}

/// Values of a [`Map`] in insertion order.
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: Eq + Hash, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K: Eq + Hash, V> FusedIterator for Values<'_, K, V> {}

/// Owned key/value pairs drained from a [`Map`] in insertion order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    order: vec::IntoIter<K>,
    table: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let table = &mut self.table;
        self.order.find_map(|key| table.remove(&key).map(|value| (key, value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let table = &mut self.table;
        while let Some(key) = self.order.next_back() {
            if let Some(value) = table.remove(&key) {
                return Some((key, value));
            }
        }
        None
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K: Eq + Hash, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Map<K, V> {
    /// Keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            order: self.order().iter(),
        }
    }

    /// Keys in reverse insertion order.
    pub fn keys_backward(&self) -> Rev<Keys<'_, K>> {
        self.keys().rev()
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            order: self.order().iter(),
            table: self.table(),
        }
    }

    /// Alias of [`Map::iter`].
    pub fn all(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Key/value pairs in reverse insertion order.
    pub fn iter_backward(&self) -> Rev<Iter<'_, K, V>>
    where
        K: Eq + Hash,
    {
        self.iter().rev()
    }

    /// Alias of [`Map::iter_backward`].
    pub fn all_backward(&self) -> Rev<Iter<'_, K, V>>
    where
        K: Eq + Hash,
    {
        self.iter_backward()
    }

    /// Values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Values in reverse insertion order.
    pub fn values_backward(&self) -> Rev<Values<'_, K, V>>
    where
        K: Eq + Hash,
    {
        self.values().rev()
    }
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Eq + Hash, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let (order, table) = self.into_parts();
        IntoIter {
            order: order.into_iter(),
            table,
        }
    }
}
