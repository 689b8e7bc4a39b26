use std::fmt::Debug;
use std::hash::Hash;

use omap::Map;

/// Build a `Map<String, String>` from string literals, in the order given.
pub fn string_map(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Collect the keys of a map in insertion order.
pub fn keys_of<K: Clone + Eq + Hash, V>(map: &Map<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Assert that a map holds exactly `expected`, in that order.
pub fn assert_pairs<K, V>(map: &Map<K, V>, expected: &[(K, V)])
where
    K: Eq + Hash + Clone + Debug,
    V: PartialEq + Debug,
{
    let actual: Vec<(&K, &V)> = map.iter().collect();
    let expected: Vec<(&K, &V)> = expected.iter().map(|(k, v)| (k, v)).collect();
    assert_eq!(actual, expected, "map pairs or their order differ");
    assert_eq!(map.len(), expected.len());
}
