//! Construction tests for Map

use std::collections::HashMap;

use crate::helpers::*;
use omap::{Entry, Map};

#[test]
fn test_from_entries_keeps_given_order() {
    let map = Map::from_entries([
        Entry::new("3", "v3"),
        Entry::new("2", "v2"),
        Entry::new("1", "v1"),
    ]);

    assert_pairs(&map, &[("3", "v3"), ("2", "v2"), ("1", "v1")]);
}

#[test]
fn test_from_entries_empty() {
    let map: Map<String, String> = Map::from_entries(Vec::new());
    assert!(map.is_zero());
}

#[test]
fn test_collect_later_duplicates_overwrite_keep_first_position() {
    let map: Map<&str, i32> = [("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)]
        .into_iter()
        .collect();

    assert_pairs(&map, &[("a", 3), ("b", 5), ("c", 4)]);
}

#[test]
fn test_collect_from_entries() {
    let map: Map<u8, char> = vec![Entry::new(2, 'b'), Entry::new(1, 'a')]
        .into_iter()
        .collect();

    assert_eq!(keys_of(&map), vec![2, 1]);
}

#[test]
fn test_from_unordered_uses_ascending_key_order() {
    let mut table = HashMap::new();
    table.insert(30, "thirty");
    table.insert(-5, "minus five");
    table.insert(12, "twelve");

    let map = Map::from_unordered(table);

    assert_pairs(&map, &[(-5, "minus five"), (12, "twelve"), (30, "thirty")]);
}

#[test]
fn test_from_hashmap_conversion() {
    let table: HashMap<String, bool> =
        HashMap::from([("b".to_string(), true), ("a".to_string(), false)]);

    let map: Map<String, bool> = table.into();

    assert_eq!(keys_of(&map), vec!["a", "b"]);
}

#[test]
fn test_from_array() {
    let map = Map::from([("z", 26), ("a", 1)]);
    assert_eq!(keys_of(&map), vec!["z", "a"]);
}

#[test]
fn test_insert_all_and_extend() {
    let mut map = Map::collect_from([("a", 1), ("b", 2)]);

    map.insert_all([("c", 3), ("a", 10)]);
    assert_pairs(&map, &[("a", 10), ("b", 2), ("c", 3)]);

    map.extend([("d", 4), ("b", 20)]);
    assert_pairs(&map, &[("a", 10), ("b", 20), ("c", 3), ("d", 4)]);
}

#[test]
fn test_entry_accessors() {
    let entry = Entry::new("key", 5);
    assert_eq!(entry.key(), &"key");
    assert_eq!(entry.value(), &5);

    let pair: (&str, i32) = entry.into();
    assert_eq!(pair, ("key", 5));

    let back: Entry<&str, i32> = pair.into();
    assert_eq!(back.into_parts(), ("key", 5));
}
