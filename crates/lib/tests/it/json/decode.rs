//! Ordered JSON decoding tests

use crate::helpers::*;
use omap::json::{self, JsonError};
use omap::key::KeyKind;
use omap::{Error, F64Key, Map, json_key};
use serde::Deserialize;

#[test]
fn test_decode_preserves_member_order() {
    let map: Map<String, String> =
        Map::from_json(br#"{"3":"value3","2":"value2","1":"value1"}"#).unwrap();

    assert_eq!(keys_of(&map), vec!["3", "2", "1"]);
    assert_eq!(
        map,
        string_map(&[("3", "value3"), ("2", "value2"), ("1", "value1")])
    );
}

#[test]
fn test_decode_integer_keys() {
    let map: Map<u16, bool> = Map::from_json(br#"{"443":true,"80":false,"8080":true}"#).unwrap();
    assert_pairs(&map, &[(443, true), (80, false), (8080, true)]);
}

#[test]
fn test_decode_float_keys() {
    let map: Map<F64Key, String> = Map::from_json(br#"{"1.5":"a","-2":"b"}"#).unwrap();
    assert_eq!(keys_of(&map), vec![F64Key(1.5), F64Key(-2.0)]);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Sku(String);

json_key!(Sku => String);

#[test]
fn test_decode_newtype_keys() {
    let map: Map<Sku, u32> = Map::from_json(br#"{"B-2":5,"A-1":7}"#).unwrap();
    assert_eq!(keys_of(&map), vec![Sku("B-2".into()), Sku("A-1".into())]);
    assert_eq!(map.get(&Sku("A-1".into())), Some(&7));
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Item {
    name: String,
    qty: u32,
}

#[test]
fn test_decode_struct_values() {
    let map: Map<String, Item> = Map::from_json(
        br#"{"second":{"name":"bolt","qty":10},"first":{"name":"nut","qty":3}}"#,
    )
    .unwrap();

    assert_eq!(keys_of(&map), vec!["second", "first"]);
    assert_eq!(map["first"].qty, 3);
}

#[test]
fn test_decode_duplicate_members_keep_first_position() {
    let map: Map<String, i32> = Map::from_json(br#"{"a":1,"b":2,"a":3}"#).unwrap();
    assert_eq!(keys_of(&map), vec!["a", "b"]);
    assert_eq!(map.value("a"), 3);
}

#[test]
fn test_decode_empty_and_null_are_noops() {
    let mut map = string_map(&[("keep", "me")]);
    let before = map.clone();

    map.merge_json(b"").unwrap();
    map.merge_json(b"null").unwrap();
    map.merge_json(b"  null\n").unwrap();
    map.merge_json(b"   ").unwrap();

    assert_eq!(map, before);
}

#[test]
fn test_decode_empty_object() {
    let map: Map<String, String> = Map::from_json(b"{}").unwrap();
    assert!(map.is_zero());
}

#[test]
fn test_decode_tolerates_surrounding_whitespace() {
    let map: Map<String, u8> = Map::from_json(b"\n  { \"x\" : 1 , \"y\" : 2 }  \n").unwrap();
    assert_eq!(keys_of(&map), vec!["x", "y"]);
}

#[test]
fn test_merge_into_existing_map() {
    let mut map = string_map(&[("a", "old"), ("b", "kept")]);

    map.merge_json(br#"{"c":"new","a":"updated"}"#).unwrap();

    assert_pairs(
        &map,
        &[
            ("a".to_string(), "updated".to_string()),
            ("b".to_string(), "kept".to_string()),
            ("c".to_string(), "new".to_string()),
        ],
    );
}

#[test]
fn test_decode_into_default_map() {
    let mut map: Map<i8, String> = Map::default();
    json::decode_into(&mut map, br#"{"-1":"neg","1":"pos"}"#).unwrap();
    assert_eq!(keys_of(&map), vec![-1, 1]);
}

#[test]
fn test_decode_rejects_non_objects() {
    for input in [&b"[1,2,3]"[..], b"42", b"\"text\"", b"{", b"}", b"true"] {
        let err = Map::<String, i32>::from_json(input).unwrap_err();
        assert!(err.is_malformed(), "expected malformed error for {input:?}");
    }
}

#[test]
fn test_malformed_error_names_offending_input() {
    let err = Map::<String, i32>::from_json(b"[1,2,3]").unwrap_err();
    match err {
        Error::Json(JsonError::MalformedDocument { snippet, .. }) => {
            assert_eq!(snippet, "[1,2,3]");
        }
        other => panic!("Expected MalformedDocument, got {other:?}"),
    }
}

#[test]
fn test_decode_rejects_broken_object_body() {
    let err = Map::<String, i32>::from_json(br#"{"a":1,}"#).unwrap_err();
    assert!(err.is_malformed());

    let err = Map::<String, i32>::from_json(br#"{"a" 1}"#).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_decode_rejects_trailing_object() {
    let err = Map::<String, i32>::from_json(br#"{"a":1} {"b":2}"#).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_decode_key_overflow_reports_key_type() {
    let err = Map::<i8, String>::from_json(br#"{"1":"ok","100000000":"too big"}"#).unwrap_err();

    assert!(err.is_key_error());
    match &err {
        Error::Json(JsonError::KeyConversion { type_name, source }) => {
            assert_eq!(*type_name, "i8");
            assert_eq!(source.wire(), "100000000");
            assert_eq!(source.kind(), KeyKind::Signed { bits: 8 });
        }
        other => panic!("Expected KeyConversion, got {other:?}"),
    }
    assert_eq!(err.key_error().map(|e| e.wire()), Some("100000000"));
}

#[test]
fn test_decode_malformed_numeric_key() {
    let err = Map::<u32, String>::from_json(br#"{"twelve":"12"}"#).unwrap_err();
    let key_err = err.key_error().expect("key conversion error");
    assert!(key_err.is_malformed());
    assert!(err.to_string().contains("u32"));
}

#[test]
fn test_decode_value_failure_names_value_type() {
    let err = Map::<String, u32>::from_json(br#"{"a":1,"b":"two"}"#).unwrap_err();

    assert!(err.is_value_error());
    match err {
        Error::Json(JsonError::ValueCodec { type_name, .. }) => assert_eq!(type_name, "u32"),
        other => panic!("Expected ValueCodec, got {other:?}"),
    }
}

#[test]
fn test_failed_decode_leaves_target_untouched() {
    let mut map: Map<u8, String> = Map::collect_from([(1, "one".to_string())]);
    let before = map.clone();

    let err = map
        .merge_json(br#"{"2":"two","3":"three","999":"overflow"}"#)
        .unwrap_err();

    assert!(err.is_key_error());
    assert_eq!(map, before);
}

#[test]
fn test_decode_f32_key_overflow_leaves_target_untouched() {
    let mut map: Map<omap::F32Key, u8> = Map::new();
    map.set(omap::F32Key(1.0), 1);
    let before = map.clone();

    let err = map.merge_json(br#"{"2.5":2,"1e39":3}"#).unwrap_err();

    assert!(err.is_key_error());
    assert!(err.key_error().is_some_and(|e| e.is_unrepresentable()));
    assert_eq!(map, before);
}
