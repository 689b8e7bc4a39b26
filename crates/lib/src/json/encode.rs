//! Ordered JSON encoding.

use std::any::type_name;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use super::{Direction, JsonError};
use crate::Result;
use crate::map::Map;

/// Encode a map as a JSON object whose members follow insertion order.
///
/// An absent map encodes as `null`. Keys are encoded with `serde_json` and must
/// come out as a JSON scalar: strings are used verbatim, while numbers, booleans
/// and `null` are wrapped in quotes to form a member name. Keys that encode to
/// arrays or objects are rejected with [`JsonError::UnsupportedKeyShape`].
///
/// ```
/// use omap::{Entry, Map, json};
///
/// let map = Map::from_entries([
///     Entry::new("3", "v3"),
///     Entry::new("2", "v2"),
///     Entry::new("1", "v1"),
/// ]);
/// assert_eq!(json::encode(Some(&map)).unwrap(), br#"{"3":"v3","2":"v2","1":"v1"}"#);
/// assert_eq!(json::encode::<String, u8>(None).unwrap(), b"null");
/// ```
pub fn encode<K, V>(map: Option<&Map<K, V>>) -> Result<Vec<u8>>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
{
    match map {
        Some(map) => encode_object(map).map(String::into_bytes),
        None => Ok(b"null".to_vec()),
    }
}

pub(super) fn encode_object<K, V>(map: &Map<K, V>) -> Result<String>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
{
    let mut buf = String::with_capacity(2 + map.len() * 16);
    buf.push('{');
    for (index, (key, value)) in map.iter().enumerate() {
        let key_json = encode_key(key)?;
        let value_json = serde_json::to_string(value).map_err(|source| JsonError::ValueCodec {
            type_name: type_name::<V>(),
            direction: Direction::Encode,
            source,
        })?;

        if index > 0 {
            buf.push(',');
        }
        buf.push_str(&key_json);
        buf.push(':');
        buf.push_str(&value_json);
    }
    buf.push('}');

    debug!(members = map.len(), bytes = buf.len(), "Encoded ordered map");
    Ok(buf)
}

/// Encode a key as a JSON member name.
fn encode_key<K: Serialize>(key: &K) -> std::result::Result<String, JsonError> {
    let encode_error = |source| JsonError::KeyEncode {
        type_name: type_name::<K>(),
        source,
    };

    let key_json = serde_json::to_string(key).map_err(encode_error)?;
    match key_json.as_bytes().first() {
        None => Ok("\"\"".to_string()),
        Some(b'"') => Ok(key_json),
        Some(b'[' | b'{') => Err(JsonError::UnsupportedKeyShape {
            type_name: type_name::<K>(),
        }),
        // Number, boolean or null: member names must be strings
        Some(_) => serde_json::to_string(&key_json).map_err(encode_error),
    }
}

impl<K, V> Serialize for Map<K, V>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
{
    /// Serialize as a map in insertion order.
    ///
    /// Key stringification is left to the serializer; `serde_json` quotes
    /// integer keys itself.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}
