//! Ordered JSON decoding.
//!
//! Objects are read through `serde_json`'s streaming map access, which hands
//! members over in source order. Each member name is converted with the key
//! codec and each value is decoded with serde before the pair is set on the map.

use std::any::type_name;
use std::cell::Cell;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer, MapAccess, Visitor};
use tracing::{debug, trace};

use super::{Direction, JsonError};
use crate::Result;
use crate::key::{JsonKey, KeyError};
use crate::map::Map;

/// Longest prefix of a rejected document quoted back in an error.
const SNIPPET_LIMIT: usize = 64;

/// Decode a JSON object and set its members on `map`, in member order.
///
/// Empty input and `null` leave the map unchanged. Members whose key already
/// exists overwrite the value and keep the existing position. The document is
/// decoded in full before any member is applied, so a failure leaves `map`
/// untouched.
///
/// ```
/// use omap::{Map, json};
///
/// let mut map: Map<String, String> = Map::new();
/// json::decode_into(&mut map, br#"{"3":"value3","2":"value2","1":"value1"}"#).unwrap();
/// assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["3", "2", "1"]);
/// ```
pub fn decode_into<K, V>(map: &mut Map<K, V>, data: &[u8]) -> Result<()>
where
    K: JsonKey + Eq + Hash + Clone,
    V: DeserializeOwned,
{
    let document = data.trim_ascii();
    if document.is_empty() || document == b"null" {
        debug!("Skipping empty JSON document");
        return Ok(());
    }
    if document.len() < 2 || document[0] != b'{' || document[document.len() - 1] != b'}' {
        return Err(malformed(document, "input is not a JSON object".to_string()).into());
    }

    let failure = Cell::new(None);
    let mut deserializer = serde_json::Deserializer::from_slice(document);
    let decoded = (&mut deserializer)
        .deserialize_map(MemberVisitor::<K, V>::tracking(&failure))
        .and_then(|staged| deserializer.end().map(|()| staged));

    let staged = decoded.map_err(|err| match failure.take() {
        Some(MemberFailure::Key(source)) => JsonError::KeyConversion {
            type_name: type_name::<K>(),
            source,
        },
        // Syntax errors surface from next_value too; only data errors belong to V
        Some(MemberFailure::Value) if err.is_data() => JsonError::ValueCodec {
            type_name: type_name::<V>(),
            direction: Direction::Decode,
            source: err,
        },
        Some(MemberFailure::Value) | None => malformed(document, err.to_string()),
    })?;

    debug!(members = staged.len(), existing = map.len(), "Decoded ordered map");
    map.insert_all(staged);
    Ok(())
}

fn malformed(document: &[u8], reason: String) -> JsonError {
    let text = String::from_utf8_lossy(document);
    let snippet = match text.char_indices().nth(SNIPPET_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.into_owned(),
    };
    JsonError::MalformedDocument { snippet, reason }
}

/// The member-level step that failed, recorded so the caller can rebuild a
/// structured error from the serde error that unwound the visitor.
enum MemberFailure {
    Key(KeyError),
    Value,
}

struct MemberVisitor<'f, K, V> {
    failure: Option<&'f Cell<Option<MemberFailure>>>,
    marker: PhantomData<fn() -> Map<K, V>>,
}

impl<'f, K, V> MemberVisitor<'f, K, V> {
    fn new() -> Self {
        Self {
            failure: None,
            marker: PhantomData,
        }
    }

    fn tracking(failure: &'f Cell<Option<MemberFailure>>) -> Self {
        Self {
            failure: Some(failure),
            marker: PhantomData,
        }
    }

    fn record(&self, failure: MemberFailure) {
        if let Some(slot) = self.failure {
            slot.set(Some(failure));
        }
    }
}

impl<'de, K, V> Visitor<'de> for MemberVisitor<'_, K, V>
where
    K: JsonKey + Eq + Hash + Clone,
    V: Deserialize<'de>,
{
    type Value = Map<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut staged = Map::with_capacity(access.size_hint().unwrap_or(0));

        while let Some(wire) = access.next_key::<String>()? {
            let key = match K::from_wire(&wire) {
                Ok(key) => key,
                Err(source) => {
                    let message = format!(
                        "parsing key as type {}: {source}",
                        type_name::<K>()
                    );
                    self.record(MemberFailure::Key(source));
                    return Err(de::Error::custom(message));
                }
            };

            let value = access.next_value::<V>().inspect_err(|_| {
                self.record(MemberFailure::Value);
            })?;

            trace!(key = %wire, "Decoded map member");
            staged.set(key, value);
        }

        Ok(staged)
    }
}

impl<'de, K, V> Deserialize<'de> for Map<K, V>
where
    K: JsonKey + Eq + Hash + Clone,
    V: Deserialize<'de>,
{
    /// Deserialize from a map whose keys arrive as strings, keeping member order.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MemberVisitor::new())
    }
}
