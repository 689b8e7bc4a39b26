//! Order-preserving JSON codec for [`Map`].
//!
//! A map is encoded as a JSON object whose member order equals the map's
//! insertion order, and decoding an object keeps the members in source order.
//! Readers that should observe the order must themselves be order-preserving.
//!
//! Member names are always JSON strings on the wire. On the way out, scalar keys
//! are stringified (`7` becomes `"7"`). On the way in, the [`key`](crate::key)
//! codec converts each member name back into the map's key type, rejecting
//! literals that overflow or do not parse.
//!
//! Two surfaces are provided:
//!
//! - [`encode`] and [`decode_into`] (also [`Map::to_json_vec`], [`Map::to_json_string`],
//!   [`Map::merge_json`] and [`Map::from_json`]) work on byte buffers and report
//!   failures as structured [`JsonError`]s.
//! - `Map` implements `serde::Serialize` and `serde::Deserialize`, so it can be
//!   nested inside other serde types. Member order is preserved there too.
//!
//! ```
//! use omap::Map;
//!
//! let mut map: Map<i32, bool> = Map::from_json(br#"{"10":true,"-2":false}"#).unwrap();
//! map.set(5, true);
//! assert_eq!(map.to_json_string().unwrap(), r#"{"10":true,"-2":false,"5":true}"#);
//! ```

mod decode;
mod encode;
mod errors;

use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::key::JsonKey;
use crate::map::Map;

pub use decode::decode_into;
pub use encode::encode;
pub use errors::{Direction, JsonError};

impl<K, V> Map<K, V>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
{
    /// Encode as a JSON object in insertion order.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        encode::encode_object(self).map(String::into_bytes)
    }

    /// Encode as a JSON object string in insertion order.
    pub fn to_json_string(&self) -> Result<String> {
        encode::encode_object(self)
    }
}

impl<K, V> Map<K, V>
where
    K: JsonKey + Eq + Hash + Clone,
    V: DeserializeOwned,
{
    /// Decode a JSON object into a new map.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let mut map = Self::new();
        decode_into(&mut map, data)?;
        Ok(map)
    }

    /// Decode a JSON object and set its members on this map.
    ///
    /// See [`decode_into`].
    pub fn merge_json(&mut self, data: &[u8]) -> Result<()> {
        decode_into(self, data)
    }
}
