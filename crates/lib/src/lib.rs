//!
//! omap: an insertion-ordered map with an order-preserving JSON codec.
//!
//! ## Core Concepts
//!
//! * **Map (`map::Map`)**: A lookup table plus a separate order vector. Keys keep the
//!   position at which they were first inserted; updating a value never moves its key.
//! * **Iterators (`iter`)**: Lazy forward and backward views over keys, values and pairs.
//! * **Key Codec (`key::JsonKey`)**: Type-directed conversion from a JSON member name
//!   (always a string on the wire) to the native key type, with overflow detection.
//! * **JSON Codec (`json`)**: Encodes a map as a JSON object whose member order equals
//!   insertion order, and decodes objects back without reordering their members.
//!
//! ```
//! use omap::Map;
//!
//! let mut scores: Map<u32, &str> = Map::new();
//! scores.set(30, "thirty");
//! scores.set(10, "ten");
//! scores.set(20, "twenty");
//!
//! assert_eq!(scores.keys().copied().collect::<Vec<_>>(), vec![30, 10, 20]);
//! # #[cfg(feature = "json")]
//! assert_eq!(
//!     scores.to_json_string().unwrap(),
//!     r#"{"30":"thirty","10":"ten","20":"twenty"}"#
//! );
//! ```

pub mod iter;
pub mod map;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "json")]
pub mod key;

#[cfg(feature = "json")]
mod errors;

pub use map::{Entry, Map, OptionMapExt};

#[cfg(feature = "json")]
pub use errors::{Error, Result};
#[cfg(feature = "json")]
pub use key::{F32Key, F64Key, JsonKey, KeyKind};
