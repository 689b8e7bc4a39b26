//! Type-directed conversion between JSON member names and native map keys.
//!
//! JSON object keys are always strings, while a [`Map`](crate::Map) may be keyed
//! by integers, floats or strings. The [`JsonKey`] trait is the compile-time
//! classification of a key type: it reports the key's [`KeyKind`] and parses a
//! member name into a value of that type.
//!
//! # Supported key types
//!
//! - `i8`, `i16`, `i32`, `i64`, `isize` and `u8`, `u16`, `u32`, `u64`, `usize`:
//!   the member name must be a JSON integer literal that fits the exact width.
//! - [`F32Key`] and [`F64Key`]: total-order wrappers around `f32` and `f64`; the
//!   member name must be a JSON number literal.
//! - `String`: the member name is taken as-is.
//! - Newtypes over any of the above, declared with [`json_key!`](crate::json_key).
//!
//! A key type that does not implement [`JsonKey`] cannot be decoded, and the
//! compiler reports it at the call site.
//!
//! ```
//! use omap::key::{JsonKey, KeyKind, parse_key};
//!
//! assert_eq!(<i8 as JsonKey>::KIND, KeyKind::Signed { bits: 8 });
//!
//! let mut slot = 0i8;
//! assert!(parse_key("100000000", &mut slot).is_err());
//! assert_eq!(slot, 0);
//!
//! parse_key("100", &mut slot).unwrap();
//! assert_eq!(slot, 100);
//! ```

mod errors;
mod float;

use std::fmt;

use serde::de::DeserializeOwned;

pub use errors::KeyError;
pub use float::{F32Key, F64Key};

/// The representation a key type reduces to on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Signed { bits: u32 },
    Unsigned { bits: u32 },
    Float { bits: u32 },
    String,
}

impl KeyKind {
    /// Whether member names for this kind are parsed as JSON number literals.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, KeyKind::String)
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Signed { bits } => write!(f, "i{bits}"),
            KeyKind::Unsigned { bits } => write!(f, "u{bits}"),
            KeyKind::Float { bits } => write!(f, "f{bits}"),
            KeyKind::String => f.write_str("string"),
        }
    }
}

/// A key type that can be rebuilt from a JSON member name.
pub trait JsonKey: Sized {
    /// How member names are interpreted for this type.
    const KIND: KeyKind;

    /// Parse a member name into a key.
    fn from_wire(wire: &str) -> Result<Self, KeyError>;
}

/// Parse `wire` into `slot`.
///
/// `slot` is only written when the conversion succeeds; on failure it keeps
/// whatever it held before.
pub fn parse_key<K: JsonKey>(wire: &str, slot: &mut K) -> Result<(), KeyError> {
    *slot = K::from_wire(wire)?;
    Ok(())
}

/// Parse a member name as a JSON number literal of type `T`.
///
/// `serde_json` rejects integers that do not fit `T`. Literals beyond the range
/// of `f64` come back as syntax errors and are reported as [`KeyError::OutOfRange`].
/// `f32` callers must range check themselves, since serde narrows from `f64`.
pub(crate) fn parse_number<T: DeserializeOwned>(
    wire: &str,
    kind: KeyKind,
) -> Result<T, KeyError> {
    serde_json::from_str(wire).map_err(|source| {
        if source.is_syntax() && is_number_literal(wire) {
            KeyError::OutOfRange {
                wire: wire.to_string(),
                kind,
            }
        } else {
            KeyError::InvalidNumber {
                wire: wire.to_string(),
                kind,
                source,
            }
        }
    })
}

/// Check `wire` against the JSON number grammar: `-?(0|[1-9][0-9]*)(.[0-9]+)?([eE][+-]?[0-9]+)?`
fn is_number_literal(wire: &str) -> bool {
    fn digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let bytes = wire.as_bytes();
    let mut at = usize::from(bytes.first() == Some(&b'-'));

    match bytes.get(at) {
        Some(b'0') => at += 1,
        Some(b'1'..=b'9') => at += digits(&bytes[at..]),
        _ => return false,
    }
    if bytes.get(at) == Some(&b'.') {
        let fraction = digits(&bytes[at + 1..]);
        if fraction == 0 {
            return false;
        }
        at += 1 + fraction;
    }
    if matches!(bytes.get(at), Some(b'e' | b'E')) {
        at += 1;
        if matches!(bytes.get(at), Some(b'+' | b'-')) {
            at += 1;
        }
        let exponent = digits(&bytes[at..]);
        if exponent == 0 {
            return false;
        }
        at += exponent;
    }
    at == bytes.len()
}

macro_rules! impl_json_key_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl JsonKey for $ty {
                const KIND: KeyKind = KeyKind::$variant { bits: <$ty>::BITS };

                fn from_wire(wire: &str) -> Result<Self, KeyError> {
                    parse_number(wire, Self::KIND)
                }
            }
        )*
    };
}

impl_json_key_int! {
    i8 => Signed,
    i16 => Signed,
    i32 => Signed,
    i64 => Signed,
    isize => Signed,
    u8 => Unsigned,
    u16 => Unsigned,
    u32 => Unsigned,
    u64 => Unsigned,
    usize => Unsigned,
}

impl JsonKey for String {
    const KIND: KeyKind = KeyKind::String;

    fn from_wire(wire: &str) -> Result<Self, KeyError> {
        Ok(wire.to_string())
    }
}

/// Implement [`JsonKey`] for tuple-struct newtypes over a supported key type.
///
/// The newtype is parsed as its inner type and then wrapped, so it keeps the
/// inner type's [`KeyKind`]. For encoding, derive `Serialize` on the newtype;
/// serde treats newtype structs as their inner value.
///
/// ```
/// use omap::{Map, json_key};
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// struct UserId(u32);
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// struct Tag(String);
///
/// json_key!(UserId => u32, Tag => String);
///
/// let users: Map<UserId, String> = Map::from_json(br#"{"7":"ada"}"#).unwrap();
/// assert_eq!(users.get(&UserId(7)).map(String::as_str), Some("ada"));
/// ```
#[macro_export]
macro_rules! json_key {
    ($($name:path => $repr:ty),* $(,)?) => {
        $(
            impl $crate::key::JsonKey for $name {
                const KIND: $crate::key::KeyKind = <$repr as $crate::key::JsonKey>::KIND;

                fn from_wire(
                    wire: &str,
                ) -> ::std::result::Result<Self, $crate::key::KeyError> {
                    <$repr as $crate::key::JsonKey>::from_wire(wire).map($name)
                }
            }
        )*
    };
}
