//! Floating point keys.
//!
//! `f32` and `f64` are neither `Eq`, `Ord` nor `Hash`, so they cannot index a map
//! directly. [`F32Key`] and [`F64Key`] wrap them with the IEEE 754 total order
//! (`total_cmp`) and hash the bit pattern, which keeps equality, ordering and
//! hashing consistent with each other. Under this order `-0.0 < 0.0` and NaNs
//! with different payloads are distinct keys.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

use super::{JsonKey, KeyError, KeyKind, parse_number};

macro_rules! float_key {
    ($(#[$meta:meta])* $name:ident($float:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name(pub $float);

        impl $name {
            pub fn get(self) -> $float {
                self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.to_bits() == other.0.to_bits()
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl From<$float> for $name {
            fn from(value: $float) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $float {
            fn from(key: $name) -> Self {
                key.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl Serialize for $name {
            /// Non-finite values have no JSON number form and are rejected.
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                if !self.0.is_finite() {
                    return Err(ser::Error::custom(format_args!(
                        "unsupported value: {}",
                        self.0
                    )));
                }
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                <$float>::deserialize(deserializer).map(Self)
            }
        }
    };
}

float_key!(
    /// An `f32` usable as a map key.
    F32Key(f32)
);

float_key!(
    /// An `f64` usable as a map key.
    ///
    /// ```
    /// use omap::{F64Key, Map};
    ///
    /// let mut rates = Map::new();
    /// rates.set(F64Key(0.5), "half");
    /// rates.set(F64Key(0.25), "quarter");
    /// assert_eq!(rates.get(&F64Key(0.5)), Some(&"half"));
    /// ```
    F64Key(f64)
);

impl JsonKey for F32Key {
    const KIND: KeyKind = KeyKind::Float { bits: 32 };

    fn from_wire(wire: &str) -> Result<Self, KeyError> {
        // serde narrows through `as f32`, which saturates to infinity
        let wide = parse_number::<f64>(wire, Self::KIND)?;
        if wide.abs() > f64::from(f32::MAX) {
            return Err(KeyError::OutOfRange {
                wire: wire.to_string(),
                kind: Self::KIND,
            });
        }
        Ok(Self(wide as f32))
    }
}

impl JsonKey for F64Key {
    const KIND: KeyKind = KeyKind::Float { bits: 64 };

    fn from_wire(wire: &str) -> Result<Self, KeyError> {
        parse_number(wire, Self::KIND).map(Self)
    }
}
