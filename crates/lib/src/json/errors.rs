//! Error types for the ordered JSON codec.

use std::fmt;

use thiserror::Error;

use crate::key::KeyError;

/// Which way a value was travelling when the JSON primitive failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encoding"),
            Direction::Decode => f.write_str("decoding"),
        }
    }
}

/// Structured error types for ordered JSON encode and decode.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum JsonError {
    /// A key encodes to a JSON array or object, which cannot be a member name
    #[error("unsupported key type: {type_name}")]
    UnsupportedKeyShape { type_name: &'static str },

    /// A key could not be encoded at all
    #[error("encoding key (type {type_name}): {source}")]
    KeyEncode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A member name could not be converted into the map's key type
    #[error("parsing key as type {type_name}: {source}")]
    KeyConversion {
        type_name: &'static str,
        #[source]
        source: KeyError,
    },

    /// A value failed to encode or decode
    #[error("{direction} value (type {type_name}): {source}")]
    ValueCodec {
        type_name: &'static str,
        direction: Direction,
        #[source]
        source: serde_json::Error,
    },

    /// The input is not a single well-formed JSON object
    #[error("cannot parse {snippet} as JSON object: {reason}")]
    MalformedDocument { snippet: String, reason: String },
}

impl JsonError {
    /// Check if this error is about the shape or encoding of a key
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            JsonError::UnsupportedKeyShape { .. }
                | JsonError::KeyEncode { .. }
                | JsonError::KeyConversion { .. }
        )
    }

    /// Check if this error came from the value codec
    pub fn is_value_error(&self) -> bool {
        matches!(self, JsonError::ValueCodec { .. })
    }

    /// Check if the input document itself was malformed
    pub fn is_malformed(&self) -> bool {
        matches!(self, JsonError::MalformedDocument { .. })
    }

    /// Get the Rust type involved, if the error names one
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            JsonError::UnsupportedKeyShape { type_name }
            | JsonError::KeyEncode { type_name, .. }
            | JsonError::KeyConversion { type_name, .. }
            | JsonError::ValueCodec { type_name, .. } => Some(*type_name),
            JsonError::MalformedDocument { .. } => None,
        }
    }
}

// Conversion from JsonError to the main Error type
impl From<JsonError> for crate::Error {
    fn from(err: JsonError) -> Self {
        crate::Error::Json(err)
    }
}
