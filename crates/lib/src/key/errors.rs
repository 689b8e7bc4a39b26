//! Error types for key conversion.

use thiserror::Error;

use super::KeyKind;

/// Failure to turn a JSON member name into a native key.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum KeyError {
    /// The member name is not a JSON number literal that fits the key type
    #[error("cannot parse {wire:?} as {kind}: {source}")]
    InvalidNumber {
        wire: String,
        kind: KeyKind,
        #[source]
        source: serde_json::Error,
    },

    /// The member name is a valid number literal outside the key type's range
    #[error("{wire:?} is out of range for {kind}")]
    OutOfRange { wire: String, kind: KeyKind },
}

impl KeyError {
    /// The raw member name that failed to convert.
    pub fn wire(&self) -> &str {
        match self {
            KeyError::InvalidNumber { wire, .. } | KeyError::OutOfRange { wire, .. } => wire,
        }
    }

    /// The classification of the key type that was targeted.
    pub fn kind(&self) -> KeyKind {
        match self {
            KeyError::InvalidNumber { kind, .. } | KeyError::OutOfRange { kind, .. } => *kind,
        }
    }

    /// Check if the member name is valid JSON that the key type cannot represent,
    /// such as an integer wider than the key, a float beyond the key's range or a
    /// fraction for an integer key.
    pub fn is_unrepresentable(&self) -> bool {
        match self {
            KeyError::InvalidNumber { source, .. } => source.is_data(),
            KeyError::OutOfRange { .. } => true,
        }
    }

    /// Check if the member name is not a number literal at all.
    pub fn is_malformed(&self) -> bool {
        match self {
            KeyError::InvalidNumber { source, .. } => source.is_syntax() || source.is_eof(),
            KeyError::OutOfRange { .. } => false,
        }
    }
}

// Conversion from KeyError to the main Error type
impl From<KeyError> for crate::Error {
    fn from(err: KeyError) -> Self {
        crate::Error::Key(err)
    }
}
