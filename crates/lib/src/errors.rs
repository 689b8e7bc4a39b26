//! Crate-level error type.

use crate::json::JsonError;
use crate::key::KeyError;

/// Result type used throughout the omap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the omap library.
///
/// Map operations themselves never fail; every error comes from crossing the
/// JSON boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured key conversion errors from the key module
    #[error(transparent)]
    Key(KeyError),

    /// Structured codec errors from the json module
    #[error(transparent)]
    Json(JsonError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Key(_) => "key",
            Error::Json(_) => "json",
        }
    }

    /// Check if this error is about a key, whether converting or encoding it.
    pub fn is_key_error(&self) -> bool {
        match self {
            Error::Key(_) => true,
            Error::Json(json_err) => json_err.is_key_error(),
        }
    }

    /// Check if this error came from encoding or decoding a value.
    pub fn is_value_error(&self) -> bool {
        match self {
            Error::Json(json_err) => json_err.is_value_error(),
            _ => false,
        }
    }

    /// Check if the input was not a well-formed JSON object.
    pub fn is_malformed(&self) -> bool {
        match self {
            Error::Json(json_err) => json_err.is_malformed(),
            _ => false,
        }
    }

    /// The underlying key conversion failure, if there is one.
    pub fn key_error(&self) -> Option<&KeyError> {
        match self {
            Error::Key(key_err) => Some(key_err),
            Error::Json(JsonError::KeyConversion { source, .. }) => Some(source),
            Error::Json(_) => None,
        }
    }
}
