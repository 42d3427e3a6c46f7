//! Error types for vais-storage

use thiserror::Error;

/// Result type alias for vais-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vais-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vais-core
    #[error("Core error: {0}")]
    Core(#[from] vais_core::Error),

    /// Stored value under `key` is not valid JSON for the expected record
    #[error("Corrupt value under '{key}': {source}")]
    Parse {
        /// Storage key that held the bad value
        key: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A record or patch could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Patch did not serialize to a JSON object
    #[error("Patch for '{key}' is not a JSON object")]
    InvalidPatch {
        /// Storage key the patch targeted
        key: String,
    },

    /// Key cannot be used with this backend
    #[error("Invalid storage key: {key:?}")]
    InvalidKey {
        /// The rejected key
        key: String,
    },
}

impl Error {
    /// Creates a parse error for the value stored under `key`.
    pub fn parse(key: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Parse {
            key: key.into(),
            source,
        }
    }

    /// Returns `true` if the error means the stored data is unreadable,
    /// as opposed to the backend being unavailable.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
