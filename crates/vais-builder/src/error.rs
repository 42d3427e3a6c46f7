//! Error types for vais-builder

use thiserror::Error;

use crate::block::BlockKind;
use crate::id::BlockId;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors that can occur while editing a canvas
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BuilderError {
    /// The block kind has no such attribute
    #[error("{kind} blocks have no '{field}' attribute")]
    UnsupportedField {
        /// Kind of the edited block
        kind: BlockKind,
        /// Name of the rejected field
        field: &'static str,
    },

    /// A social URL edit named a platform the footer does not list
    #[error("Footer has no '{platform}' link")]
    UnknownPlatform {
        /// The missing platform
        platform: String,
    },

    /// No block with this id on the canvas
    #[error("Block not found: {id}")]
    BlockNotFound {
        /// The requested id
        id: BlockId,
    },

    /// Canvas import/export failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BuilderError {
    /// Create an unsupported-field error.
    pub fn unsupported(kind: BlockKind, field: &'static str) -> Self {
        Self::UnsupportedField { kind, field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_field_display() {
        let err = BuilderError::unsupported(BlockKind::Image, "font-size");
        assert_eq!(err.to_string(), "image blocks have no 'font-size' attribute");
    }

    #[test]
    fn test_unknown_platform_display() {
        let err = BuilderError::UnknownPlatform {
            platform: "tiktok".to_string(),
        };
        assert!(err.to_string().contains("tiktok"));
    }
}
