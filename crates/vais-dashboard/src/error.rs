//! Error types for vais-dashboard

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vais-dashboard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A filter or sort value could not be parsed
    #[error("Invalid {field}: '{value}'")]
    InvalidValue {
        /// What was being parsed
        field: &'static str,
        /// The rejected input
        value: String,
    },
}

impl Error {
    /// Create an invalid-value error.
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
