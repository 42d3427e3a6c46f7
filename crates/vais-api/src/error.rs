//! Error types for vais-api

use thiserror::Error;

/// Result type alias for vais-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vais-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// Binding or serving failed
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
