//! Error types for vais-state

use thiserror::Error;

/// Result type alias for vais-state operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vais-state
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vais-core
    #[error("Core error: {0}")]
    Core(#[from] vais_core::Error),

    /// Error from vais-storage
    #[error("Storage error: {0}")]
    Storage(#[from] vais_storage::Error),

    /// The step cannot be skipped
    #[error("Onboarding step '{step}' cannot be skipped")]
    NotSkippable {
        /// Route of the step
        step: &'static str,
    },
}

impl Error {
    /// Returns `true` if the error comes from unreadable persisted data.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Error::Storage(e) if e.is_corrupt_data())
    }
}
