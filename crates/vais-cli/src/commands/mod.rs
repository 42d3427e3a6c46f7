//! Command handlers.
//!
//! Handlers write their output to a caller-supplied writer so they can be
//! exercised without a terminal.

mod campaigns;
mod render;
mod serve;
mod state;

pub use campaigns::run_campaigns;
pub use render::run_render;
pub use serve::run_serve;
pub use state::{run_flags, run_onboarding, run_progress, run_trial};

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use vais_storage::{FileStore, MemoryStore, SharedStore};

/// Backend for the record stores: a directory when given, memory otherwise.
pub fn open_backend(data_dir: Option<&Path>) -> anyhow::Result<SharedStore> {
    match data_dir {
        Some(dir) => {
            let store = FileStore::open(dir)
                .with_context(|| format!("failed to open data directory {}", dir.display()))?;
            tracing::debug!(dir = %dir.display(), "using file-backed store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::debug!("using in-memory store; nothing will be persisted");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
