//! Shared setup for vais-state integration tests.

use std::sync::Arc;

use tempfile::TempDir;
use vais_state::Stores;
use vais_storage::{FileStore, MemoryStore, SharedStore};

/// Stores over a file backend in a temporary directory.
///
/// The directory lives as long as the harness.
pub struct FileHarness {
    /// Keeps the directory alive.
    pub dir: TempDir,
    /// Backend shared by every store.
    pub backend: SharedStore,
    /// The stores.
    pub stores: Stores,
}

impl FileHarness {
    /// Fresh empty directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let backend: SharedStore = Arc::new(FileStore::open(dir.path()).expect("file store"));
        let stores = Stores::new(backend.clone());
        Self {
            dir,
            backend,
            stores,
        }
    }

    /// New stores over the same directory, as after a restart.
    pub fn reopen(&self) -> Stores {
        let backend: SharedStore =
            Arc::new(FileStore::open(self.dir.path()).expect("file store"));
        Stores::new(backend)
    }
}

/// Stores over a fresh in-memory backend.
pub fn memory_stores() -> (Arc<MemoryStore>, Stores) {
    let memory = Arc::new(MemoryStore::new());
    (memory.clone(), Stores::new(memory))
}
