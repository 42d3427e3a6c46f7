//! Boolean UI flags stored as `"true"` / `"false"`.

use vais_storage::{KeyValueStore, SharedStore};

use crate::Result;
use crate::keys;

/// A persisted UI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiFlag {
    /// The "getting started" panel has been shown once.
    GettingStartedSeen,
    /// The mastery widget was dismissed.
    MasteryDismissed,
    /// The mastery widget is collapsed.
    MasteryMinimized,
}

impl UiFlag {
    /// Storage key of the flag.
    pub fn key(&self) -> &'static str {
        match self {
            Self::GettingStartedSeen => keys::GETTING_STARTED_SEEN,
            Self::MasteryDismissed => keys::MASTERY_DISMISSED,
            Self::MasteryMinimized => keys::MASTERY_MINIMIZED,
        }
    }
}

/// Reads and writes [`UiFlag`]s.
#[derive(Clone)]
pub struct FlagStore {
    store: SharedStore,
}

impl FlagStore {
    /// Create a flag store over `store`.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Whether `flag` is set. Missing, unreadable or unparsable values are `false`.
    pub fn is_set(&self, flag: UiFlag) -> bool {
        match self.store.get(flag.key()) {
            Ok(Some(raw)) => raw.trim() == "true",
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(key = flag.key(), error = %e, "unreadable UI flag");
                false
            }
        }
    }

    /// Store `value` for `flag`.
    pub fn set(&self, flag: UiFlag, value: bool) -> Result<()> {
        self.store
            .set(flag.key(), if value { "true" } else { "false" })?;
        Ok(())
    }

    /// Forget `flag`.
    pub fn clear(&self, flag: UiFlag) -> Result<()> {
        self.store.remove(flag.key())?;
        Ok(())
    }
}

impl std::fmt::Debug for FlagStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagStore").finish_non_exhaustive()
    }
}
