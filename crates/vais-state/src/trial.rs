//! Trial usage counters.
//!
//! Each metered feature has a counter stored under
//! [`keys::TRIAL_USAGE`](crate::keys::TRIAL_USAGE) and a plan limit.
//! Counters only move through [`TrialUsageStore::increment`] and
//! [`TrialUsageStore::reset`].

use serde::{Deserialize, Serialize};
use vais_storage::{KeyValueStore, SharedStore, load_record, merge_record};

use crate::Result;
use crate::keys;

/// A metered trial feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrialFeature {
    /// VAIS result generations.
    VaisRuns,
    /// Prospect searches.
    ProspectSearches,
    /// Account or prospect downloads.
    Downloads,
}

impl TrialFeature {
    /// Every metered feature.
    pub const ALL: [TrialFeature; 3] = [
        TrialFeature::VaisRuns,
        TrialFeature::ProspectSearches,
        TrialFeature::Downloads,
    ];

    /// JSON field name of the counter.
    pub fn key(&self) -> &'static str {
        match self {
            Self::VaisRuns => "vaisRuns",
            Self::ProspectSearches => "prospectSearches",
            Self::Downloads => "downloads",
        }
    }
}

/// Per-feature allowance for a trial account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialLimits {
    /// Allowed VAIS runs.
    pub vais_runs: u32,
    /// Allowed prospect searches.
    pub prospect_searches: u32,
    /// Allowed downloads.
    pub downloads: u32,
}

impl Default for TrialLimits {
    fn default() -> Self {
        Self {
            vais_runs: 3,
            prospect_searches: 5,
            downloads: 10,
        }
    }
}

impl TrialLimits {
    /// Allowance for `feature`.
    pub fn limit(&self, feature: TrialFeature) -> u32 {
        match feature {
            TrialFeature::VaisRuns => self.vais_runs,
            TrialFeature::ProspectSearches => self.prospect_searches,
            TrialFeature::Downloads => self.downloads,
        }
    }
}

/// Stored counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrialUsage {
    /// VAIS runs used.
    pub vais_runs: u32,
    /// Prospect searches used.
    pub prospect_searches: u32,
    /// Downloads used.
    pub downloads: u32,
}

impl TrialUsage {
    /// Usage of `feature`.
    pub fn used(&self, feature: TrialFeature) -> u32 {
        match feature {
            TrialFeature::VaisRuns => self.vais_runs,
            TrialFeature::ProspectSearches => self.prospect_searches,
            TrialFeature::Downloads => self.downloads,
        }
    }
}

/// Reads and updates trial counters against a set of limits.
#[derive(Clone)]
pub struct TrialUsageStore {
    store: SharedStore,
    limits: TrialLimits,
}

impl TrialUsageStore {
    /// Store with the default trial limits.
    pub fn new(store: SharedStore) -> Self {
        Self::with_limits(store, TrialLimits::default())
    }

    /// Store with explicit limits.
    pub fn with_limits(store: SharedStore, limits: TrialLimits) -> Self {
        Self { store, limits }
    }

    /// Limits in effect.
    pub fn limits(&self) -> TrialLimits {
        self.limits
    }

    /// Load the counters; missing data yields zeros.
    pub fn load(&self) -> Result<TrialUsage> {
        Ok(load_record(&self.store, keys::TRIAL_USAGE)?.unwrap_or_default())
    }

    /// Load the counters, logging and defaulting on corrupt data.
    pub fn get(&self) -> TrialUsage {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(key = keys::TRIAL_USAGE, error = %e, "unreadable trial usage");
            TrialUsage::default()
        })
    }

    /// Uses left for `feature`.
    pub fn remaining(&self, feature: TrialFeature) -> u32 {
        self.limits
            .limit(feature)
            .saturating_sub(self.get().used(feature))
    }

    /// Whether `feature` has no uses left.
    pub fn is_exhausted(&self, feature: TrialFeature) -> bool {
        self.remaining(feature) == 0
    }

    /// Count one use of `feature`.
    ///
    /// Returns the new count, or `None` without writing anything when the
    /// allowance is already used up.
    pub fn increment(&self, feature: TrialFeature) -> Result<Option<u32>> {
        let used = self.get().used(feature);
        if used >= self.limits.limit(feature) {
            tracing::info!(feature = feature.key(), used, "trial allowance exhausted");
            return Ok(None);
        }

        let patch = serde_json::json!({ feature.key(): used + 1 });
        let usage: TrialUsage = merge_record(&self.store, keys::TRIAL_USAGE, &patch)?;
        let next = usage.used(feature);
        tracing::debug!(feature = feature.key(), used = next, "trial usage recorded");
        Ok(Some(next))
    }

    /// Zero every counter.
    pub fn reset(&self) -> Result<()> {
        self.store.remove(keys::TRIAL_USAGE)?;
        Ok(())
    }
}

impl std::fmt::Debug for TrialUsageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrialUsageStore")
            .field("key", &keys::TRIAL_USAGE)
            .field("limits", &self.limits)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vais_storage::MemoryStore;

    fn trial(limits: TrialLimits) -> (Arc<MemoryStore>, TrialUsageStore) {
        let memory = Arc::new(MemoryStore::new());
        (memory.clone(), TrialUsageStore::with_limits(memory, limits))
    }

    #[test]
    fn test_fresh_usage_is_zero() {
        let (_mem, store) = trial(TrialLimits::default());
        assert_eq!(store.get(), TrialUsage::default());
        assert_eq!(store.remaining(TrialFeature::VaisRuns), 3);
    }

    #[test]
    fn test_increment_until_exhausted() {
        let limits = TrialLimits {
            vais_runs: 2,
            ..Default::default()
        };
        let (_mem, store) = trial(limits);

        assert_eq!(store.increment(TrialFeature::VaisRuns).unwrap(), Some(1));
        assert_eq!(store.increment(TrialFeature::VaisRuns).unwrap(), Some(2));
        assert!(store.is_exhausted(TrialFeature::VaisRuns));
        assert_eq!(store.increment(TrialFeature::VaisRuns).unwrap(), None);
        assert_eq!(store.get().vais_runs, 2);
    }

    #[test]
    fn test_counters_are_independent() {
        let (mem, store) = trial(TrialLimits::default());
        store.increment(TrialFeature::Downloads).unwrap();
        store.increment(TrialFeature::ProspectSearches).unwrap();
        store.increment(TrialFeature::Downloads).unwrap();

        let usage = store.get();
        assert_eq!(usage.downloads, 2);
        assert_eq!(usage.prospect_searches, 1);
        assert_eq!(usage.vais_runs, 0);
        assert_eq!(
            mem.get(keys::TRIAL_USAGE).unwrap().as_deref(),
            Some(r#"{"downloads":2,"prospectSearches":1}"#)
        );
    }

    #[test]
    fn test_wrong_typed_counter_does_not_bypass_limit() {
        let (mem, store) = trial(TrialLimits::default());
        mem.set(keys::TRIAL_USAGE, r#"{"downloads":"x"}"#).unwrap();

        let counts: Vec<Option<u32>> = (0..6)
            .map(|_| store.increment(TrialFeature::VaisRuns).unwrap())
            .collect();
        assert_eq!(counts, vec![Some(1), Some(2), Some(3), None, None, None]);
        assert_eq!(store.remaining(TrialFeature::VaisRuns), 0);
        assert_eq!(store.load().unwrap().downloads, 0);
    }

    #[test]
    fn test_reset() {
        let (_mem, store) = trial(TrialLimits::default());
        store.increment(TrialFeature::Downloads).unwrap();
        store.reset().unwrap();
        assert_eq!(store.remaining(TrialFeature::Downloads), 10);
    }

    #[test]
    fn test_zero_limit_is_exhausted() {
        let limits = TrialLimits {
            downloads: 0,
            ..Default::default()
        };
        let (_mem, store) = trial(limits);
        assert!(store.is_exhausted(TrialFeature::Downloads));
        assert_eq!(store.increment(TrialFeature::Downloads).unwrap(), None);
    }
}
