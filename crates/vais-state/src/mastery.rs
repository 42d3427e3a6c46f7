//! Mastery checklist progress.
//!
//! The checklist has six steps. "Signed up" is always done; the other five
//! are flags in [`MasteryRecord`]. Call sites only ever set flags to `true`,
//! but the store itself does not enforce that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vais_core::{EventBus, Subscription};
use vais_storage::{KeyValueStore, SharedStore, load_record, merge_record};

use crate::keys;
use crate::Result;

/// Total checklist steps, including the implicit "signed up" step.
pub const TOTAL_STEPS: u32 = 6;

// ============================================================================
// MasteryStep
// ============================================================================

/// A checklist step that can be marked complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasteryStep {
    /// Finished the onboarding questionnaire.
    OnboardingCompleted,
    /// Generated a first VAIS results list.
    VaisResultsGenerated,
    /// Downloaded accounts from a VAIS result.
    AccountsDownloaded,
    /// Ran a prospect search.
    ProspectSearchGenerated,
    /// Downloaded prospect details.
    ProspectDetailsDownloaded,
}

impl MasteryStep {
    /// Steps in checklist order.
    pub const ALL: [MasteryStep; 5] = [
        MasteryStep::OnboardingCompleted,
        MasteryStep::VaisResultsGenerated,
        MasteryStep::AccountsDownloaded,
        MasteryStep::ProspectSearchGenerated,
        MasteryStep::ProspectDetailsDownloaded,
    ];

    /// JSON field name of the flag.
    pub fn key(&self) -> &'static str {
        match self {
            Self::OnboardingCompleted => "onboardingCompleted",
            Self::VaisResultsGenerated => "vaisResultsGenerated",
            Self::AccountsDownloaded => "accountsDownloaded",
            Self::ProspectSearchGenerated => "prospectSearchGenerated",
            Self::ProspectDetailsDownloaded => "prospectDetailsDownloaded",
        }
    }

    /// Checklist label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnboardingCompleted => "Complete onboarding",
            Self::VaisResultsGenerated => "Generate VAIS results",
            Self::AccountsDownloaded => "Download accounts",
            Self::ProspectSearchGenerated => "Run a prospect search",
            Self::ProspectDetailsDownloaded => "Download prospect details",
        }
    }
}

impl std::str::FromStr for MasteryStep {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown mastery step: {s}"))
    }
}

// ============================================================================
// MasteryRecord
// ============================================================================

/// Persisted checklist state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasteryRecord {
    /// See [`MasteryStep::OnboardingCompleted`].
    pub onboarding_completed: bool,
    /// See [`MasteryStep::VaisResultsGenerated`].
    pub vais_results_generated: bool,
    /// See [`MasteryStep::AccountsDownloaded`].
    pub accounts_downloaded: bool,
    /// See [`MasteryStep::ProspectSearchGenerated`].
    pub prospect_search_generated: bool,
    /// See [`MasteryStep::ProspectDetailsDownloaded`].
    pub prospect_details_downloaded: bool,
    /// User hid the checklist.
    pub dismissed: bool,
    /// Time of the first write; never changed afterwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_seen_at: Option<DateTime<Utc>>,
}

impl MasteryRecord {
    /// Whether `step` is done.
    pub fn is_completed(&self, step: MasteryStep) -> bool {
        match step {
            MasteryStep::OnboardingCompleted => self.onboarding_completed,
            MasteryStep::VaisResultsGenerated => self.vais_results_generated,
            MasteryStep::AccountsDownloaded => self.accounts_downloaded,
            MasteryStep::ProspectSearchGenerated => self.prospect_search_generated,
            MasteryStep::ProspectDetailsDownloaded => self.prospect_details_downloaded,
        }
    }

    /// Completed steps, in checklist order.
    pub fn completed_steps(&self) -> Vec<MasteryStep> {
        MasteryStep::ALL
            .into_iter()
            .filter(|step| self.is_completed(*step))
            .collect()
    }

    /// Completion percentage; see [`calculate_mastery_percentage`].
    pub fn percentage(&self) -> u8 {
        calculate_mastery_percentage(self)
    }
}

/// `round(100 * (1 + completed flags) / 6)`.
///
/// The leading `1` is the always-complete "signed up" step, so an empty
/// record is 17% and a fully completed one is 100%.
pub fn calculate_mastery_percentage(record: &MasteryRecord) -> u8 {
    let done = 1 + record.completed_steps().len() as u32;
    (f64::from(100 * done) / f64::from(TOTAL_STEPS)).round() as u8
}

// ============================================================================
// MasteryPatch
// ============================================================================

/// Partial update for [`MasteryRecord`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryPatch {
    /// New value for `onboardingCompleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
    /// New value for `vaisResultsGenerated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vais_results_generated: Option<bool>,
    /// New value for `accountsDownloaded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts_downloaded: Option<bool>,
    /// New value for `prospectSearchGenerated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prospect_search_generated: Option<bool>,
    /// New value for `prospectDetailsDownloaded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prospect_details_downloaded: Option<bool>,
    /// New value for `dismissed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissed: Option<bool>,
}

impl MasteryPatch {
    /// Patch that sets one step flag.
    pub fn step(step: MasteryStep, done: bool) -> Self {
        let mut patch = Self::default();
        let slot = match step {
            MasteryStep::OnboardingCompleted => &mut patch.onboarding_completed,
            MasteryStep::VaisResultsGenerated => &mut patch.vais_results_generated,
            MasteryStep::AccountsDownloaded => &mut patch.accounts_downloaded,
            MasteryStep::ProspectSearchGenerated => &mut patch.prospect_search_generated,
            MasteryStep::ProspectDetailsDownloaded => &mut patch.prospect_details_downloaded,
        };
        *slot = Some(done);
        patch
    }

    /// Patch that sets `dismissed`.
    pub fn dismissed(dismissed: bool) -> Self {
        Self {
            dismissed: Some(dismissed),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StampedPatch<'a> {
    #[serde(flatten)]
    patch: &'a MasteryPatch,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_seen_at: Option<DateTime<Utc>>,
}

// ============================================================================
// MasteryStore
// ============================================================================

/// Reads, merges and broadcasts the mastery record.
///
/// Every successful write publishes the new record on
/// [`keys::MASTERY_UPDATED_EVENT`].
#[derive(Clone)]
pub struct MasteryStore {
    store: SharedStore,
    updates: EventBus<MasteryRecord>,
}

impl MasteryStore {
    /// Create a store over `store` with its own update bus.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            updates: EventBus::new(keys::MASTERY_UPDATED_EVENT),
        }
    }

    /// Load the record; missing data yields the default record.
    pub fn load(&self) -> Result<MasteryRecord> {
        Ok(load_record(&self.store, keys::MASTERY)?.unwrap_or_default())
    }

    /// Load the record, logging and defaulting on corrupt data.
    pub fn get(&self) -> MasteryRecord {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(key = keys::MASTERY, error = %e, "unreadable mastery record");
            MasteryRecord::default()
        })
    }

    /// Merge `patch` over the stored record, stamping `firstSeenAt` on the
    /// first write, persist, and publish the result.
    pub fn save(&self, patch: &MasteryPatch) -> Result<MasteryRecord> {
        let first_seen_at = match self.get().first_seen_at {
            Some(_) => None,
            None => Some(Utc::now()),
        };
        let stamped = StampedPatch {
            patch,
            first_seen_at,
        };

        let record: MasteryRecord = merge_record(&self.store, keys::MASTERY, &stamped)?;

        tracing::debug!(percentage = record.percentage(), "mastery record saved");
        self.emit_update(&record);
        Ok(record)
    }

    /// Set `step` to complete.
    pub fn mark_step_completed(&self, step: MasteryStep) -> Result<MasteryRecord> {
        tracing::info!(step = step.key(), "mastery step completed");
        self.save(&MasteryPatch::step(step, true))
    }

    /// Hide or show the checklist.
    pub fn set_dismissed(&self, dismissed: bool) -> Result<MasteryRecord> {
        self.save(&MasteryPatch::dismissed(dismissed))
    }

    /// Remove the record. Nothing is published.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::MASTERY)?;
        Ok(())
    }

    /// Publish `record` to every subscriber; returns how many were notified.
    pub fn emit_update(&self, record: &MasteryRecord) -> usize {
        self.updates.publish(record)
    }

    /// Listen for record updates.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<MasteryRecord>
    where
        F: Fn(&MasteryRecord) + Send + Sync + 'static,
    {
        self.updates.subscribe(listener)
    }

    /// The update bus, for wiring into other components.
    pub fn updates(&self) -> &EventBus<MasteryRecord> {
        &self.updates
    }
}

impl std::fmt::Debug for MasteryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasteryStore")
            .field("key", &keys::MASTERY)
            .field("updates", &self.updates)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use vais_storage::MemoryStore;

    fn mastery() -> (Arc<MemoryStore>, MasteryStore) {
        let memory = Arc::new(MemoryStore::new());
        (memory.clone(), MasteryStore::new(memory))
    }

    #[test]
    fn test_percentage_of_empty_record() {
        assert_eq!(calculate_mastery_percentage(&MasteryRecord::default()), 17);
    }

    #[test]
    fn test_percentage_of_full_record() {
        let record = MasteryRecord {
            onboarding_completed: true,
            vais_results_generated: true,
            accounts_downloaded: true,
            prospect_search_generated: true,
            prospect_details_downloaded: true,
            ..Default::default()
        };
        assert_eq!(record.percentage(), 100);
    }

    #[test]
    fn test_percentage_steps() {
        let (_mem, store) = mastery();
        let mut seen = vec![store.get().percentage()];
        for step in MasteryStep::ALL {
            seen.push(store.mark_step_completed(step).unwrap().percentage());
        }
        assert_eq!(seen, vec![17, 33, 50, 67, 83, 100]);
    }

    #[test]
    fn test_dismissed_does_not_count() {
        let record = MasteryRecord {
            dismissed: true,
            ..Default::default()
        };
        assert_eq!(record.percentage(), 17);
    }

    #[test]
    fn test_save_merges_and_stamps_first_seen_once() {
        let (_mem, store) = mastery();

        let first = store
            .save(&MasteryPatch::step(MasteryStep::VaisResultsGenerated, true))
            .unwrap();
        let stamp = first.first_seen_at.unwrap();

        let second = store.set_dismissed(true).unwrap();
        assert_eq!(second.first_seen_at, Some(stamp));
        assert!(second.vais_results_generated);
        assert!(second.dismissed);
        assert_eq!(store.get(), second);
    }

    #[test]
    fn test_save_publishes_update() {
        let (_mem, store) = mastery();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |record| sink.lock().unwrap().push(record.percentage()));

        store.mark_step_completed(MasteryStep::OnboardingCompleted).unwrap();
        store.mark_step_completed(MasteryStep::VaisResultsGenerated).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![33, 50]);
    }

    #[test]
    fn test_corrupt_record_defaults_and_is_replaced() {
        let (mem, store) = mastery();
        mem.set(keys::MASTERY, "{{{").unwrap();

        assert!(store.load().unwrap_err().is_corrupt_data());
        assert_eq!(store.get(), MasteryRecord::default());

        let record = store.mark_step_completed(MasteryStep::AccountsDownloaded).unwrap();
        assert!(record.accounts_downloaded);
        assert!(record.first_seen_at.is_some());
    }

    #[test]
    fn test_wrong_typed_field_is_replaced_on_save() {
        let (mem, store) = mastery();
        mem.set(keys::MASTERY, r#"{"dismissed":"yes","vaisResultsGenerated":true}"#)
            .unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |record| sink.lock().unwrap().push(record.percentage()));

        assert_eq!(store.get().percentage(), 17);
        let first = store.mark_step_completed(MasteryStep::OnboardingCompleted).unwrap();
        assert_eq!(first.percentage(), 33);
        assert!(!first.dismissed);
        let second = store.mark_step_completed(MasteryStep::VaisResultsGenerated).unwrap();
        assert_eq!(second.percentage(), 50);

        assert_eq!(store.load().unwrap(), second);
        assert_eq!(*seen.lock().unwrap(), vec![33, 50]);
    }

    #[test]
    fn test_clear_then_get_is_default() {
        let (_mem, store) = mastery();
        store.mark_step_completed(MasteryStep::OnboardingCompleted).unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), MasteryRecord::default());
    }

    #[test]
    fn test_serialized_field_names() {
        let (mem, store) = mastery();
        store.mark_step_completed(MasteryStep::ProspectSearchGenerated).unwrap();
        let raw = mem.get(keys::MASTERY).unwrap().unwrap();
        assert!(raw.contains(r#""prospectSearchGenerated":true"#));
        assert!(raw.contains(r#""firstSeenAt":"#));
        assert!(!raw.contains("onboardingCompleted"));
    }

    #[test]
    fn test_partial_stored_record_loads() {
        let (mem, store) = mastery();
        mem.set(keys::MASTERY, r#"{"onboardingCompleted":true}"#).unwrap();
        let record = store.get();
        assert!(record.onboarding_completed);
        assert_eq!(record.percentage(), 33);
    }

    #[test]
    fn test_step_from_str() {
        assert_eq!(
            "accountsDownloaded".parse::<MasteryStep>().unwrap(),
            MasteryStep::AccountsDownloaded
        );
        assert!("signedUp".parse::<MasteryStep>().is_err());
    }
}
