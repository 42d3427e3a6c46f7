//! # vais-state
//!
//! Persisted client records for VAIS.
//!
//! Every record lives under a fixed key in a [`KeyValueStore`](vais_storage::KeyValueStore).
//! Reads never fail the caller: corrupt data is logged and replaced by the
//! record's default. Writes merge shallowly over what is stored.
//!
//! - [`onboarding`]: questionnaire answers
//! - [`mastery`]: checklist progress and completion percentage
//! - [`reminder`]: the single "finish onboarding" reminder
//! - [`trial`]: trial usage counters
//! - [`flags`]: boolean UI flags
//! - [`flow`]: the questionnaire page sequence

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod flags;
pub mod flow;
pub mod keys;
pub mod mastery;
pub mod onboarding;
mod proptests;
pub mod reminder;
pub mod trial;

pub use error::{Error, Result};
pub use flags::{FlagStore, UiFlag};
pub use flow::{OnboardingAnswer, OnboardingFlow, OnboardingStep};
pub use mastery::{
    MasteryPatch, MasteryRecord, MasteryStep, MasteryStore, calculate_mastery_percentage,
};
pub use onboarding::{OnboardingRecord, OnboardingStore};
pub use reminder::{SkipReminder, SkipReminderStore};
pub use trial::{TrialFeature, TrialLimits, TrialUsage, TrialUsageStore};

use vais_storage::SharedStore;

/// Every record store over one shared backend.
///
/// Clones share the backend and the update buses.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Onboarding answers.
    pub onboarding: OnboardingStore,
    /// Mastery checklist.
    pub mastery: MasteryStore,
    /// Skip reminder.
    pub reminder: SkipReminderStore,
    /// Trial usage.
    pub trial: TrialUsageStore,
    /// UI flags.
    pub flags: FlagStore,
}

impl Stores {
    /// Build every store over `backend`.
    pub fn new(backend: SharedStore) -> Self {
        Self {
            onboarding: OnboardingStore::new(backend.clone()),
            mastery: MasteryStore::new(backend.clone()),
            reminder: SkipReminderStore::new(backend.clone()),
            trial: TrialUsageStore::new(backend.clone()),
            flags: FlagStore::new(backend),
        }
    }

    /// Onboarding flow wired to these stores.
    pub fn onboarding_flow(&self) -> OnboardingFlow {
        OnboardingFlow::new(
            self.onboarding.clone(),
            self.mastery.clone(),
            self.reminder.clone(),
        )
    }
}
