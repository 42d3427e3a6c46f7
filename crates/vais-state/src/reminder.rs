//! "Finish onboarding" reminder.
//!
//! At most one reminder exists. Saving replaces it wholesale (no merge);
//! clearing removes it. Both publish on
//! [`keys::ONBOARDING_SKIP_EVENT`](crate::keys::ONBOARDING_SKIP_EVENT).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vais_core::{EventBus, Subscription};
use vais_storage::{KeyValueStore, SharedStore, load_record, save_record};

use crate::Result;
use crate::keys;

/// Where the user paused onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipReminder {
    /// Route to resume at.
    pub step_route: String,
    /// Step name shown in the badge.
    pub step_label: String,
    /// 1-based step number.
    pub step_number: u8,
    /// Number of question steps.
    pub total_steps: u8,
    /// When the user skipped.
    pub created_at: DateTime<Utc>,
}

impl SkipReminder {
    /// Reminder created now.
    pub fn new(
        step_route: impl Into<String>,
        step_label: impl Into<String>,
        step_number: u8,
        total_steps: u8,
    ) -> Self {
        Self {
            step_route: step_route.into(),
            step_label: step_label.into(),
            step_number,
            total_steps,
            created_at: Utc::now(),
        }
    }

    /// "Step 2 of 5" style progress text.
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step_number, self.total_steps)
    }
}

/// Persists the single skip reminder and broadcasts changes.
#[derive(Clone)]
pub struct SkipReminderStore {
    store: SharedStore,
    updates: EventBus<Option<SkipReminder>>,
}

impl SkipReminderStore {
    /// Create a store over `store` with its own update bus.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            updates: EventBus::new(keys::ONBOARDING_SKIP_EVENT),
        }
    }

    /// Load the reminder, if any.
    pub fn load(&self) -> Result<Option<SkipReminder>> {
        Ok(load_record(&self.store, keys::ONBOARDING_SKIP_REMINDER)?)
    }

    /// Load the reminder, logging and returning `None` on corrupt data.
    pub fn get(&self) -> Option<SkipReminder> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(
                key = keys::ONBOARDING_SKIP_REMINDER,
                error = %e,
                "unreadable skip reminder"
            );
            None
        })
    }

    /// Replace the stored reminder and publish it.
    pub fn save(&self, reminder: &SkipReminder) -> Result<()> {
        save_record(&self.store, keys::ONBOARDING_SKIP_REMINDER, reminder)?;
        tracing::debug!(step = %reminder.step_route, "skip reminder saved");
        self.updates.publish(&Some(reminder.clone()));
        Ok(())
    }

    /// Remove the reminder and publish `None`.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::ONBOARDING_SKIP_REMINDER)?;
        self.updates.publish(&None);
        Ok(())
    }

    /// Listen for reminder changes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<Option<SkipReminder>>
    where
        F: Fn(&Option<SkipReminder>) + Send + Sync + 'static,
    {
        self.updates.subscribe(listener)
    }
}

impl std::fmt::Debug for SkipReminderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkipReminderStore")
            .field("key", &keys::ONBOARDING_SKIP_REMINDER)
            .field("updates", &self.updates)
            .finish()
    }
}
