//! Storage keys and event topics.
//!
//! These names are shared with the web client and must not change.

/// Onboarding answers.
pub const ONBOARDING: &str = "vais.onboarding";
/// Where the user paused onboarding.
pub const ONBOARDING_SKIP_REMINDER: &str = "vais.onboarding.skip-reminder";
/// Mastery checklist progress.
pub const MASTERY: &str = "vais.mastery";
/// Trial usage counters.
pub const TRIAL_USAGE: &str = "trialUsage";

/// "Getting started" panel has been shown.
pub const GETTING_STARTED_SEEN: &str = "valasys-getting-started-seen";
/// Mastery widget dismissed.
pub const MASTERY_DISMISSED: &str = "valasys-mastery-dismissed";
/// Mastery widget collapsed.
pub const MASTERY_MINIMIZED: &str = "valasys-mastery-minimized";

/// Published with the new mastery record after every write.
pub const MASTERY_UPDATED_EVENT: &str = "vais:mastery-updated";
/// Published with the new reminder (or `None`) after every write or clear.
pub const ONBOARDING_SKIP_EVENT: &str = "vais:onboarding-skip";
