//! Records persisted through the file backend survive a restart.

use vais_state::keys;
use vais_state::onboarding::Role;
use vais_state::{MasteryStep, OnboardingAnswer, OnboardingStep, TrialFeature, UiFlag};
use vais_storage::KeyValueStore;

use crate::common::FileHarness;

#[test]
fn test_records_survive_reopen() {
    let harness = FileHarness::new();
    let flow = harness.stores.onboarding_flow();
    flow.answer(OnboardingAnswer::Role(Role::Founder)).unwrap();
    flow.skip(OnboardingStep::UseCase).unwrap();
    harness
        .stores
        .trial
        .increment(TrialFeature::ProspectSearches)
        .unwrap();
    harness
        .stores
        .flags
        .set(UiFlag::GettingStartedSeen, true)
        .unwrap();

    let reopened = harness.reopen();
    assert_eq!(reopened.onboarding.get().role, Some(Role::Founder));
    assert_eq!(
        reopened.reminder.get().map(|r| r.step_route),
        Some("/onboarding/use-case".to_string())
    );
    assert_eq!(reopened.trial.get().prospect_searches, 1);
    assert!(reopened.flags.is_set(UiFlag::GettingStartedSeen));
}

#[test]
fn test_first_seen_at_is_stable_across_reopen() {
    let harness = FileHarness::new();
    let first = harness
        .stores
        .mastery
        .mark_step_completed(MasteryStep::OnboardingCompleted)
        .unwrap();

    let reopened = harness.reopen();
    let second = reopened
        .mastery
        .mark_step_completed(MasteryStep::ProspectSearchGenerated)
        .unwrap();
    assert_eq!(first.first_seen_at, second.first_seen_at);
}

#[test]
fn test_corrupt_file_reads_as_default() {
    let harness = FileHarness::new();
    harness.backend.set(keys::MASTERY, "][").unwrap();

    let record = harness.stores.mastery.get();
    assert_eq!(record.percentage(), 17);
    assert!(harness.stores.mastery.load().is_err());
}

#[test]
fn test_keys_on_disk() {
    let harness = FileHarness::new();
    harness.stores.mastery.set_dismissed(true).unwrap();
    harness
        .stores
        .flags
        .set(UiFlag::MasteryMinimized, true)
        .unwrap();

    let stored = harness.backend.keys().unwrap();
    assert_eq!(
        stored,
        vec![keys::MASTERY.to_string(), keys::MASTERY_MINIMIZED.to_string()]
    );
}
