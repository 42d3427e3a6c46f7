//! A user walking through onboarding, skipping and coming back.

use std::sync::{Arc, Mutex};

use vais_state::onboarding::{Experience, ProductCategory, Role, TargetIndustry, UseCase};
use vais_state::{MasteryStep, OnboardingAnswer, OnboardingStep};

use crate::common::memory_stores;

#[test]
fn test_percentage_jumps_only_on_thank_you() {
    let (_memory, stores) = memory_stores();
    let flow = stores.onboarding_flow();

    let percentages = Arc::new(Mutex::new(Vec::new()));
    let sink = percentages.clone();
    let _sub = stores
        .mastery
        .subscribe(move |record| sink.lock().unwrap().push(record.percentage()));

    let answers = [
        OnboardingAnswer::Role(Role::DemandGeneration),
        OnboardingAnswer::UseCase(UseCase::AccountBasedMarketing),
        OnboardingAnswer::Experience(Experience::Beginner),
        OnboardingAnswer::Industry(TargetIndustry::Healthcare),
        OnboardingAnswer::Category(ProductCategory::Software),
    ];
    let mut page = OnboardingStep::Role;
    for answer in answers {
        assert_eq!(answer.step(), page);
        page = flow.answer(answer).unwrap();
        assert_eq!(stores.mastery.get().percentage(), 17);
    }
    assert_eq!(page, OnboardingStep::ThankYou);
    assert!(percentages.lock().unwrap().is_empty());

    flow.complete().unwrap();
    assert_eq!(*percentages.lock().unwrap(), vec![33]);
    assert!(stores.onboarding.get().is_complete());
}

#[test]
fn test_skip_badge_follows_reminder_events() {
    let (_memory, stores) = memory_stores();
    let flow = stores.onboarding_flow();

    let badge = Arc::new(Mutex::new(None::<String>));
    let sink = badge.clone();
    let _sub = stores.reminder.subscribe(move |reminder| {
        *sink.lock().unwrap() = reminder.as_ref().map(|r| r.progress_label());
    });

    flow.answer(OnboardingAnswer::Role(Role::SalesLeader)).unwrap();
    flow.answer(OnboardingAnswer::UseCase(UseCase::LeadGeneration))
        .unwrap();
    flow.skip(OnboardingStep::Experience).unwrap();
    assert_eq!(badge.lock().unwrap().as_deref(), Some("Step 3 of 5"));

    let resumed = flow.resume().unwrap();
    assert_eq!(resumed, OnboardingStep::Experience);
    assert_eq!(*badge.lock().unwrap(), None);
    assert!(stores.reminder.get().is_none());
}

#[test]
fn test_summary_after_partial_answers() {
    let (_memory, stores) = memory_stores();
    let flow = stores.onboarding_flow();
    flow.answer(OnboardingAnswer::Industry(TargetIndustry::FinancialServices))
        .unwrap();

    let summary = stores.onboarding.get().summary();
    let industry = summary
        .iter()
        .find(|(label, _)| *label == "Target industry")
        .unwrap();
    assert_eq!(industry.1, "Financial Services");
    assert_eq!(summary[0].1, "—");
}

#[test]
fn test_later_checklist_steps() {
    let (_memory, stores) = memory_stores();
    stores.onboarding_flow().complete().unwrap();
    stores
        .mastery
        .mark_step_completed(MasteryStep::VaisResultsGenerated)
        .unwrap();
    let record = stores
        .mastery
        .mark_step_completed(MasteryStep::AccountsDownloaded)
        .unwrap();
    assert_eq!(record.percentage(), 67);
    assert_eq!(
        record.completed_steps(),
        vec![
            MasteryStep::OnboardingCompleted,
            MasteryStep::VaisResultsGenerated,
            MasteryStep::AccountsDownloaded,
        ]
    );
}
