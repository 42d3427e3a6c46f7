//! Onboarding questionnaire flow.
//!
//! Five question pages followed by a thank-you page. Each answer is merged
//! into the onboarding record as soon as it is given; the mastery checklist
//! only moves when the thank-you page is reached.

use crate::mastery::{MasteryRecord, MasteryStep, MasteryStore};
use crate::onboarding::{
    Experience, OnboardingRecord, OnboardingStore, ProductCategory, Role, TargetIndustry, UseCase,
};
use crate::reminder::{SkipReminder, SkipReminderStore};
use crate::{Error, Result};

/// Number of question pages.
pub const QUESTION_STEPS: u8 = 5;

/// A page of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OnboardingStep {
    /// "What is your role?"
    Role,
    /// "What will you use VAIS for?"
    UseCase,
    /// "How experienced are you?"
    Experience,
    /// "Which industry do you target?"
    Industry,
    /// "What do you sell?"
    Category,
    /// Final page.
    ThankYou,
}

impl OnboardingStep {
    /// Pages in order.
    pub const ALL: [OnboardingStep; 6] = [
        OnboardingStep::Role,
        OnboardingStep::UseCase,
        OnboardingStep::Experience,
        OnboardingStep::Industry,
        OnboardingStep::Category,
        OnboardingStep::ThankYou,
    ];

    /// Client route of the page.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Role => "/onboarding/role",
            Self::UseCase => "/onboarding/use-case",
            Self::Experience => "/onboarding/experience",
            Self::Industry => "/onboarding/industry",
            Self::Category => "/onboarding/category",
            Self::ThankYou => "/onboarding/thank-you",
        }
    }

    /// Page title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Role => "Role",
            Self::UseCase => "Use case",
            Self::Experience => "Experience",
            Self::Industry => "Target industry",
            Self::Category => "Product category",
            Self::ThankYou => "Thank you",
        }
    }

    /// 1-based page number.
    pub fn number(&self) -> u8 {
        match self {
            Self::Role => 1,
            Self::UseCase => 2,
            Self::Experience => 3,
            Self::Industry => 4,
            Self::Category => 5,
            Self::ThankYou => 6,
        }
    }

    /// Whether the page asks a question.
    pub fn is_question(&self) -> bool {
        !matches!(self, Self::ThankYou)
    }

    /// Following page, `None` after the thank-you page.
    pub fn next(&self) -> Option<OnboardingStep> {
        Self::ALL.get(usize::from(self.number())).copied()
    }

    /// Page served at `route`.
    pub fn from_route(route: &str) -> Option<OnboardingStep> {
        Self::ALL.into_iter().find(|step| step.route() == route)
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An answer to one question page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAnswer {
    /// Answer to [`OnboardingStep::Role`].
    Role(Role),
    /// Answer to [`OnboardingStep::UseCase`].
    UseCase(UseCase),
    /// Answer to [`OnboardingStep::Experience`].
    Experience(Experience),
    /// Answer to [`OnboardingStep::Industry`].
    Industry(TargetIndustry),
    /// Answer to [`OnboardingStep::Category`].
    Category(ProductCategory),
}

impl OnboardingAnswer {
    /// Page this answers.
    pub fn step(&self) -> OnboardingStep {
        match self {
            Self::Role(_) => OnboardingStep::Role,
            Self::UseCase(_) => OnboardingStep::UseCase,
            Self::Experience(_) => OnboardingStep::Experience,
            Self::Industry(_) => OnboardingStep::Industry,
            Self::Category(_) => OnboardingStep::Category,
        }
    }

    fn to_patch(self) -> OnboardingRecord {
        let mut patch = OnboardingRecord::default();
        match self {
            Self::Role(v) => patch.role = Some(v),
            Self::UseCase(v) => patch.use_case = Some(v),
            Self::Experience(v) => patch.experience = Some(v),
            Self::Industry(v) => patch.target_industry = Some(v),
            Self::Category(v) => patch.product_category = Some(v),
        }
        patch
    }
}

/// Drives the questionnaire over the onboarding, mastery and reminder stores.
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    onboarding: OnboardingStore,
    mastery: MasteryStore,
    reminder: SkipReminderStore,
}

impl OnboardingFlow {
    /// Create a flow over existing stores.
    pub fn new(
        onboarding: OnboardingStore,
        mastery: MasteryStore,
        reminder: SkipReminderStore,
    ) -> Self {
        Self {
            onboarding,
            mastery,
            reminder,
        }
    }

    /// Merge a single answer into the onboarding record.
    ///
    /// Returns the page to show next. The mastery record is not touched.
    pub fn answer(&self, answer: OnboardingAnswer) -> Result<OnboardingStep> {
        let step = answer.step();
        self.onboarding.save(&answer.to_patch())?;
        tracing::debug!(step = step.route(), "onboarding answer saved");
        Ok(step.next().unwrap_or(OnboardingStep::ThankYou))
    }

    /// First unanswered question, or the thank-you page when all are answered.
    pub fn current_step(&self) -> OnboardingStep {
        let record = self.onboarding.get();
        let answered = [
            record.role.is_some(),
            record.use_case.is_some(),
            record.experience.is_some(),
            record.target_industry.is_some(),
            record.product_category.is_some(),
        ];
        answered
            .iter()
            .position(|done| !done)
            .and_then(|i| OnboardingStep::ALL.get(i).copied())
            .unwrap_or(OnboardingStep::ThankYou)
    }

    /// Leave the questionnaire at `step`, recording a reminder to come back.
    pub fn skip(&self, step: OnboardingStep) -> Result<SkipReminder> {
        if !step.is_question() {
            return Err(Error::NotSkippable { step: step.route() });
        }
        let reminder = SkipReminder::new(step.route(), step.label(), step.number(), QUESTION_STEPS);
        self.reminder.save(&reminder)?;
        tracing::info!(step = step.route(), "onboarding skipped");
        Ok(reminder)
    }

    /// Page to return to, clearing any pending reminder.
    pub fn resume(&self) -> Result<OnboardingStep> {
        let target = self
            .reminder
            .get()
            .and_then(|r| OnboardingStep::from_route(&r.step_route))
            .unwrap_or_else(|| self.current_step());
        self.reminder.clear()?;
        Ok(target)
    }

    /// Reach the thank-you page: mark onboarding complete and drop the reminder.
    pub fn complete(&self) -> Result<MasteryRecord> {
        let record = self
            .mastery
            .mark_step_completed(MasteryStep::OnboardingCompleted)?;
        self.reminder.clear()?;
        tracing::info!(percentage = record.percentage(), "onboarding completed");
        Ok(record)
    }
}
