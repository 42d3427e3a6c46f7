use std::io::Write;

use anyhow::Context;
use serde::de::DeserializeOwned;
use vais_state::onboarding::{Experience, ProductCategory, Role, TargetIndustry, UseCase};
use vais_state::{MasteryRecord, MasteryStep, OnboardingAnswer, Stores, TrialFeature, UiFlag};

use crate::cli::{FlagArg, FlagsCommand, OnboardingCommand, ProgressCommand, Question, TrialCommand};

fn parse_option<T: DeserializeOwned>(question: Question, value: &str) -> anyhow::Result<T> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_string()))
        .with_context(|| format!("'{value}' is not an option for {question:?}"))
}

fn to_answer(question: Question, value: &str) -> anyhow::Result<OnboardingAnswer> {
    Ok(match question {
        Question::Role => OnboardingAnswer::Role(parse_option::<Role>(question, value)?),
        Question::UseCase => OnboardingAnswer::UseCase(parse_option::<UseCase>(question, value)?),
        Question::Experience => {
            OnboardingAnswer::Experience(parse_option::<Experience>(question, value)?)
        }
        Question::Industry => {
            OnboardingAnswer::Industry(parse_option::<TargetIndustry>(question, value)?)
        }
        Question::Category => {
            OnboardingAnswer::Category(parse_option::<ProductCategory>(question, value)?)
        }
    })
}

/// `vais onboarding ...`
pub fn run_onboarding(
    stores: &Stores,
    command: &OnboardingCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let flow = stores.onboarding_flow();
    match command {
        OnboardingCommand::Status => {
            let record = stores.onboarding.get();
            for (question, answer) in record.summary() {
                writeln!(out, "{question:<18} {answer}")?;
            }
            writeln!(out, "Current step: {}", flow.current_step().route())?;
            if let Some(reminder) = stores.reminder.get() {
                writeln!(
                    out,
                    "Paused at {} ({})",
                    reminder.step_label,
                    reminder.progress_label()
                )?;
            }
        }
        OnboardingCommand::Answer { question, value } => {
            let next = flow.answer(to_answer(*question, value)?)?;
            writeln!(out, "Saved. Next: {}", next.route())?;
        }
        OnboardingCommand::Skip { step } => {
            let reminder = flow.skip(*step)?;
            writeln!(
                out,
                "Skipped {} ({}). Resume at {}",
                reminder.step_label,
                reminder.progress_label(),
                reminder.step_route
            )?;
        }
        OnboardingCommand::Resume => {
            writeln!(out, "{}", flow.resume()?.route())?;
        }
        OnboardingCommand::Complete => {
            let record = flow.complete()?;
            writeln!(out, "Onboarding complete. Mastery {}%", record.percentage())?;
        }
    }
    Ok(())
}

fn write_checklist(record: &MasteryRecord, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Mastery {}%", record.percentage())?;
    writeln!(out, "[x] Sign up")?;
    for step in MasteryStep::ALL {
        let mark = if record.is_completed(step) { "x" } else { " " };
        writeln!(out, "[{mark}] {}", step.label())?;
    }
    if record.dismissed {
        writeln!(out, "(hidden)")?;
    }
    Ok(())
}

/// `vais progress ...`
pub fn run_progress(
    stores: &Stores,
    command: &ProgressCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let record = match command {
        ProgressCommand::Show => stores.mastery.get(),
        ProgressCommand::Mark { step } => stores.mastery.mark_step_completed(*step)?,
        ProgressCommand::Dismiss => stores.mastery.set_dismissed(true)?,
        ProgressCommand::Restore => stores.mastery.set_dismissed(false)?,
        ProgressCommand::Reset => {
            stores.mastery.clear()?;
            MasteryRecord::default()
        }
    };
    write_checklist(&record, out)
}

/// `vais trial ...`
pub fn run_trial(stores: &Stores, command: &TrialCommand, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        TrialCommand::Show => {}
        TrialCommand::Use { feature } => {
            let feature = TrialFeature::from(*feature);
            match stores.trial.increment(feature)? {
                Some(used) => writeln!(out, "{}: {used} used", feature.key())?,
                None => writeln!(out, "{}: trial limit reached", feature.key())?,
            }
        }
        TrialCommand::Reset => stores.trial.reset()?,
    }

    let usage = stores.trial.get();
    let limits = stores.trial.limits();
    for feature in TrialFeature::ALL {
        writeln!(
            out,
            "{:<18} {}/{}",
            feature.key(),
            usage.used(feature),
            limits.limit(feature)
        )?;
    }
    Ok(())
}

/// `vais flags ...`
pub fn run_flags(stores: &Stores, command: &FlagsCommand, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        FlagsCommand::List => {}
        FlagsCommand::Set { flag } => stores.flags.set(UiFlag::from(*flag), true)?,
        FlagsCommand::Clear { flag } => stores.flags.clear(UiFlag::from(*flag))?,
    }
    for flag in FlagArg::ALL {
        let ui = UiFlag::from(flag);
        writeln!(out, "{:<40} {}", ui.key(), stores.flags.is_set(ui))?;
    }
    Ok(())
}
