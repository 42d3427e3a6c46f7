//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vais_builder::BlockKind;
use vais_dashboard::{CampaignStatus, SortDirection, SortField};
use vais_state::{MasteryStep, OnboardingStep, TrialFeature, UiFlag};

/// VAIS command-line interface
#[derive(Parser, Debug)]
#[command(name = "vais", author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding persisted records; in-memory when omitted
    #[arg(long, global = true, env = "VAIS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the single-page app and the JSON endpoints
    Serve(ServeArgs),
    /// Onboarding questionnaire
    #[command(subcommand)]
    Onboarding(OnboardingCommand),
    /// Mastery checklist
    #[command(subcommand)]
    Progress(ProgressCommand),
    /// Trial usage counters
    #[command(subcommand)]
    Trial(TrialCommand),
    /// UI flags
    #[command(subcommand)]
    Flags(FlagsCommand),
    /// Build an email from templates and render it
    Render(RenderArgs),
    /// Query the campaigns table
    Campaigns(CampaignsArgs),
}

/// `vais serve`
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long, env = "VAIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory of the built single-page app
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Reply of /api/ping
    #[arg(long)]
    pub ping_message: Option<String>,
}

/// `vais onboarding ...`
#[derive(Subcommand, Debug)]
pub enum OnboardingCommand {
    /// Show answers, the current step and any pending reminder
    Status,
    /// Answer one question
    Answer {
        /// Question to answer
        question: Question,
        /// Option id, e.g. `marketing-leader`
        value: String,
    },
    /// Leave the questionnaire at a step
    Skip {
        /// Step being skipped, e.g. `experience`
        #[arg(value_parser = parse_step)]
        step: OnboardingStep,
    },
    /// Print the page to continue at and clear the reminder
    Resume,
    /// Finish the questionnaire
    Complete,
}

/// Onboarding questions.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Role
    Role,
    /// Use case
    UseCase,
    /// Experience level
    Experience,
    /// Target industry
    Industry,
    /// Product category
    Category,
}

/// `vais progress ...`
#[derive(Subcommand, Debug)]
pub enum ProgressCommand {
    /// Show the checklist
    Show,
    /// Mark a step complete, e.g. `vaisResultsGenerated`
    Mark {
        /// Step key
        step: MasteryStep,
    },
    /// Hide the checklist widget
    Dismiss,
    /// Show the checklist widget again
    Restore,
    /// Forget all progress
    Reset,
}

/// `vais trial ...`
#[derive(Subcommand, Debug)]
pub enum TrialCommand {
    /// Show usage against limits
    Show,
    /// Record one use of a feature
    Use {
        /// Feature used
        feature: FeatureArg,
    },
    /// Reset all counters
    Reset,
}

/// Metered trial features.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureArg {
    /// VAIS result generations
    VaisRuns,
    /// Prospect searches
    ProspectSearches,
    /// Downloads
    Downloads,
}

impl From<FeatureArg> for TrialFeature {
    fn from(arg: FeatureArg) -> Self {
        match arg {
            FeatureArg::VaisRuns => TrialFeature::VaisRuns,
            FeatureArg::ProspectSearches => TrialFeature::ProspectSearches,
            FeatureArg::Downloads => TrialFeature::Downloads,
        }
    }
}

/// `vais flags ...`
#[derive(Subcommand, Debug)]
pub enum FlagsCommand {
    /// Show every flag
    List,
    /// Set a flag
    Set {
        /// Flag to set
        flag: FlagArg,
    },
    /// Clear a flag
    Clear {
        /// Flag to clear
        flag: FlagArg,
    },
}

/// Persisted UI flags.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArg {
    /// Getting-started panel seen
    GettingStartedSeen,
    /// Mastery widget dismissed
    MasteryDismissed,
    /// Mastery widget minimized
    MasteryMinimized,
}

impl FlagArg {
    /// Every flag.
    pub const ALL: [FlagArg; 3] = [
        FlagArg::GettingStartedSeen,
        FlagArg::MasteryDismissed,
        FlagArg::MasteryMinimized,
    ];
}

impl From<FlagArg> for UiFlag {
    fn from(arg: FlagArg) -> Self {
        match arg {
            FlagArg::GettingStartedSeen => UiFlag::GettingStartedSeen,
            FlagArg::MasteryDismissed => UiFlag::MasteryDismissed,
            FlagArg::MasteryMinimized => UiFlag::MasteryMinimized,
        }
    }
}

/// `vais render`
#[derive(clap::Args, Debug, Default)]
pub struct RenderArgs {
    /// Start from a saved canvas (JSON)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Append a section template, e.g. `hero`; repeatable
    #[arg(short, long = "section")]
    pub sections: Vec<String>,

    /// Append a single block, e.g. `button`; repeatable
    #[arg(short, long = "block")]
    pub blocks: Vec<BlockKind>,

    /// Annotate blocks for the editor
    #[arg(long)]
    pub edit: bool,

    /// Print the canvas as JSON instead of HTML
    #[arg(long)]
    pub json: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// `vais campaigns`
#[derive(clap::Args, Debug)]
pub struct CampaignsArgs {
    /// Case-insensitive name filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Status filter, e.g. `active`
    #[arg(long)]
    pub status: Option<CampaignStatus>,

    /// Sort column: name, status, created, leads, conversion, budget, spent
    #[arg(long, default_value = "created")]
    pub sort: SortField,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Print summary totals
    #[arg(long)]
    pub stats: bool,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_step(value: &str) -> Result<OnboardingStep, String> {
    OnboardingStep::from_route(&format!("/onboarding/{}", value.trim()))
        .ok_or_else(|| format!("unknown onboarding step: {value}"))
}
