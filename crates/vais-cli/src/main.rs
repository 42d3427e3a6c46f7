//! VAIS CLI
//!
//! Runs the HTTP server and drives the client-side stores, the email builder
//! and the campaigns table from a terminal.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vais_state::Stores;

use crate::cli::{Args, Command};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,vais=debug".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut stdout = std::io::stdout().lock();
    match &args.command {
        Command::Serve(serve) => commands::run_serve(serve).await?,
        Command::Render(render) => commands::run_render(render, &mut stdout)?,
        Command::Campaigns(campaigns) => commands::run_campaigns(campaigns, &mut stdout)?,
        command => {
            let stores = Stores::new(commands::open_backend(args.data_dir.as_deref())?);
            let _progress = stores.mastery.subscribe(|record| {
                tracing::debug!(percentage = record.percentage(), "mastery updated");
            });
            match command {
                Command::Onboarding(c) => commands::run_onboarding(&stores, c, &mut stdout)?,
                Command::Progress(c) => commands::run_progress(&stores, c, &mut stdout)?,
                Command::Trial(c) => commands::run_trial(&stores, c, &mut stdout)?,
                Command::Flags(c) => commands::run_flags(&stores, c, &mut stdout)?,
                Command::Serve(_) | Command::Render(_) | Command::Campaigns(_) => {}
            }
        }
    }
    Ok(())
}
