//! LTI CLI
//!
//! Command-line reports over LTI review meeting snapshots.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use lti_cli::cli::Cli;
use lti_cli::commands;
use lti_cli::config::LtiConfig;
use lti_cli::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LtiConfig::load(cli.config.as_deref())?;
    if !logging::init(&config.logging.level, cli.verbose) {
        eprintln!("warning: a log subscriber was already installed; logging settings ignored");
    }

    tracing::debug!(command = ?cli.command, "starting");
    if let Err(e) = commands::run(&cli, &config) {
        tracing::error!("{e}");
        return Err(e.into());
    }
    Ok(())
}
