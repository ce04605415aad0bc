//! Command-line arguments.

use clap::{Parser, Subcommand};

/// LTI review reports over a browser store snapshot
#[derive(Parser, Debug)]
#[command(name = "lti")]
#[command(about = "Long-term isolation review reports", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "LTI_CONFIG")]
    pub config: Option<String>,

    /// JSON snapshot of the browser store (overrides `store.path`)
    #[arg(short, long, global = true, env = "LTI_STORE")]
    pub store: Option<String>,

    /// Reference date for age calculations (defaults to the current time)
    #[arg(long, global = true, value_name = "DATE")]
    pub now: Option<String>,

    /// Force debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Report subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dashboard statistics over every complete meeting
    Dashboard {
        /// Include data-quality counters
        #[arg(long)]
        diagnostics: bool,
    },
    /// Isolations sharing a system code
    Related {
        /// Report every isolation instead of one warning per group
        #[arg(long)]
        all: bool,
    },
    /// Removed-isolation history
    History,
    /// Per-meeting executive summaries
    Summary,
    /// Most recent earlier review of one isolation
    Review {
        /// Isolation id
        id: String,
    },
    /// Asset Manager review agenda
    Agenda {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Configuration file management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key, e.g. `ids.prefix`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Destination (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
