// file: src/cli/args.rs
// version: 2.1.0
// guid: f6a8c0e2-4b5d-4f7e-a9c1-3d5f7b9d1e3a

//! Command line argument definitions

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Flags belong before the command; anything after `run <GROUP> <SUBCOMMAND>`
/// goes to hammer untouched
#[derive(Parser, Debug)]
#[command(name = "hammer-dispatch")]
#[command(about = "Forward command-group subcommands to the hammer CLI")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file; defaults to the user and project config files
    #[arg(short, long, env = "HAMMER_DISPATCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Print the hammer command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Run hammer on the server host over ssh
    #[arg(long)]
    pub ssh: bool,

    /// Override the hammer output format
    #[arg(long, value_enum)]
    pub output: Option<OutputArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Forward a subcommand of a command group to hammer
    Run {
        /// Command group, e.g. environment
        group: String,

        /// Subcommand, e.g. list
        subcommand: String,

        /// Arguments passed to hammer verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List command groups and their documented subcommands
    Groups {
        /// Only show this group
        group: Option<String>,

        #[arg(short, long)]
        json: bool,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate settings and report every problem
    Check,
    /// Print the effective settings with secrets masked
    Show,
}

/// Output format argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputArg {
    Base,
    Table,
    Csv,
    Json,
    Yaml,
}

impl From<OutputArg> for OutputFormat {
    fn from(output: OutputArg) -> Self {
        match output {
            OutputArg::Base => OutputFormat::Base,
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Csv => OutputFormat::Csv,
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Yaml => OutputFormat::Yaml,
        }
    }
}
