//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --dataset) are inherited by all subcommands
//! - Running without a subcommand opens the interactive session on a terminal
//!   and prints the ledger otherwise

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// hwmgr - project membership and shared hardware checkout
#[derive(Parser, Debug)]
#[command(name = "hwmgr")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'hwmgr' without arguments for an interactive session.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Seed dataset file (.toml or .json) instead of the built-in one
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show projects, hardware sets and availability
    Show {
        /// Only show this project
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Apply a script of actions (one per line) and show the result
    Apply {
        /// Script file, or '-' for stdin
        script: PathBuf,

        /// Stop at the first blocked action
        #[arg(long)]
        strict: bool,
    },

    /// Interactive session: join projects and move hardware
    Interactive,
}
