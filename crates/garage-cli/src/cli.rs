//! CLI definition using clap

use clap::{Parser, Subcommand};
use garage_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garage")]
#[command(version)]
#[command(about = "Single-lane parking garage where blocked cars circle out and back in")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Number of spaces in the lane. Uses config value if not specified.
    #[arg(long, short = 'c', global = true)]
    pub capacity: Option<usize>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session reading commands from stdin
    Shell,

    /// Replay a script of commands in one session
    Run {
        /// Path to script file, one command per line
        script: PathBuf,

        /// Exit with an error if any command was rejected
        #[arg(long)]
        strict: bool,
    },

    /// Print random plate numbers
    Plate {
        /// How many plates to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set lane capacity
        #[arg(long)]
        set_capacity: Option<usize>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Print the move-by-move plan after departures (true/false)
        #[arg(long)]
        set_show_moves: Option<bool>,

        /// Seed random plates for reproducible sessions
        #[arg(long)]
        set_plate_seed: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
