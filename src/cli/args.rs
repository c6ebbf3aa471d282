use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "habitual", version, about = "A terminal companion for habit streaks and completion analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show streaks and completion rate for each habit
    Stats {
        /// History snapshot file (defaults to the configured data path)
        file: Option<PathBuf>,
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
        /// Include archived habits
        #[arg(long)]
        all: bool,
    },
    /// Print a JSON stats report to stdout
    Export {
        /// History snapshot file (defaults to the configured data path)
        file: Option<PathBuf>,
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
        /// Include archived habits
        #[arg(long)]
        all: bool,
    },
    /// Check a history snapshot for data problems
    Check {
        /// History snapshot file (defaults to the configured data path)
        file: Option<PathBuf>,
        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
    },
}
