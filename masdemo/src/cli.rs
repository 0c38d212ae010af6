//! Command-line interface definition and parsing.
//!
//! This module defines the command-line arguments accepted by the application
//! and provides parsing functionality using the clap crate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the assessment dashboard demo.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The course the exercise belongs to.
    #[arg(long, env = "APP_COURSE")]
    pub course: u64,

    /// The modeling exercise to open the dashboard for.
    #[arg(long, env = "APP_EXERCISE")]
    pub exercise: u64,

    /// The id of the logged-in tutor.
    #[arg(short, long, env = "APP_USER")]
    pub user: u64,

    /// Seed for choosing among optimal submissions. Random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Answer every confirmation with "yes".
    #[arg(short, long)]
    pub yes: bool,

    /// What to do with the dashboard.
    #[command(subcommand)]
    pub command: Commands,
}

/// The dashboard operations available from the command line.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the optimal and remaining submissions of the exercise
    Show,
    /// Pick the next optimal submission to assess
    AssessNext,
    /// Cancel a started assessment
    Cancel {
        /// The submission whose assessment to cancel
        submission: u64,
    },
    /// Reset the optimality tracking of the exercise and show the new selection
    ResetOptimality,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// This method parses the command-line arguments according to the defined
    /// structure, including validation and help text generation.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
