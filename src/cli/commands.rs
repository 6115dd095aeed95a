//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Start timing a study session
    Start {
        /// What you are studying (e.g., Math)
        subject: String,
    },
    /// Stop the running timer and record the session
    Stop,
    /// Show the elapsed time of the running timer
    Status {
        /// Redraw every second until the timer stops
        #[arg(short, long)]
        watch: bool,
    },
    /// List recorded sessions, newest first
    Sessions {
        /// Show at most N sessions
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Show this week's hours per subject (default)
    Summary,
}
