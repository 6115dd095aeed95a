use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("A timer for \"{subject}\" is already running. Stop it first.")]
    TimerRunning { subject: String },

    #[error("No timer is running. Start one with `studytime start <SUBJECT>`.")]
    NoTimer,

    #[error("Failed to access timer state {}: {source}", .path.display())]
    TimerState {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupt timer state {}: {source}", .path.display())]
    TimerFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write output: {source}")]
    Output { source: std::io::Error },

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to access session log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid {field} \"{value}\" on line {line} of the session log")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },
}
