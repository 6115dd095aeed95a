//! Persisted running-timer state
//!
//! A CLI invocation does not outlive the start/stop pair, so the running
//! stopwatch lives in a small JSON file next to the session log.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::stopwatch::Stopwatch;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub(crate) struct TimerState {
    path: PathBuf,
}

impl TimerState {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// The running stopwatch, if any
    pub(crate) fn load(&self) -> Result<Option<Stopwatch>, AppError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_reader(file)
            .map(Some)
            .map_err(|source| AppError::TimerFormat {
                path: self.path.clone(),
                source,
            })
    }

    pub(crate) fn save(&self, stopwatch: &Stopwatch) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string(stopwatch).map_err(|source| AppError::TimerFormat {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), subject = %stopwatch.subject, "Saved timer state");
        Ok(())
    }

    /// Remove the timer file. Already absent is fine.
    pub(crate) fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> AppError {
        AppError::TimerState {
            path: self.path.clone(),
            source,
        }
    }
}
