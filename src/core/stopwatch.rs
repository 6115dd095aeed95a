//! Stopwatch for a single study session

use serde::{Deserialize, Serialize};

use crate::consts::DELIMITER;
use crate::core::types::Session;
use crate::error::AppError;

/// A running timer: what is being studied and since when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Stopwatch {
    pub(crate) subject: String,
    pub(crate) started_at_ms: i64,
}

impl Stopwatch {
    /// Start timing `subject`. The subject is trimmed and must be non-empty
    /// and free of the log delimiter.
    pub(crate) fn start(subject: &str, now_ms: i64) -> Result<Self, AppError> {
        let subject = validate_subject(subject)?;
        Ok(Self {
            subject,
            started_at_ms: now_ms,
        })
    }

    /// Milliseconds since start, 0 if the clock moved backwards
    pub(crate) fn elapsed_ms(&self, now_ms: i64) -> u64 {
        u64::try_from(now_ms.saturating_sub(self.started_at_ms)).unwrap_or(0)
    }

    /// Finish the session at `now_ms`
    pub(crate) fn stop(self, now_ms: i64) -> Session {
        let duration_ms = self.elapsed_ms(now_ms);
        Session::new(self.subject, duration_ms, now_ms)
    }
}

pub(crate) fn validate_subject(raw: &str) -> Result<String, AppError> {
    let subject = raw.trim();
    if subject.is_empty() {
        return Err(AppError::Validation {
            message: "Please enter a subject!".to_string(),
        });
    }
    if subject.contains(DELIMITER) || subject.contains(['\n', '\r']) {
        return Err(AppError::Validation {
            message: format!("Subject \"{subject}\" must not contain '{DELIMITER}' or line breaks"),
        });
    }
    Ok(subject.to_string())
}

/// Render elapsed milliseconds as `HH:MM:SS`. Hours do not wrap.
pub(crate) fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_elapsed_pads_fields() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(999), "00:00:00");
        assert_eq!(format_elapsed(3_661_000), "01:01:01");
        assert_eq!(format_elapsed(59_999), "00:00:59");
    }

    #[test]
    fn format_elapsed_hours_do_not_wrap() {
        assert_eq!(format_elapsed(360_000_000), "100:00:00");
    }

    #[test]
    fn start_trims_subject() {
        let sw = Stopwatch::start("  Math  ", 10).unwrap();
        assert_eq!(sw.subject, "Math");
        assert_eq!(sw.started_at_ms, 10);
    }

    #[test]
    fn start_rejects_blank_subject() {
        let err = Stopwatch::start("   ", 0).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Please enter a subject!");
    }

    #[test]
    fn start_rejects_delimiter() {
        assert!(matches!(
            Stopwatch::start("Bio,Chem", 0),
            Err(AppError::Validation { .. })
        ));
        assert!(Stopwatch::start("Bio\nChem", 0).is_err());
    }

    #[test]
    fn stop_builds_session_ending_now() {
        let sw = Stopwatch::start("Math", 1_000).unwrap();
        let session = sw.stop(3_662_000);
        assert_eq!(session, Session::new("Math", 3_661_000, 3_662_000));
    }

    #[test]
    fn elapsed_saturates_when_clock_goes_back() {
        let sw = Stopwatch::start("Math", 5_000).unwrap();
        assert_eq!(sw.elapsed_ms(4_000), 0);
    }
}
