//! Core data types
//!
//! A session record is the only persisted entity; summaries are derived.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One completed study interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Session {
    pub(crate) subject: String,
    /// Elapsed milliseconds
    pub(crate) duration_ms: u64,
    /// Epoch milliseconds at which the session ended
    pub(crate) timestamp_ms: i64,
}

impl Session {
    pub(crate) fn new(subject: impl Into<String>, duration_ms: u64, timestamp_ms: i64) -> Self {
        Self {
            subject: subject.into(),
            duration_ms,
            timestamp_ms,
        }
    }

    /// Duration rounded to whole minutes
    pub(crate) fn minutes(&self) -> u64 {
        self.duration_ms / 60_000 + u64::from(self.duration_ms % 60_000 >= 30_000)
    }
}

/// Subject -> accumulated milliseconds over the trailing week
pub(crate) type WeeklySummary = HashMap<String, u64>;

/// Per-subject totals with session counts, used for display
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SubjectStats {
    pub(crate) total_ms: u64,
    pub(crate) count: u64,
}

impl SubjectStats {
    pub(crate) fn add(&mut self, duration_ms: u64) {
        self.total_ms = self.total_ms.saturating_add(duration_ms);
        self.count = self.count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_rounds_half_up() {
        assert_eq!(Session::new("Math", 0, 0).minutes(), 0);
        assert_eq!(Session::new("Math", 29_999, 0).minutes(), 0);
        assert_eq!(Session::new("Math", 30_000, 0).minutes(), 1);
        assert_eq!(Session::new("Math", 600_000, 0).minutes(), 10);
    }

    #[test]
    fn minutes_near_max_duration() {
        assert_eq!(
            Session::new("Math", u64::MAX - 10, 0).minutes(),
            u64::MAX / 60_000 + 1
        );
    }

    #[test]
    fn subject_stats_add_counts_sessions() {
        let mut stats = SubjectStats::default();
        stats.add(1_000);
        stats.add(2_000);
        assert_eq!(stats.total_ms, 3_000);
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn subject_stats_add_saturates() {
        let mut stats = SubjectStats::default();
        stats.add(u64::MAX - 5);
        stats.add(100);
        assert_eq!(stats.total_ms, u64::MAX);
        assert_eq!(stats.count, 2);
    }
}
