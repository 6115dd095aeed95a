//! Trailing-week aggregation

use std::collections::HashMap;

use crate::consts::WEEK_MS;
use crate::core::types::{Session, SubjectStats, WeeklySummary};

/// Lower (exclusive) bound of the weekly window ending at `now_ms`
pub(crate) fn week_cutoff(now_ms: i64) -> i64 {
    now_ms.saturating_sub(WEEK_MS)
}

/// Total duration per subject for sessions ending strictly after
/// `now_ms - 7 days`. Subjects with no qualifying session are absent.
pub(crate) fn summarize(sessions: &[Session], now_ms: i64) -> WeeklySummary {
    let cutoff = week_cutoff(now_ms);
    let mut totals: WeeklySummary = HashMap::new();

    for session in sessions.iter().filter(|s| s.timestamp_ms > cutoff) {
        let total = totals.entry(session.subject.clone()).or_default();
        *total = total.saturating_add(session.duration_ms);
    }

    totals
}

/// Same window as [`summarize`], also counting sessions per subject
pub(crate) fn summarize_stats(sessions: &[Session], now_ms: i64) -> HashMap<String, SubjectStats> {
    let cutoff = week_cutoff(now_ms);
    let mut stats: HashMap<String, SubjectStats> = HashMap::new();

    for session in sessions.iter().filter(|s| s.timestamp_ms > cutoff) {
        stats
            .entry(session.subject.clone())
            .or_default()
            .add(session.duration_ms);
    }

    stats
}
