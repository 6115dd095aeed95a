//! Past sessions list, newest first

use std::fmt::Write;

use crate::consts::ENDED_FORMAT;
use crate::core::{Session, format_elapsed};
use crate::output::format::{create_styled_table, header_cell, right_cell, styled_cell};
use crate::utils::Timezone;

/// Newest first, capped at `limit`
pub(crate) fn recent_sessions(sessions: &[Session], limit: Option<usize>) -> Vec<&Session> {
    sessions
        .iter()
        .rev()
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// `Math — 10 min on Jul 22, 2023 04:26`
pub(crate) fn describe_session(session: &Session, timezone: Timezone) -> String {
    format!(
        "{} — {} min on {}",
        session.subject,
        session.minutes(),
        timezone.format_millis(session.timestamp_ms, ENDED_FORMAT)
    )
}

pub(crate) fn sessions_plain(sessions: &[&Session], timezone: Timezone) -> String {
    let mut out = String::new();
    for session in sessions {
        let _ = writeln!(out, "{}", describe_session(session, timezone));
    }
    out
}

pub(crate) fn render_sessions_table(
    sessions: &[&Session],
    timezone: Timezone,
    use_color: bool,
) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Subject", use_color),
        header_cell("Duration", use_color),
        header_cell("Minutes", use_color),
        header_cell("Ended", use_color),
    ]);

    for session in sessions {
        table.add_row(vec![
            styled_cell(&session.subject, None, false),
            right_cell(&format_elapsed(session.duration_ms), None, false),
            right_cell(&session.minutes().to_string(), None, false),
            styled_cell(
                &timezone.format_millis(session.timestamp_ms, ENDED_FORMAT),
                None,
                false,
            ),
        ]);
    }

    format!("\n  Past Sessions\n\n{table}\n")
}

pub(crate) fn output_sessions_json(sessions: &[&Session]) -> String {
    serde_json::to_string_pretty(sessions).unwrap_or_else(|_| "[]".to_string())
}
