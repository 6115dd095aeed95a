//! Weekly summary rendering: table, plain lines, JSON

use comfy_table::Color;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Write;

use crate::cli::{SortKey, SortOrder};
use crate::core::{SubjectStats, WeeklySummary, format_elapsed};
use crate::output::format::{
    create_styled_table, format_hours, header_cell, hours_json, right_cell, styled_cell,
};

/// One subject's line in the weekly report
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryRow {
    pub(crate) subject: String,
    pub(crate) total_ms: u64,
    pub(crate) sessions: u64,
}

fn compare(a: (&str, u64), b: (&str, u64), key: SortKey, order: SortOrder) -> Ordering {
    let primary = match key {
        SortKey::Subject => a.0.cmp(b.0),
        SortKey::Total => a.1.cmp(&b.1),
    };
    let primary = match order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    primary.then_with(|| a.0.cmp(b.0))
}

/// Turn aggregated stats into display rows in the requested order
pub(crate) fn summary_rows(
    stats: HashMap<String, SubjectStats>,
    key: SortKey,
    order: SortOrder,
) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = stats
        .into_iter()
        .map(|(subject, s)| SummaryRow {
            subject,
            total_ms: s.total_ms,
            sessions: s.count,
        })
        .collect();
    rows.sort_by(|a, b| {
        compare(
            (a.subject.as_str(), a.total_ms),
            (b.subject.as_str(), b.total_ms),
            key,
            order,
        )
    });
    rows
}

/// `Math: 1.50 hrs this week`, one line per subject
pub(crate) fn summary_plain(summary: &WeeklySummary, key: SortKey, order: SortOrder) -> String {
    let mut entries: Vec<(&String, &u64)> = summary.iter().collect();
    entries.sort_by(|a, b| compare((a.0.as_str(), *a.1), (b.0.as_str(), *b.1), key, order));

    let mut out = String::new();
    for (subject, total) in entries {
        let _ = writeln!(out, "{subject}: {} hrs this week", format_hours(*total));
    }
    out
}

fn totals(rows: &[SummaryRow]) -> (u64, u64) {
    rows.iter().fold((0u64, 0u64), |(ms, count), row| {
        (ms.saturating_add(row.total_ms), count.saturating_add(row.sessions))
    })
}

pub(crate) fn render_summary_table(rows: &[SummaryRow], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Subject", use_color),
        header_cell("Hours", use_color),
        header_cell("Time", use_color),
        header_cell("Sessions", use_color),
    ]);

    let accent = use_color.then_some(Color::Green);
    let (total_ms, total_sessions) = totals(rows);
    for row in rows {
        table.add_row(vec![
            styled_cell(&row.subject, None, false),
            right_cell(&format_hours(row.total_ms), accent, false),
            right_cell(&format_elapsed(row.total_ms), None, false),
            right_cell(&row.sessions.to_string(), None, false),
        ]);
    }

    if rows.len() > 1 {
        let total_color = use_color.then_some(Color::Yellow);
        table.add_row(vec![
            styled_cell("Total", total_color, true),
            right_cell(&format_hours(total_ms), total_color, true),
            right_cell(&format_elapsed(total_ms), total_color, true),
            right_cell(&total_sessions.to_string(), total_color, true),
        ]);
    }

    format!("\n  This Week's Summary\n\n{table}\n")
}

pub(crate) fn output_summary_json(rows: &[SummaryRow], since_ms: i64, until_ms: i64) -> String {
    let subjects: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "subject": row.subject,
                "total_ms": row.total_ms,
                "hours": hours_json(row.total_ms),
                "sessions": row.sessions,
            })
        })
        .collect();
    let (total_ms, _) = totals(rows);

    let output = serde_json::json!({
        "since_ms": since_ms,
        "until_ms": until_ms,
        "subjects": subjects,
        "total_ms": total_ms,
        "total_hours": hours_json(total_ms),
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
