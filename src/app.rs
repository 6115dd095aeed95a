use chrono::Utc;
use std::io::Write;
use std::time::Duration;

use crate::cli::{Cli, Commands};
use crate::consts::TIMER_FILE;
use crate::core::{
    Session, SessionStore, Stopwatch, TimerState, format_elapsed, summarize, summarize_stats,
    validate_subject, week_cutoff,
};
use crate::error::AppError;
use crate::output::{
    output_sessions_json, output_summary_json, recent_sessions, render_sessions_table,
    render_summary_table, sessions_plain, summary_plain, summary_rows,
};
use crate::utils::Timezone;

const WATCH_TICK: Duration = Duration::from_secs(1);

/// Explicit application state shared by every command handler
pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: SessionStore,
    pub(crate) timer: TimerState,
    pub(crate) timezone: Timezone,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli) -> Result<Self, AppError> {
        let store = SessionStore::new(cli.sessions_path());
        let timer = TimerState::new(store.path().with_file_name(TIMER_FILE));
        let timezone = Timezone::parse(cli.timezone.as_deref())?;
        Ok(Self {
            cli,
            store,
            timer,
            timezone,
        })
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Dispatch the parsed command and print its output
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let ctx = CommandContext::new(cli)?;
    tracing::debug!(
        sessions = %ctx.store.path().display(),
        timer = %ctx.timer.path().display(),
        "Resolved storage paths"
    );

    let output = match &cli.command {
        Some(Commands::Start { subject }) => handle_start(&ctx, subject, now_ms())?,
        Some(Commands::Stop) => handle_stop(&ctx, now_ms())?,
        Some(Commands::Status { watch: false }) => handle_status(&ctx, now_ms())?,
        Some(Commands::Status { watch: true }) => {
            watch_status(&ctx)?;
            String::new()
        }
        Some(Commands::Sessions { limit }) => handle_sessions(&ctx, *limit)?,
        Some(Commands::Summary) | None => handle_summary(&ctx, now_ms())?,
    };

    if !output.is_empty() {
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn handle_start(ctx: &CommandContext<'_>, subject: &str, now: i64) -> Result<String, AppError> {
    if let Some(running) = ctx.timer.load()? {
        return Err(AppError::TimerRunning {
            subject: running.subject,
        });
    }

    let stopwatch = Stopwatch::start(subject, now)?;
    ctx.timer.save(&stopwatch)?;
    tracing::debug!(subject = %stopwatch.subject, started_at_ms = now, "Timer started");

    if ctx.cli.json {
        return Ok(serde_json::to_string_pretty(&stopwatch).unwrap_or_default());
    }
    Ok(format!(
        "Started {} at {}\n",
        stopwatch.subject,
        ctx.timezone.format_millis(now, "%H:%M")
    ))
}

fn handle_stop(ctx: &CommandContext<'_>, now: i64) -> Result<String, AppError> {
    let mut stopwatch = ctx.timer.load()?.ok_or(AppError::NoTimer)?;
    // timer.json may have been edited by hand
    stopwatch.subject = validate_subject(&stopwatch.subject)?;

    // Load before touching anything so a bad log leaves the timer running
    let mut sessions = ctx.store.load()?;
    let session = stopwatch.stop(now);
    sessions.push(session.clone());
    ctx.store.append(&sessions)?;
    ctx.timer.clear()?;
    tracing::debug!(
        subject = %session.subject,
        duration_ms = session.duration_ms,
        total_records = sessions.len(),
        "Session recorded"
    );

    if ctx.cli.json {
        return Ok(serde_json::to_string_pretty(&session).unwrap_or_default());
    }

    let mut out = format!(
        "Recorded {}: {} ({} min)\n",
        session.subject,
        format_elapsed(session.duration_ms),
        session.minutes()
    );
    out.push_str(&weekly_report(ctx, &sessions, now));
    Ok(out)
}

fn status_line(stopwatch: &Stopwatch, now: i64) -> String {
    format!(
        "Studying {}: {}",
        stopwatch.subject,
        format_elapsed(stopwatch.elapsed_ms(now))
    )
}

fn handle_status(ctx: &CommandContext<'_>, now: i64) -> Result<String, AppError> {
    let stopwatch = ctx.timer.load()?.ok_or(AppError::NoTimer)?;
    if ctx.cli.json {
        let elapsed_ms = stopwatch.elapsed_ms(now);
        let json = serde_json::json!({
            "subject": stopwatch.subject,
            "started_at_ms": stopwatch.started_at_ms,
            "elapsed_ms": elapsed_ms,
            "elapsed": format_elapsed(elapsed_ms),
        });
        return Ok(serde_json::to_string_pretty(&json).unwrap_or_default());
    }
    Ok(format!("{}\n", status_line(&stopwatch, now)))
}

/// Redraw the elapsed time once per tick until the timer is stopped
fn watch_status(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut stdout = std::io::stdout();
    let mut seen = false;
    loop {
        match ctx.timer.load()? {
            Some(stopwatch) => {
                seen = true;
                write!(stdout, "\r{}", status_line(&stopwatch, now_ms()))
                    .and_then(|()| stdout.flush())
                    .map_err(|source| AppError::Output { source })?;
            }
            None if seen => {
                println!("\nTimer stopped.");
                return Ok(());
            }
            None => return Err(AppError::NoTimer),
        }
        std::thread::sleep(WATCH_TICK);
    }
}

fn handle_sessions(ctx: &CommandContext<'_>, limit: Option<usize>) -> Result<String, AppError> {
    let sessions = ctx.store.load()?;
    let recent = recent_sessions(&sessions, limit);

    if ctx.cli.json {
        return Ok(output_sessions_json(&recent));
    }
    if recent.is_empty() {
        return Ok("No sessions recorded yet.\n".to_string());
    }
    if ctx.cli.plain {
        return Ok(sessions_plain(&recent, ctx.timezone));
    }
    Ok(render_sessions_table(&recent, ctx.timezone, ctx.cli.use_color()))
}

fn handle_summary(ctx: &CommandContext<'_>, now: i64) -> Result<String, AppError> {
    let sessions = ctx.store.load()?;

    if ctx.cli.json {
        let rows = summary_rows(
            summarize_stats(&sessions, now),
            ctx.cli.sort,
            ctx.cli.sort_order(),
        );
        return Ok(output_summary_json(&rows, week_cutoff(now), now));
    }
    Ok(weekly_report(ctx, &sessions, now))
}

fn weekly_report(ctx: &CommandContext<'_>, sessions: &[Session], now: i64) -> String {
    if ctx.cli.plain {
        let summary = summarize(sessions, now);
        if summary.is_empty() {
            return "No study sessions in the last 7 days.\n".to_string();
        }
        return summary_plain(&summary, ctx.cli.sort, ctx.cli.sort_order());
    }

    let rows = summary_rows(
        summarize_stats(sessions, now),
        ctx.cli.sort,
        ctx.cli.sort_order(),
    );
    if rows.is_empty() {
        return "No study sessions in the last 7 days.\n".to_string();
    }
    render_summary_table(&rows, ctx.cli.use_color())
}
