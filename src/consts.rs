/// Field delimiter of the session log: `subject,duration_ms,timestamp_ms`
pub(crate) const DELIMITER: char = ',';

/// Number of fields in one session log line
pub(crate) const FIELD_COUNT: usize = 3;

/// Length of the trailing summary window: 7 days in milliseconds
pub(crate) const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Log file name used when no path is configured
pub(crate) const SESSIONS_FILE: &str = "sessions.txt";

/// Running-timer state file, stored next to the session log
pub(crate) const TIMER_FILE: &str = "timer.json";

/// Session end time display format: "Oct 16, 2026 14:05"
pub(crate) const ENDED_FORMAT: &str = "%b %d, %Y %H:%M";
