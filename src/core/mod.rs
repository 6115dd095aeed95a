//! Core module - session model, storage, timing and weekly aggregation

mod aggregator;
mod stopwatch;
mod store;
mod timer;
mod types;

pub(crate) use aggregator::{summarize, summarize_stats, week_cutoff};
pub(crate) use stopwatch::{Stopwatch, format_elapsed, validate_subject};
pub(crate) use store::SessionStore;
pub(crate) use timer::TimerState;
pub(crate) use types::{Session, SubjectStats, WeeklySummary};
