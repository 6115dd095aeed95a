mod format;
mod sessions;
mod summary;

pub(crate) use sessions::{
    output_sessions_json, recent_sessions, render_sessions_table, sessions_plain,
};
pub(crate) use summary::{
    output_summary_json, render_summary_table, summary_plain, summary_rows,
};
