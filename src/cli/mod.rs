pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, SortKey, SortOrder};
pub(crate) use commands::Commands;
