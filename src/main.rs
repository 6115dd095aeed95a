mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.source {
        tracing::debug!(path = %path.display(), "Loaded config");
    }

    if let Err(e) = app::run(&cli) {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
