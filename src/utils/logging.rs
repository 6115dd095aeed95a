use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `--debug` forces debug level, otherwise
/// `RUST_LOG` is honored with a `warn` default so normal output stays clean.
pub(crate) fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("studytime=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
