use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter `{filter}` ({err}); falling back to `info`");
        EnvFilter::new("info")
    });

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
