use tracing_subscriber::{fmt, EnvFilter};

/// Initialise tracing for a binary.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies (e.g. "warn",
/// "opsdeck_core=debug,warn"). Output goes to stderr so the terminal UI on
/// stdout stays intact. Safe to call more than once — later calls are no-ops.
pub fn init(service_name: &str, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()
        .ok();

    tracing::debug!(service = service_name, "logging initialised");
}
