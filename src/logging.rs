//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "esg_forecast=info";

/// Install the global `tracing` subscriber (stderr, `RUST_LOG`-driven).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
