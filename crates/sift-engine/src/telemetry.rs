//! Tracing setup — structured logging for hosting sift in a service.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `SIFT_LOG` environment variable for filtering; defaults to
/// `info` when unset. A subscriber can only be installed once per process,
/// so repeated calls (or a host that already installed its own) are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}

/// Initialize tracing with a custom filter string (for testing or
/// embedding). No-op once a subscriber is installed.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}
