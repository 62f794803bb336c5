//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset. Per-request traces from the
/// HTTP layer sit at `debug`, so the default keeps them quiet.
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
