//! Shared observability setup for the service binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// Call once from `main` before serving; calling again is a no-op.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;
