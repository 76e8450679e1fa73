//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: the service at `info`, plus
/// store mutations, which log at `debug` in `stockroom_infra`.
const DEFAULT_FILTER: &str = "info,stockroom_infra=debug";

/// Install the process-wide subscriber.
///
/// JSON logs with timestamps and per-module targets (so the store's
/// `debug` records are distinguishable), filtered via `RUST_LOG`.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
