//! Tracing/logging initialization.
//!
//! The degradation paths (money/date leniency, quote fallback) emit
//! `tracing` events; this is the subscriber end. Embedding applications
//! call [`init`] once at startup; tests call it freely.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Initialize the process-wide subscriber: JSON lines, no target field,
/// level via `RUST_LOG` with an `info` fallback.
///
/// Safe to call multiple times; only the first call installs a
/// subscriber.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], with an explicit fallback filter for embedders that
/// want a different floor (e.g. `"debug"` to see leniency degradations).
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
