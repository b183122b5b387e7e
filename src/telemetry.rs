//! Tracing Initialization
//!
//! Sets up the tracing subscriber once at application startup. The filter
//! comes from `ROSTER_LOG`, falling back to `RUST_LOG`, then to `info`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Call once, before any tracing occurs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("ROSTER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
