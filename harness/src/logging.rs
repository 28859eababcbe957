//! Subscriber setup for the `tilebot` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to binaries.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber. `RUST_LOG` overrides the default
/// `warn` filter.
///
/// Call once per process; a second call panics inside `tracing-subscriber`.
pub fn init() {
    init_with_default("warn");
}

/// Like [`init`] with a different fallback filter (e.g. `"debug"` for
/// `--verbose`).
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
