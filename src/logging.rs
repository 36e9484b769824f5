//! Diagnostic tracing for the command-line front end.
//!
//! Library code only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. The binary installs one here.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact
/// format so it never mixes with command output.
///
/// ```bash
/// RUST_LOG=tplkit=debug tplkit truncate 10 "Hello World"
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
