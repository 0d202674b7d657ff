//! Diagnostic tracing for the console programs.
//!
//! Experiment results go to stdout.  Tracing goes to stderr and is controlled
//! with `RUST_LOG`, so it never mixes into a report that is being piped
//! somewhere as JSON or YAML.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`.  Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=probsim=debug cargo run --bin monty-hall -- --mode simulation
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only if a global subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
