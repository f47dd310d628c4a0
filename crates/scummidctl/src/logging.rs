//! Logging setup for scummidctl
//!
//! Diagnostics go to stderr so stdout stays reserved for progress lines and
//! `parse` output. RUST_LOG takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

/// Level used when RUST_LOG is unset
pub fn effective_level(configured: &str, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else {
        configured
    }
}

pub fn init(configured: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(configured, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
