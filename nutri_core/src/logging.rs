//! Tracing setup for the nutrivision binary and unit tests.
//!
//! Diagnostics go to stderr: stdout carries recommendations and `--json`
//! output that callers may pipe.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when neither RUST_LOG nor `--verbose` is given
pub const QUIET_LEVEL: &str = "warn";

/// Filter used by `--verbose`
pub const VERBOSE_LEVEL: &str = "nutri_core=debug,nutrivision=debug";

/// Initialize logging for the CLI
///
/// `verbose` raises engine and CLI logs to debug; RUST_LOG still wins when set.
pub fn init_for_cli(verbose: bool) {
    init_with_level(if verbose { VERBOSE_LEVEL } else { QUIET_LEVEL })
}

/// Initialize logging with a default filter directive
///
/// RUST_LOG overrides `default_level` when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug logs into the test harness output; safe to call repeatedly
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
