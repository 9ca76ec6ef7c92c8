//! Diagnostic logging setup for the `buildtask` binary.
//!
//! Log output goes to stderr and defaults to `warn`, so a successful build
//! prints nothing beyond the task's status line. Set `RUST_LOG=debug` to see
//! the toolchain command line.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber. Calling it twice is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
