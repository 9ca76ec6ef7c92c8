//! # buildtask
//!
//! A single build task: print a status line, run the compiler toolchain to
//! produce an executable named `app` in the working directory, and report
//! whether it worked.
//!
//! ```no_run
//! use buildtask::BuildTask;
//!
//! if let Err(e) = BuildTask::new().run() {
//!     eprintln!("{e}");
//! }
//! ```
//!
//! The toolchain's own output is discarded. Set `forward_diagnostics` in
//! `buildtask.toml` to see compiler errors instead.

pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod task;

pub use config::BuildConfig;
pub use error::{BuildError, ConfigError};
pub use task::BuildTask;

/// Run the default `build` task in the current directory.
pub fn build() -> Result<(), BuildError> {
    BuildTask::new().run()
}
