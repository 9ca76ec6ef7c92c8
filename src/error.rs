//! Error types for the build task.
//!
//! [`BuildError`] is the single "build invocation failed" condition surfaced by
//! [`crate::BuildTask`]. [`ConfigError`] covers loading and validating
//! [`crate::BuildConfig`] before any build is attempted.

use std::process::ExitStatus;

/// The build invocation failed.
///
/// Callers treat this as one kind of failure. The variants only record which
/// underlying information is available: the spawn error, or the child's exit
/// status.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The toolchain could not be started (not on `PATH`, not executable, ...).
    #[error("build failed: could not run `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The toolchain ran but did not exit successfully.
    #[error("build failed: `{program}` {status}")]
    Exited { program: String, status: ExitStatus },
}

impl BuildError {
    /// The toolchain program that was invoked.
    pub fn program(&self) -> &str {
        match self {
            Self::Spawn { program, .. } | Self::Exited { program, .. } => program,
        }
    }

    /// Exit code of the toolchain, if it ran and exited normally.
    ///
    /// `None` when the process could not be started or was killed by a signal.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Spawn { .. } => None,
            Self::Exited { status, .. } => status.code(),
        }
    }
}

/// Errors that occur while loading or validating the build configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file contains invalid TOML or does not match the schema.
    #[error("Failed to parse config TOML: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// The config file exists but could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        source: std::io::Error,
        path: String,
    },

    /// The config parsed but holds values the task cannot use.
    #[error("Config validation error: {message}")]
    Validation { message: String },
}
