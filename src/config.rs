//! Build task configuration
//!
//! Reads an optional `buildtask.toml` from the project directory. Every field
//! has a default, and the defaults reproduce the plain `go build -o app`
//! invocation, so an absent file is the common case.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the project directory.
pub const CONFIG_FILE: &str = "buildtask.toml";

/// Toolchain program invoked when none is configured.
pub const DEFAULT_TOOLCHAIN: &str = "go";

/// Artifact name produced when none is configured.
pub const DEFAULT_OUTPUT: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Toolchain program, resolved through `PATH` unless it contains a separator.
    pub toolchain: String,

    /// File name of the artifact written into the working directory.
    pub output: String,

    /// Directory the toolchain runs in. `None` means the process cwd.
    pub working_dir: Option<PathBuf>,

    /// Let the toolchain write to the caller's stdout/stderr instead of
    /// discarding its output.
    pub forward_diagnostics: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            toolchain: DEFAULT_TOOLCHAIN.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            working_dir: None,
            forward_diagnostics: false,
        }
    }
}

impl BuildConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `buildtask.toml` from `dir`, falling back to defaults if it is absent.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);

        if !path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }

        Self::load_file(&path)
    }

    /// Load a config from an explicit file path. The file must exist.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.display().to_string(),
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    /// Check that the values describe a runnable build.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toolchain.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "toolchain must not be empty".to_string(),
            });
        }

        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "output must not be empty".to_string(),
            });
        }

        // The artifact always lands in the working directory.
        let bare = Path::new(&self.output).file_name().and_then(|n| n.to_str());
        if bare != Some(self.output.as_str()) || self.output.contains(['/', '\\']) {
            return Err(ConfigError::Validation {
                message: format!("output '{}' must be a plain file name", self.output),
            });
        }

        Ok(())
    }

    /// Directory the toolchain runs in.
    pub fn resolved_working_dir(&self) -> PathBuf {
        self.working_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
