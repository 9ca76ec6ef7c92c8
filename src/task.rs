//! The `build` task
//!
//! Prints a status line, then runs `<toolchain> build -o <output>` in the
//! working directory and waits for it. The toolchain's own stdout and stderr
//! are discarded unless [`BuildConfig::forward_diagnostics`] is set.

use crate::config::BuildConfig;
use crate::error::BuildError;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Compiles the current source tree into a single executable.
#[derive(Debug, Clone, Default)]
pub struct BuildTask {
    config: BuildConfig,
}

impl BuildTask {
    /// Task that runs `go build -o app` in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Line printed before the toolchain is launched.
    pub fn status_line(&self) -> String {
        format!(
            "Building {} via {} build",
            self.config.output, self.config.toolchain
        )
    }

    /// Where the artifact is written on success.
    pub fn artifact_path(&self) -> PathBuf {
        self.config.resolved_working_dir().join(&self.config.output)
    }

    /// The toolchain invocation, ready to spawn.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.config.toolchain);
        cmd.args(["build", "-o", &self.config.output])
            .current_dir(self.config.resolved_working_dir())
            .stdin(Stdio::null());

        if self.config.forward_diagnostics {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        cmd
    }

    /// Run the task, printing the status line to stdout.
    pub fn run(&self) -> Result<(), BuildError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_with(&mut handle)
    }

    /// Run the task, printing the status line to `out`.
    ///
    /// The line is flushed before the toolchain starts, whatever the outcome
    /// of the build.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<(), BuildError> {
        if let Err(e) = writeln!(out, "{}", self.status_line()).and_then(|()| out.flush()) {
            warn!("Failed to write status line: {}", e);
        }

        let mut cmd = self.command();
        debug!(
            "Running {} build -o {} in {}",
            self.config.toolchain,
            self.config.output,
            self.config.resolved_working_dir().display()
        );

        let status = cmd.status().map_err(|source| {
            warn!("Could not start {}: {}", self.config.toolchain, source);
            BuildError::Spawn {
                program: self.config.toolchain.clone(),
                source,
            }
        })?;

        if !status.success() {
            warn!("{} build exited with {}", self.config.toolchain, status);
            return Err(BuildError::Exited {
                program: self.config.toolchain.clone(),
                status,
            });
        }

        info!("Built {}", self.artifact_path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_command_line() {
        let task = BuildTask::new();
        let cmd = task.command();

        assert_eq!(cmd.get_program(), "go");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["build", "-o", "app"]);
        assert_eq!(cmd.get_current_dir(), Some(std::path::Path::new(".")));
    }

    #[test]
    fn test_command_uses_configured_values() {
        let task = BuildTask::from_config(BuildConfig {
            toolchain: "tinygo".to_string(),
            output: "firmware".to_string(),
            working_dir: Some(PathBuf::from("/src/project")),
            forward_diagnostics: false,
        });
        let cmd = task.command();

        assert_eq!(cmd.get_program(), "tinygo");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["build", "-o", "firmware"]);
        assert_eq!(
            cmd.get_current_dir(),
            Some(std::path::Path::new("/src/project"))
        );
        assert_eq!(
            task.artifact_path(),
            PathBuf::from("/src/project/firmware")
        );
    }

    #[test]
    fn test_status_line_names_artifact_and_toolchain() {
        assert_eq!(BuildTask::new().status_line(), "Building app via go build");
    }

    #[test]
    fn test_missing_toolchain_fails_after_status_line() {
        let task = BuildTask::from_config(BuildConfig {
            toolchain: "buildtask-no-such-toolchain".to_string(),
            ..BuildConfig::default()
        });
        let mut out = Vec::new();

        let err = task.run_with(&mut out).unwrap_err();

        assert!(matches!(err, BuildError::Spawn { .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Building app via buildtask-no-such-toolchain build\n"
        );
    }
}
