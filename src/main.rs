//! buildtask: compile the current source tree into `app`
//!
//! `buildtask` (or `buildtask build`) runs the build task. Configuration comes
//! from `buildtask.toml` in the current directory plus a few environment
//! overrides.

use anyhow::{Context, Result};
use buildtask::{BuildConfig, BuildTask};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// Named tasks and their one-line descriptions.
const TASKS: &[(&str, &str)] = &[("build", "Compile the current source tree into `app`")];

#[derive(Parser)]
#[command(name = "buildtask")]
#[command(bin_name = "buildtask")]
#[command(about = "Compile the current source tree into an `app` executable", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file to use instead of ./buildtask.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Toolchain program to invoke (overrides the config file)
    #[arg(long, global = true, env = "BUILDTASK_TOOLCHAIN", hide = true)]
    toolchain: Option<String>,

    /// Show the toolchain's own output instead of discarding it
    #[arg(
        long,
        global = true,
        env = "BUILDTASK_FORWARD_DIAGNOSTICS",
        value_parser = clap::builder::BoolishValueParser::new(),
        hide = true
    )]
    forward_diagnostics: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the executable (default task)
    Build,

    /// List available tasks
    Tasks,
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    buildtask::logging::init_logging();

    // When called as `cargo buildtask`, cargo passes "buildtask" as the first argument
    let mut args = std::env::args();
    let cli = if args.nth(1).as_deref() == Some("buildtask") {
        let args_vec: Vec<String> = std::env::args()
            .enumerate()
            .filter_map(|(i, arg)| if i != 1 { Some(arg) } else { None })
            .collect();
        Cli::parse_from(args_vec)
    } else {
        Cli::parse()
    };

    execute(cli)
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command.as_ref().unwrap_or(&Commands::Build) {
        Commands::Build => {
            let config = load_config(&cli)?;
            let task = BuildTask::from_config(config);
            task.run()?;
            println!(
                "{} Built {}",
                "✓".green(),
                task.artifact_path().display().to_string().bright_white()
            );
        },
        Commands::Tasks => {
            for (name, description) in TASKS {
                println!("  {:<8} {}", name.bright_cyan(), description);
            }
        },
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<BuildConfig> {
    let mut config = match &cli.config {
        Some(path) => BuildConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            BuildConfig::load(&cwd).context("Failed to load buildtask.toml")?
        },
    };

    if let Some(toolchain) = &cli.toolchain {
        config.toolchain = toolchain.clone();
    }
    if cli.forward_diagnostics {
        config.forward_diagnostics = true;
    }

    config.validate().context("Invalid build configuration")?;
    Ok(config)
}
