// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `deptree`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "deptree",
    version,
    about = "Track tasks and the tasks they depend on.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML).
    #[arg(long, global = true, value_name = "PATH", default_value = "deptree.toml")]
    pub file: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEPTREE_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write a starter task file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Show tasks grouped by level, with a progress summary.
    List,
    /// Add a task.
    Add {
        title: String,
        /// Id of a task that must be completed first (repeatable).
        #[arg(long = "after", value_name = "ID")]
        after: Vec<String>,
        /// Estimated effort in hours.
        #[arg(long, value_name = "N")]
        hours: Option<u32>,
    },
    /// Mark a task completed, or reopen a completed one.
    Toggle { id: String },
    /// Change a task's title.
    Rename { id: String, title: String },
    /// Show the next available tasks.
    Next,
    /// Validate the task file without changing it.
    Check,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
