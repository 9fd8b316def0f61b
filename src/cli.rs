// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dofile`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dofile",
    version,
    about = "Run a source file the way its first line (or its extension) says.",
    long_about = None
)]
pub struct CliArgs {
    /// The file to run.
    ///
    /// Optional at the clap level so a missing file is reported by `dofile`
    /// itself with exit code 1.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path to a config file (TOML).
    ///
    /// If omitted, `DOFILE_CONFIG` or `<config dir>/dofile/config.toml` is
    /// used when present; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DOFILE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print what would be run, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
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
