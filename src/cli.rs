// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dagforge`.
///
/// Every generator/output flag is optional; unset flags fall back to the
/// config file, then to built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "dagforge",
    version,
    about = "Generate random task DAGs with single source/sink nodes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML).
    ///
    /// Default: `Dagforge.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of vertices before the dummy source/sink are added.
    #[arg(short = 'n', long, value_name = "N")]
    pub vertices: Option<usize>,

    /// Edge probability in [0, 1].
    #[arg(short = 'p', long, value_name = "P")]
    pub probability: Option<f64>,

    /// RNG seed; makes the run reproducible.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Where to write the text report.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Where to write the PNG rendering.
    #[arg(short = 'i', long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGFORGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the parameters, but don't generate anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
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
