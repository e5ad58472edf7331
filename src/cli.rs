// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `graphsum`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "graphsum",
    version,
    about = "Sum the node values of a graph by traversing it on a pool of worker threads.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the graph input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Optional run configuration (TOML).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (overrides `[pool].threads`).
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Seed only this node as a root task. May be repeated.
    ///
    /// Every node must be reachable from the given roots.
    #[arg(long = "root", value_name = "ID")]
    pub roots: Vec<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRAPHSUM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate the graph, print a summary, but don't traverse it.
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

/// Parse arguments, mapping usage errors to exit status 1.
///
/// `--help` and `--version` still exit with status 0.
pub fn parse() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}
