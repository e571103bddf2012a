//! CLI arguments for swapview.
//!
//! This module defines the command-line interface structure using the clap library.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "swapview",
    about = "Show per-process swap usage, sorted by size",
    long_about = "Show per-process swap usage, sorted by size.\n\n\
                  Scans /proc/<pid>/smaps for every process, sums its Swap: lines and \
                  prints one row per swapping process followed by the grand total.",
    version,
    propagate_version = true
)]
pub struct Args {
    /// Prefix prepended to /proc (for reading a fixture tree)
    #[arg(long, env = "SWAPVIEW_PREFIX")]
    pub prefix: Option<PathBuf>,

    /// Log level (logs go to stderr)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print effective config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,
}
