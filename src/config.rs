//! Configuration management for swapview.
//!
//! The only knob is the path prefix for /proc. It comes from `--prefix` or
//! `SWAPVIEW_PREFIX` and defaults to the real filesystem root.

use crate::cli::{Args, ConfigFormat, LogLevel};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

/// Effective configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prepended verbatim to "/proc"
    pub prefix: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: PathBuf::new(),
            log_level: "warn".into(),
        }
    }
}

impl Config {
    /// Process listing directory, `<prefix>/proc`.
    pub fn proc_root(&self) -> PathBuf {
        let mut root = OsString::from(self.prefix.as_os_str());
        root.push("/proc");
        PathBuf::from(root)
    }
}

/// Resolves configuration from CLI args (and their env fallbacks) over defaults.
pub fn resolve_config(args: &Args) -> Config {
    let log_level = match args.log_level {
        LogLevel::Off => "off",
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    Config {
        prefix: args.prefix.clone().unwrap_or_default(),
        log_level: log_level.into(),
    }
}

/// Renders configuration in the requested format
pub fn render_config(config: &Config, format: &ConfigFormat) -> anyhow::Result<String> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}
