//! swapview - per-process swap usage report.
//!
//! Entry point: parses arguments, sets up logging on stderr and prints the
//! report to stdout.

mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use cli::{Args, LogLevel};
use config::{render_config, resolve_config};
use swapview::startup_checks;

/// Initializes tracing on stderr so stdout carries only the report.
fn setup_logging(args: &Args) -> anyhow::Result<()> {
    let log_level = match args.log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    debug!("Logging initialized with level: {:?}", args.log_level);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args);

    if args.show_config {
        println!("{}", render_config(&config, &args.config_format)?);
        return Ok(());
    }

    setup_logging(&args)?;

    let proc_root = config.proc_root();
    info!("Scanning {}", proc_root.display());
    startup_checks::check_requirements(&proc_root);

    let mut stdout = std::io::stdout().lock();
    let total = swapview::run(&proc_root, &mut stdout)
        .with_context(|| format!("cannot report swap usage from {}", proc_root.display()))?;
    debug!("Total swap reported: {} bytes", total);

    Ok(())
}
