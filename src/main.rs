//! auto-mount - mount an rclone remote and union it with local storage
//! through mergerfs.
//!
//! One idempotent pass per invocation: established mounts are detected
//! in the live process table and never re-launched, so an external
//! scheduler can re-run this binary safely.

mod application;
mod cli;
mod domain;
mod infrastructure;

use clap::Parser;
use colored::Colorize;

use application::Orchestrator;
use cli::Cli;
use domain::{MountConfig, Result, RunOutcome};
use infrastructure::{
    ensure_dir, init_logging, DetachedSpawner, PathLocator, SystemProcessScanner,
};

fn main() {
    let config = Cli::parse().into_config();

    if let Err(e) = run(&config) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic. Both run outcomes (mounts ensured, or no
/// rclone config yet) exit with status 0.
fn run(config: &MountConfig) -> Result<RunOutcome> {
    // The log directory must exist before the sink can open its file.
    ensure_dir(&config.log_path)?;
    let _guard = init_logging(config)?;

    tracing::info!("Auto mergerfs/rclone mount started");

    if let Some(options) = &config.options {
        tracing::debug!(options = %options, "Extra rclone options accepted but not applied");
    }

    if config.test {
        dump_config(config);
    }

    Orchestrator::new(config, SystemProcessScanner, DetachedSpawner, PathLocator).run()
}

/// Print the resolved configuration for inspection in test mode.
fn dump_config(config: &MountConfig) {
    match serde_json::to_string_pretty(config) {
        Ok(dump) => eprintln!("{dump}"),
        Err(error) => tracing::warn!(%error, "Could not serialize configuration"),
    }
}
