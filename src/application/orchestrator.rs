//! The linear mount orchestration sequence.
//!
//! One pass: ensure directories, locate tools, validate the rclone
//! config, then detect-launch-confirm each of the two mounts. Every
//! mount decision re-queries the live process table; nothing is cached
//! between steps, so repeated runs are idempotent.

use std::thread;
use std::time::Duration;

use crate::domain::{MountConfig, Result, RunOutcome};
use crate::infrastructure::{ensure_dir, ProcessScanner, Spawner, ToolLocator, MERGERFS, RCLONE};

use super::mounts::MountPlan;

/// Wait between launching a mount process and re-checking the process
/// table for it.
const SETTLE_INTERVAL: Duration = Duration::from_secs(3);

/// Runs the mount sequence against the injected OS seams.
pub struct Orchestrator<'a, S, L, T> {
    config: &'a MountConfig,
    scanner: S,
    spawner: L,
    locator: T,
    settle: Duration,
}

impl<'a, S, L, T> Orchestrator<'a, S, L, T>
where
    S: ProcessScanner,
    L: Spawner,
    T: ToolLocator,
{
    /// Create an orchestrator with the default settle interval.
    pub const fn new(config: &'a MountConfig, scanner: S, spawner: L, locator: T) -> Self {
        Self {
            config,
            scanner,
            spawner,
            locator,
            settle: SETTLE_INTERVAL,
        }
    }

    /// Override the settle interval for scenario tests.
    #[cfg(test)]
    #[must_use]
    pub const fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Execute one full orchestration pass.
    ///
    /// # Errors
    /// Returns error on the fatal tier only: directory creation
    /// failure, missing tool, or a mount command the OS could not
    /// spawn.
    pub fn run(&self) -> Result<RunOutcome> {
        for dir in self.config.mount_dirs() {
            ensure_dir(dir)?;
        }

        let rclone = self.locator.locate(RCLONE)?;
        let mergerfs = self.locator.locate(MERGERFS)?;

        if !self.config.config_file.is_file() {
            tracing::info!(
                path = %self.config.config_file.display(),
                "Rclone config file not found, nothing to do yet"
            );
            return Ok(RunOutcome::Unconfigured);
        }

        self.ensure_mounted(&MountPlan::remote(self.config, rclone))?;
        self.ensure_mounted(&MountPlan::union(self.config, mergerfs))?;

        tracing::info!("Script terminating successfully");
        Ok(RunOutcome::Completed)
    }

    /// Detect, launch and confirm one mount.
    ///
    /// An unconfirmed launch is logged and the run continues; the next
    /// scheduled invocation retries. Only a failed spawn is fatal.
    fn ensure_mounted(&self, plan: &MountPlan) -> Result<()> {
        let running = self.scanner.find(plan.name_signature, &plan.arg_signature);
        if let Some(existing) = running.first() {
            tracing::debug!(
                pid = existing.pid,
                started_at = ?existing.started_at,
                "{} is already running and mounted",
                plan.label
            );
            return Ok(());
        }

        tracing::debug!(command = %plan.command_line(), "Creating {} mount", plan.label);
        if let Err(error) = self.spawner.spawn_detached(&plan.program, &plan.args) {
            tracing::error!(%error, "{} mount command failed to launch", plan.label);
            return Err(error);
        }
        thread::sleep(self.settle);

        // The launch is disowned; the only confirmation is the process
        // showing up in a fresh scan.
        let confirmed = self.scanner.find(plan.name_signature, &plan.arg_signature);
        match confirmed.first() {
            Some(record) => {
                tracing::info!(pid = record.pid, "{} started and mounted", plan.label);
            }
            None => tracing::error!("{} process not found after launch", plan.label),
        }

        Ok(())
    }
}
