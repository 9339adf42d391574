//! Detached launch of external mount processes.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::{AppError, Result};

/// Launches a command the orchestrator never supervises.
pub trait Spawner {
    /// Start `program` with `args` as a detached background process.
    ///
    /// # Errors
    /// Returns [`AppError::Spawn`] if the OS could not start the
    /// command at all.
    fn spawn_detached(&self, program: &Path, args: &[String]) -> Result<()>;
}

impl<T: Spawner + ?Sized> Spawner for &T {
    fn spawn_detached(&self, program: &Path, args: &[String]) -> Result<()> {
        (**self).spawn_detached(program, args)
    }
}

/// Spawner that hands the child to the OS and drops the handle.
///
/// The mount processes are meant to run indefinitely; this tool holds
/// no handle for later signaling and never waits on them.
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    // Launch and disown: the child outlives this process and is
    // reparented to init once the orchestrator exits.
    #[allow(clippy::zombie_processes)]
    fn spawn_detached(&self, program: &Path, args: &[String]) -> Result<()> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                AppError::spawn(format!("{} {}", program.display(), args.join(" ")), e)
            })?;

        Ok(())
    }
}
