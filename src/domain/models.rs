//! Domain models for the mount orchestration.
//!
//! `MountConfig` is built once from the command line and never mutated;
//! `ProcessRecord` is a transient snapshot of one live process. Mount
//! state itself is never stored: it is re-derived from the process
//! table at every decision point.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable run configuration, derived from CLI arguments at startup.
#[derive(Debug, Clone, Serialize)]
pub struct MountConfig {
    /// Name of the rclone remote drive.
    pub remote: String,
    /// Path to the rclone config file.
    pub config_file: PathBuf,
    /// Where the rclone remote is mounted.
    pub remote_path: PathBuf,
    /// Where the mergerfs union of local and remote is mounted.
    pub mergerfs_path: PathBuf,
    /// Local storage branch of the union.
    pub local_path: PathBuf,
    /// Directory holding the log file.
    pub log_path: PathBuf,
    /// Test mode: echo logs to stderr and dump the resolved configuration.
    pub test: bool,
    /// Raw comma-separated rclone options. Accepted but never forwarded
    /// to the mount command line.
    pub options: Option<String>,
}

impl MountConfig {
    /// The three mount directories that must exist before mounting.
    #[must_use]
    pub fn mount_dirs(&self) -> [&Path; 3] {
        [&self.remote_path, &self.local_path, &self.mergerfs_path]
    }

    /// Colon-joined branch list handed to mergerfs, local branch first.
    #[must_use]
    pub fn union_branches(&self) -> String {
        format!(
            "{}:{}",
            self.local_path.display(),
            self.remote_path.display()
        )
    }
}

/// Snapshot of one running process, captured fresh on every inspection.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    /// Process id.
    pub pid: u32,
    /// Executable name.
    pub name: String,
    /// When the process started, if the clock value was representable.
    pub started_at: Option<DateTime<Utc>>,
    /// Full argument list, program name included.
    pub cmdline: Vec<String>,
}

impl ProcessRecord {
    /// The argument list joined with spaces, as matched against.
    #[must_use]
    pub fn cmdline_joined(&self) -> String {
        self.cmdline.join(" ")
    }

    /// Whether this process matches a mount signature: name contains
    /// `name` and the joined argument list contains `arg`, both
    /// case-insensitively.
    #[must_use]
    pub fn matches(&self, name: &str, arg: &str) -> bool {
        self.name.to_lowercase().contains(&name.to_lowercase())
            && self
                .cmdline_joined()
                .to_lowercase()
                .contains(&arg.to_lowercase())
    }
}

/// Terminal state of one orchestration run. Both map to exit status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both mounts were checked and, where needed, launched.
    Completed,
    /// The rclone config file does not exist yet; nothing to do.
    Unconfigured,
}
