//! Live process-table inspection.
//!
//! The process table is the sole source of truth for "is X mounted":
//! no mount decision is ever cached, every check takes a fresh
//! snapshot.

use chrono::DateTime;
use sysinfo::{Process, ProcessesToUpdate, System};

use crate::domain::ProcessRecord;

/// Source of live process snapshots used for mount detection.
pub trait ProcessScanner {
    /// All processes whose executable name contains `name` and whose
    /// space-joined argument list contains `arg`, case-insensitively.
    /// Returns an empty vector when nothing matches.
    fn find(&self, name: &str, arg: &str) -> Vec<ProcessRecord>;
}

impl<T: ProcessScanner + ?Sized> ProcessScanner for &T {
    fn find(&self, name: &str, arg: &str) -> Vec<ProcessRecord> {
        (**self).find(name, arg)
    }
}

/// Scanner backed by the operating system's process table.
pub struct SystemProcessScanner;

impl ProcessScanner for SystemProcessScanner {
    fn find(&self, name: &str, arg: &str) -> Vec<ProcessRecord> {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        system
            .processes()
            .values()
            .filter_map(snapshot)
            .filter(|record| record.matches(name, arg))
            .collect()
    }
}

/// Capture one process entry. Entries whose name or arguments cannot be
/// decoded are dropped; a single unreadable process must never abort
/// the scan.
fn snapshot(process: &Process) -> Option<ProcessRecord> {
    let name = process.name().to_str()?.to_string();
    let cmdline = process
        .cmd()
        .iter()
        .map(|arg| arg.to_str().map(ToString::to_string))
        .collect::<Option<Vec<_>>>()?;

    Some(ProcessRecord {
        pid: process.pid().as_u32(),
        name,
        started_at: DateTime::from_timestamp(process.start_time() as i64, 0),
        cmdline,
    })
}
