//! External tool discovery on the system PATH.
//!
//! Both mount tools must be resolvable before any mount attempt; a
//! missing tool aborts the run with an actionable install hint.

use std::path::PathBuf;

use crate::domain::{AppError, Result};

/// An external executable this tool depends on.
#[derive(Debug, Clone, Copy)]
pub struct ExternalTool {
    /// Short executable name searched on PATH.
    pub name: &'static str,
    /// Where to get it when it is missing.
    pub install_hint: &'static str,
}

/// rclone mounts the remote backend.
pub const RCLONE: ExternalTool = ExternalTool {
    name: "rclone",
    install_hint: "https://rclone.org/downloads/",
};

/// mergerfs unions the local and remote branches.
pub const MERGERFS: ExternalTool = ExternalTool {
    name: "mergerfs",
    install_hint: "https://github.com/trapexit/mergerfs",
};

/// Resolves required executables to absolute paths.
pub trait ToolLocator {
    /// Find `tool` or fail with its install hint.
    ///
    /// # Errors
    /// Returns [`AppError::ToolMissing`] if the tool is not on PATH.
    fn locate(&self, tool: ExternalTool) -> Result<PathBuf>;
}

impl<T: ToolLocator + ?Sized> ToolLocator for &T {
    fn locate(&self, tool: ExternalTool) -> Result<PathBuf> {
        (**self).locate(tool)
    }
}

/// Locator backed by a real PATH search. `which` also resolves the
/// `.exe` suffix on Windows, so no platform branch is needed here.
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, tool: ExternalTool) -> Result<PathBuf> {
        match which::which(tool.name) {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "{} installation detected", tool.name);
                Ok(path)
            }
            Err(source) => {
                tracing::error!("Please install {}: {}", tool.name, tool.install_hint);
                Err(AppError::tool_missing(tool.name, tool.install_hint, source))
            }
        }
    }
}
