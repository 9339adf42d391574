//! Directory creation for mount points and the log directory.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Result};

/// Ensure a directory exists, creating missing parents.
///
/// An already existing directory is informational, not an error. Any
/// other filesystem failure (permission denied, path occupied by a
/// regular file) propagates.
///
/// # Errors
/// Returns error if the directory is missing and cannot be created.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        tracing::debug!(path = %path.display(), "Directory already exists");
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        AppError::io(format!("Failed to create directory {}", path.display()), e)
    })?;

    tracing::debug!(path = %path.display(), "Directory created");
    Ok(())
}
