//! Log sink setup.
//!
//! One append-only file sink, initialized before anything else runs and
//! torn down implicitly at process exit. The target is the `LOGFILE`
//! environment variable when set, otherwise a fixed file name under the
//! configured log directory.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::{AppError, MountConfig, Result};

/// Fixed log file name under the log directory.
const LOG_FILE_NAME: &str = "auto_mount.log";

/// Environment variable overriding the computed log file path.
const LOG_FILE_ENV: &str = "LOGFILE";

/// Resolve the log file target for the given configuration.
#[must_use]
pub fn log_file_path(config: &MountConfig) -> PathBuf {
    std::env::var_os(LOG_FILE_ENV)
        .map_or_else(|| config.log_path.join(LOG_FILE_NAME), PathBuf::from)
}

/// Initialize the process-wide log sink.
///
/// Lines are written as timestamp, level, message with no ANSI codes.
/// The filter admits all levels unless `RUST_LOG` narrows it. With the
/// test flag set, log lines are additionally echoed to stderr.
///
/// Returns the writer guard; dropping it stops the background writer,
/// so the caller holds it for the life of the process.
///
/// # Errors
/// Returns error if the log file cannot be opened for appending.
pub fn init_logging(config: &MountConfig) -> Result<WorkerGuard> {
    let path = log_file_path(config);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::io(format!("Failed to open log file {}", path.display()), e))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer);
    let stderr_layer = config
        .test
        .then(|| fmt::layer().with_target(false).with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Logging {
            message: e.to_string(),
        })?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config(log_path: &Path) -> MountConfig {
        MountConfig {
            remote: "gdrive".into(),
            config_file: PathBuf::from("/etc/rclone.conf"),
            remote_path: PathBuf::from("/mnt/user/mount_rclone"),
            mergerfs_path: PathBuf::from("/mnt/user/mount_mergerfs"),
            local_path: PathBuf::from("/mnt/user/mount_local"),
            log_path: log_path.to_path_buf(),
            test: false,
            options: None,
        }
    }

    #[test]
    fn test_default_log_file_under_log_dir() {
        // Only exercised when the override is absent; a parallel test
        // run may have set it.
        if std::env::var_os(LOG_FILE_ENV).is_none() {
            let path = log_file_path(&config(Path::new("/mnt/user/auto_mount_config")));
            assert_eq!(
                path,
                Path::new("/mnt/user/auto_mount_config/auto_mount.log")
            );
        }
    }

    #[test]
    fn test_log_file_opens_in_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        std::fs::write(&path, b"existing line\n").unwrap();

        // Opening the sink must not truncate prior runs' lines.
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        drop(file);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing line\n");
    }
}
