//! CLI interface using clap.
//!
//! One command, one job: mount the remote drive with rclone and union
//! it with local storage through mergerfs.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::MountConfig;

/// Mount a remote drive using rclone and merge local and remote mounts
/// using mergerfs.
#[derive(Parser, Debug)]
#[command(name = "auto-mount")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// rclone config file.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Name of the rclone remote drive.
    #[arg(short, long)]
    pub remote: String,

    /// File path for where to mount the rclone drive.
    #[arg(long, default_value = "/mnt/user/mount_rclone")]
    pub remote_path: PathBuf,

    /// File path for where to mount the rclone/local-storage union.
    #[arg(long, default_value = "/mnt/user/mount_mergerfs")]
    pub mergerfs_path: PathBuf,

    /// File path for the local storage to union.
    #[arg(long, default_value = "/mnt/user/mount_local")]
    pub local_path: PathBuf,

    /// File path for where to store logs.
    #[arg(short, long, default_value = "/mnt/user/auto_mount_config")]
    pub log_path: PathBuf,

    /// For testing: echo logs to stderr and print the resolved
    /// configuration.
    #[arg(short, long)]
    pub test: bool,

    /// Comma separated list of rclone options.
    #[arg(short, long, allow_hyphen_values = true)]
    pub options: Option<String>,
}

impl Cli {
    /// Freeze the parsed arguments into the immutable run configuration.
    #[must_use]
    pub fn into_config(self) -> MountConfig {
        MountConfig {
            remote: self.remote,
            config_file: self.config,
            remote_path: self.remote_path,
            mergerfs_path: self.mergerfs_path,
            local_path: self.local_path,
            log_path: self.log_path,
            test: self.test,
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["auto-mount", "-c", "/etc/rclone.conf", "-r", "gdrive"])
            .unwrap();
        let config = cli.into_config();

        assert_eq!(config.remote, "gdrive");
        assert_eq!(config.config_file, Path::new("/etc/rclone.conf"));
        assert_eq!(config.remote_path, Path::new("/mnt/user/mount_rclone"));
        assert_eq!(config.mergerfs_path, Path::new("/mnt/user/mount_mergerfs"));
        assert_eq!(config.local_path, Path::new("/mnt/user/mount_local"));
        assert_eq!(config.log_path, Path::new("/mnt/user/auto_mount_config"));
        assert!(!config.test);
        assert!(config.options.is_none());
    }

    #[test]
    fn test_config_and_remote_are_required() {
        assert!(Cli::try_parse_from(["auto-mount"]).is_err());
        assert!(Cli::try_parse_from(["auto-mount", "-c", "/etc/rclone.conf"]).is_err());
        assert!(Cli::try_parse_from(["auto-mount", "-r", "gdrive"]).is_err());
    }

    #[test]
    fn test_options_accepted_verbatim() {
        let cli = Cli::try_parse_from([
            "auto-mount",
            "-c",
            "/etc/rclone.conf",
            "-r",
            "gdrive",
            "-o",
            "--fast-list,--checkers=4",
            "-t",
        ])
        .unwrap();
        let config = cli.into_config();

        assert_eq!(config.options.as_deref(), Some("--fast-list,--checkers=4"));
        assert!(config.test);
    }
}
