//! Command lines and match signatures for the two mounts.
//!
//! Both flag sets are opaque pass-through configuration for the
//! external tools; nothing here reinterprets them.

use std::path::PathBuf;

use crate::domain::MountConfig;

/// Fixed mergerfs behavior options: read-write, inode preservation,
/// shared access, no page cache on files, drop cache on close,
/// synchronous reads, newest-wins metadata lookups, first-found create.
const MERGERFS_OPTIONS: &str = "rw,noforget,use_ino,allow_other,cache.files=off,\
dropcacheonclose=true,async_read=false,func.getattr=newest,\
category.action=all,category.create=ff";

/// Everything needed to detect, launch and confirm one mount.
#[derive(Debug, Clone)]
pub struct MountPlan {
    /// Short label used in log lines.
    pub label: &'static str,
    /// Substring the process executable name must contain.
    pub name_signature: &'static str,
    /// Substring the joined argument list must contain.
    pub arg_signature: String,
    /// Resolved program to launch when the mount is missing.
    pub program: PathBuf,
    /// Arguments for the launch.
    pub args: Vec<String>,
}

impl MountPlan {
    /// rclone mount of the remote backend, detected by any `rclone`
    /// process carrying a `mount` argument.
    #[must_use]
    pub fn remote(config: &MountConfig, rclone: PathBuf) -> Self {
        let args = vec![
            "mount".to_string(),
            "--config".to_string(),
            config.config_file.display().to_string(),
            "--allow-other".to_string(),
            "--buffer-size".to_string(),
            "256M".to_string(),
            "--dir-cache-time".to_string(),
            "720h".to_string(),
            "--drive-chunk-size".to_string(),
            "512M".to_string(),
            "--log-level".to_string(),
            "INFO".to_string(),
            "--vfs-read-chunk-size".to_string(),
            "128M".to_string(),
            "--vfs-read-chunk-size-limit".to_string(),
            "off".to_string(),
            "--vfs-cache-mode".to_string(),
            "writes".to_string(),
            format!("{}:", config.remote),
            config.remote_path.display().to_string(),
        ];

        Self {
            label: "rclone",
            name_signature: "rclone",
            arg_signature: "mount".to_string(),
            program: rclone,
            args,
        }
    }

    /// mergerfs union of the local branch over the remote mount,
    /// detected by the colon-joined branch list in the arguments.
    #[must_use]
    pub fn union(config: &MountConfig, mergerfs: PathBuf) -> Self {
        let branches = config.union_branches();
        let args = vec![
            branches.clone(),
            config.mergerfs_path.display().to_string(),
            "-o".to_string(),
            MERGERFS_OPTIONS.to_string(),
        ];

        Self {
            label: "mergerfs",
            name_signature: "mergerfs",
            arg_signature: branches,
            program: mergerfs,
            args,
        }
    }

    /// Full command line for log output.
    #[must_use]
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program.display(), self.args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config() -> MountConfig {
        MountConfig {
            remote: "gdrive".into(),
            config_file: "/mnt/user/rclone.conf".into(),
            remote_path: "/mnt/user/mount_rclone".into(),
            mergerfs_path: "/mnt/user/mount_mergerfs".into(),
            local_path: "/mnt/user/mount_local".into(),
            log_path: "/mnt/user/auto_mount_config".into(),
            test: false,
            options: None,
        }
    }

    #[test]
    fn test_remote_plan_flags() {
        let plan = MountPlan::remote(&config(), PathBuf::from("/usr/bin/rclone"));

        assert_eq!(plan.program, Path::new("/usr/bin/rclone"));
        assert_eq!(plan.args[0], "mount");

        let line = plan.command_line();
        assert!(line.contains("--config /mnt/user/rclone.conf"));
        assert!(line.contains("--allow-other"));
        assert!(line.contains("--buffer-size 256M"));
        assert!(line.contains("--dir-cache-time 720h"));
        assert!(line.contains("--drive-chunk-size 512M"));
        assert!(line.contains("--log-level INFO"));
        assert!(line.contains("--vfs-read-chunk-size 128M"));
        assert!(line.contains("--vfs-read-chunk-size-limit off"));
        assert!(line.contains("--vfs-cache-mode writes"));
    }

    #[test]
    fn test_remote_plan_targets_remote_colon_path() {
        let plan = MountPlan::remote(&config(), PathBuf::from("/usr/bin/rclone"));
        let tail = &plan.args[plan.args.len() - 2..];

        assert_eq!(tail, ["gdrive:", "/mnt/user/mount_rclone"]);
    }

    #[test]
    fn test_remote_plan_signature() {
        let plan = MountPlan::remote(&config(), PathBuf::from("/usr/bin/rclone"));

        assert_eq!(plan.name_signature, "rclone");
        assert_eq!(plan.arg_signature, "mount");
    }

    #[test]
    fn test_union_plan_branches_then_target() {
        let plan = MountPlan::union(&config(), PathBuf::from("/usr/bin/mergerfs"));

        assert_eq!(
            plan.args[0],
            "/mnt/user/mount_local:/mnt/user/mount_rclone"
        );
        assert_eq!(plan.args[1], "/mnt/user/mount_mergerfs");
        assert_eq!(plan.args[2], "-o");
    }

    #[test]
    fn test_union_plan_behavior_options() {
        let plan = MountPlan::union(&config(), PathBuf::from("/usr/bin/mergerfs"));
        let options = &plan.args[3];

        for expected in [
            "rw",
            "noforget",
            "use_ino",
            "allow_other",
            "cache.files=off",
            "dropcacheonclose=true",
            "async_read=false",
            "func.getattr=newest",
            "category.action=all",
            "category.create=ff",
        ] {
            assert!(options.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_union_plan_signature_is_branch_list() {
        let plan = MountPlan::union(&config(), PathBuf::from("/usr/bin/mergerfs"));

        assert_eq!(plan.name_signature, "mergerfs");
        assert_eq!(
            plan.arg_signature,
            "/mnt/user/mount_local:/mnt/user/mount_rclone"
        );
    }
}
