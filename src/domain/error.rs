//! Domain-level error types for auto-mount.
//!
//! All errors are typed with `thiserror`. Only the fatal tier lives here:
//! soft conditions (config file absent, unconfirmed mount after launch)
//! are outcomes or log lines, not errors.

use thiserror::Error;

/// Fatal errors that abort the orchestration run.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required external tool is not installed on this system.
    #[error("{tool} not found on PATH, install it from {hint}")]
    ToolMissing {
        tool: &'static str,
        hint: &'static str,
        #[source]
        source: which::Error,
    },

    /// The external mount command could not be started at all.
    ///
    /// Distinct from the spawned process failing internally, which is
    /// invisible to this tool.
    #[error("Failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The log sink could not be set up.
    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

impl AppError {
    /// Create a tool-missing error with its install hint.
    pub const fn tool_missing(
        tool: &'static str,
        hint: &'static str,
        source: which::Error,
    ) -> Self {
        Self::ToolMissing { tool, hint, source }
    }

    /// Create a spawn error for a command line that could not start.
    pub fn spawn(command: impl Into<String>, err: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source: err,
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
