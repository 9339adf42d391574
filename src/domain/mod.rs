//! Domain layer - core types and errors.
//!
//! This layer contains the pure configuration and process-record models
//! without any external dependencies (process table, filesystem, etc.).

pub mod error;
pub mod models;

pub use error::{AppError, Result};
pub use models::{MountConfig, ProcessRecord, RunOutcome};
