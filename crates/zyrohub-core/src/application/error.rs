//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, ZyroError};

/// What happened to the project directory after a setup abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupStatus {
    /// The directory was never created.
    NotNeeded,
    /// The partially created directory was removed.
    Removed,
    /// Removal was attempted and failed; the directory may remain.
    Failed(String),
}

impl fmt::Display for CleanupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNeeded => f.write_str("nothing to clean up"),
            Self::Removed => f.write_str("created files cleaned up"),
            Self::Failed(reason) => write!(f, "cleanup failed: {reason}"),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A child process could not be started because the program is missing.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// A child process ran and reported failure.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A setup step failed; the pipeline stopped and cleanup ran.
    #[error("{step} failed: {cause}")]
    SetupAborted {
        step: String,
        #[source]
        cause: Box<ZyroError>,
        cleanup: CleanupStatus,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandNotFound { program } => vec![
                format!("Install '{}' or make sure it is on your PATH", program),
                "Or choose a different package manager".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Try running it yourself: {}", command),
                "Check your network connection and registry settings".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::SetupAborted { cause, cleanup, .. } => {
                let mut hints = cause.suggestions();
                if let CleanupStatus::Failed(_) = cleanup {
                    hints.push("Remove the partially created directory by hand".into());
                }
                hints
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::CommandNotFound { .. } => ErrorCategory::NotFound,
            Self::CommandFailed { .. } => ErrorCategory::External,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::SetupAborted { cause, .. } => cause.category(),
        }
    }
}
