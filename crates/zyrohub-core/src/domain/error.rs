// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("invalid repository URL '{url}': {reason}")]
    InvalidRepositoryUrl { url: String, reason: String },

    #[error("a directory named '{name}' already exists")]
    NameTaken { name: String },

    #[error("failed to render {file}: {reason}")]
    RenderFailed { file: &'static str, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidValue { field, value } => vec![
                format!("'{}' is not a valid {}", value, field),
                "Run with --help to see accepted values".into(),
            ],
            Self::InvalidRepositoryUrl { .. } => vec![
                "Enter a full URL, e.g. https://github.com/acme/app-api".into(),
                "Leave the answer blank to skip the repository".into(),
            ],
            Self::NameTaken { name } => vec![
                format!("Choose a name other than '{}'", name),
                format!("Or remove the existing directory: rm -rf {}", name),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("The '{}' answer was never provided", field),
                "This is likely a bug in the prompt flow".into(),
            ],
            Self::RenderFailed { file, .. } => vec![
                format!("The {} template could not be produced", file),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidValue { .. }
            | Self::InvalidRepositoryUrl { .. }
            | Self::NameTaken { .. } => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } | Self::RenderFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
