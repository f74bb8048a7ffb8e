//! Error types for the access-control layer
//!
//! Decisions themselves never fail: a deny is just `false`. These errors
//! only appear at the boundary where upstream strings (role names, HTTP
//! method labels, decision names, configuration values) become typed
//! values, and when a caller opts into `?`-style authorization.

use thiserror::Error;

use crate::decision::Decision;

/// Access-control error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    /// Role name is not one of the known roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Role group name is not one of the known groups
    #[error("Unknown role group: {0}")]
    UnknownRoleGroup(String),

    /// HTTP method label is not recognized
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),

    /// Decision name is not one of the known decisions
    #[error("Unknown decision: {0}")]
    UnknownDecision(String),

    /// The decision denied access
    #[error("Forbidden: {0} denied")]
    Forbidden(Decision),

    /// Configuration value could not be interpreted
    #[error("Invalid configuration value for {key}: {message}")]
    Config {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Result type for access-control operations.
pub type RbacResult<T> = Result<T, RbacError>;

impl RbacError {
    /// Check if this error is caused by the server rather than the caller.
    pub fn is_server_error(&self) -> bool {
        matches!(self, RbacError::Config { .. })
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RbacError::UnknownRole(_)
            | RbacError::UnknownRoleGroup(_)
            | RbacError::UnknownMethod(_)
            | RbacError::UnknownDecision(_) => 400,

            RbacError::Forbidden(_) => 403,

            RbacError::Config { .. } => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RbacError::UnknownRole(_) => "UNKNOWN_ROLE",
            RbacError::UnknownRoleGroup(_) => "UNKNOWN_ROLE_GROUP",
            RbacError::UnknownMethod(_) => "UNKNOWN_METHOD",
            RbacError::UnknownDecision(_) => "UNKNOWN_DECISION",
            RbacError::Forbidden(_) => "FORBIDDEN",
            RbacError::Config { .. } => "CONFIG_ERROR",
        }
    }
}
