//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building an [`AuditRequest`](super::AuditRequest).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}
