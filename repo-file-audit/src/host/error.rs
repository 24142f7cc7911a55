//! Hosting API error types.

use thiserror::Error;

/// HTTP status GitHub answers with when a resource does not exist.
const NOT_FOUND_STATUS: u16 = 404;

/// Errors returned by a [`RepositoryHost`](super::RepositoryHost).
#[derive(Debug, Error)]
pub enum HostError {
    /// The requested resource does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The API answered with a non-success status other than not-found.
    #[error("GitHub API rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Any other client failure (transport, decoding, authentication setup).
    #[error("GitHub API error: {0}")]
    GitHubError(#[source] octocrab::Error),
}

impl HostError {
    /// Returns true if this error means the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Classifies an API answer by its HTTP status.
    pub(crate) fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == NOT_FOUND_STATUS {
            Self::NotFound { message }
        } else {
            Self::Rejected { status, message }
        }
    }
}

impl From<octocrab::Error> for HostError {
    fn from(error: octocrab::Error) -> Self {
        match &error {
            octocrab::Error::GitHub { source, .. } => {
                Self::from_status(source.status_code.as_u16(), source.message.clone())
            }
            _ => Self::GitHubError(error),
        }
    }
}
