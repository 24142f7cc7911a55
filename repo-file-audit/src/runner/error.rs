//! Runner error types.

use crate::config::ConfigError;
use crate::host::HostError;

/// Errors that abort an audit run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid audit configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error("Failed to create GitHub client: {0}")]
    Client(#[from] octocrab::Error),

    /// The organization's repositories could not be listed.
    #[error("Failed to list repos for the {organization} org: {source}")]
    Enumeration {
        organization: String,
        #[source]
        source: HostError,
    },

    /// A file lookup failed for a reason other than the file being absent.
    #[error("Getting {file} file failed for {repository}: {source}")]
    FileCheck {
        repository: String,
        file: String,
        #[source]
        source: HostError,
    },

    /// Progress output could not be written.
    #[error("Failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}
