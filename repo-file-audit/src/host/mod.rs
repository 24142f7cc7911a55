//! Access to the repository hosting platform.
//!
//! The audit only needs three calls from the platform, collected in the
//! [`RepositoryHost`] trait. [`GitHubHost`] implements it on top of octocrab.

mod error;
mod github;

pub use error::HostError;
pub use github::GitHubHost;

use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;

/// The part of a repository record the audit uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Repository name, without the owner.
    pub name: String,
}

impl RepositorySummary {
    /// Creates a summary for the repository called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Repository hosting API used by the audit.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Lists the first page of public repositories owned by `organization`.
    ///
    /// At most [`REPOSITORIES_PER_PAGE`](crate::config::REPOSITORIES_PER_PAGE)
    /// entries are returned, in the order the platform provides them.
    async fn list_public_repositories(
        &self,
        organization: &str,
    ) -> Result<Vec<RepositorySummary>, HostError>;

    /// Fetches the metadata of `path` in `owner/repository` at `reference`.
    ///
    /// Succeeds if the file exists. A missing file is reported as
    /// [`HostError::NotFound`].
    async fn get_file(
        &self,
        owner: &str,
        repository: &str,
        path: &str,
        reference: &str,
    ) -> Result<(), HostError>;

    /// Returns the current state of the search quota.
    async fn search_rate_limit(&self) -> Result<RateLimitInfo, HostError>;
}
