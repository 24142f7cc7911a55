//! [`RepositoryHost`] backed by the GitHub REST API.

use super::{HostError, RepositoryHost, RepositorySummary};
use crate::config::{AuditRequest, REPOSITORIES_PER_PAGE};
use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;
use octocrab::params::repos::Type;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub client authenticated with a personal access token.
#[derive(Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Builds an authenticated client for the request's token and API root.
    ///
    /// Failed requests are not retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the API root is invalid or the client cannot be
    /// constructed.
    pub fn new(request: &AuditRequest) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder()
            .personal_token(request.token().to_string())
            .add_retry_config(RetryConfig::None);
        if let Some(api_url) = request.api_url() {
            builder = builder.base_uri(api_url)?;
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

#[async_trait]
impl RepositoryHost for GitHubHost {
    async fn list_public_repositories(
        &self,
        organization: &str,
    ) -> Result<Vec<RepositorySummary>, HostError> {
        let page = self
            .octocrab
            .orgs(organization)
            .list_repos()
            .repo_type(Type::Public)
            .per_page(REPOSITORIES_PER_PAGE)
            .page(1u32)
            .send()
            .await?;

        debug!(count = page.items.len(), "Fetched repository page");
        Ok(page
            .items
            .into_iter()
            .map(|repo| RepositorySummary::new(repo.name))
            .collect())
    }

    async fn get_file(
        &self,
        owner: &str,
        repository: &str,
        path: &str,
        reference: &str,
    ) -> Result<(), HostError> {
        self.octocrab
            .repos(owner, repository)
            .get_content()
            .path(path)
            .r#ref(reference)
            .send()
            .await?;
        Ok(())
    }

    async fn search_rate_limit(&self) -> Result<RateLimitInfo, HostError> {
        let rate_limit = self.octocrab.ratelimit().get().await?;
        let search = &rate_limit.resources.search;

        Ok(RateLimitInfo {
            remaining: search.remaining as u32,
            reset: search.reset,
            limit: search.limit as u32,
        })
    }
}
