//! In-memory [`RepositoryHost`] for unit tests.

use crate::host::{HostError, RepositoryHost, RepositorySummary};
use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A file lookup seen by the fake: `(repository, path, reference)`.
pub(crate) type Lookup = (String, String, String);

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    repositories: Vec<String>,
    listing_status: Option<u16>,
    present: HashSet<String>,
    failing: HashMap<String, u16>,
    rate_limit: Option<RateLimitInfo>,
    lookups: Mutex<Vec<Lookup>>,
}

impl FakeHost {
    pub(crate) fn with_repositories(names: &[&str]) -> Self {
        Self {
            repositories: names.iter().map(|name| name.to_string()).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn with_file(mut self, repository: &str) -> Self {
        self.present.insert(repository.to_string());
        self
    }

    pub(crate) fn failing(mut self, repository: &str, status: u16) -> Self {
        self.failing.insert(repository.to_string(), status);
        self
    }

    pub(crate) fn failing_listing(mut self, status: u16) -> Self {
        self.listing_status = Some(status);
        self
    }

    pub(crate) fn with_rate_limit(mut self, info: RateLimitInfo) -> Self {
        self.rate_limit = Some(info);
        self
    }

    pub(crate) fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn list_public_repositories(
        &self,
        _organization: &str,
    ) -> Result<Vec<RepositorySummary>, HostError> {
        if let Some(status) = self.listing_status {
            return Err(HostError::from_status(status, "listing failed"));
        }
        Ok(self
            .repositories
            .iter()
            .map(RepositorySummary::new)
            .collect())
    }

    async fn get_file(
        &self,
        _owner: &str,
        repository: &str,
        path: &str,
        reference: &str,
    ) -> Result<(), HostError> {
        self.lookups.lock().unwrap().push((
            repository.to_string(),
            path.to_string(),
            reference.to_string(),
        ));

        if let Some(status) = self.failing.get(repository) {
            return Err(HostError::from_status(*status, "lookup failed"));
        }
        if self.present.contains(repository) {
            Ok(())
        } else {
            Err(HostError::from_status(404, "Not Found"))
        }
    }

    async fn search_rate_limit(&self) -> Result<RateLimitInfo, HostError> {
        self.rate_limit
            .ok_or_else(|| HostError::from_status(503, "rate limit unavailable"))
    }
}
