//! Repository enumeration.
//!
//! Lists the public repositories of an organization. Only the first page is
//! fetched, so organizations with more repositories than fit on one page are
//! audited partially.

use crate::config::REPOSITORIES_PER_PAGE;
use crate::host::{HostError, RepositoryHost, RepositorySummary};
use tracing::{info, info_span, warn, Instrument};

/// Lists the public repositories of `organization`, in platform order.
///
/// # Errors
///
/// Returns the [`HostError`] of the listing call. There is no retry.
pub async fn discover_repositories(
    host: &dyn RepositoryHost,
    organization: &str,
) -> Result<Vec<RepositorySummary>, HostError> {
    let span = info_span!("discover", organization = %organization);

    async {
        let repositories = host.list_public_repositories(organization).await?;

        if repositories.len() >= usize::from(REPOSITORIES_PER_PAGE) {
            warn!(
                count = repositories.len(),
                "Repository page is full, repositories beyond the first page are not audited"
            );
        }

        info!(count = repositories.len(), "Discovery complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}
