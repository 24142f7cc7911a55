//! File presence classification.

use crate::host::{HostError, RepositoryHost};
use tracing::debug;

/// Whether a repository contains the audited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePresence {
    /// The file exists at the reference.
    Present,
    /// The platform reported the file as not found.
    Absent,
}

/// Looks up `path` in `owner/repository` at `reference`.
///
/// Only a not-found answer counts as [`FilePresence::Absent`].
///
/// # Errors
///
/// Any other [`HostError`] is returned unchanged.
pub async fn check_file(
    host: &dyn RepositoryHost,
    owner: &str,
    repository: &str,
    path: &str,
    reference: &str,
) -> Result<FilePresence, HostError> {
    match host.get_file(owner, repository, path, reference).await {
        Ok(()) => Ok(FilePresence::Present),
        Err(e) if e.is_not_found() => {
            debug!(repo = %repository, error = %e, "File not found");
            Ok(FilePresence::Absent)
        }
        Err(e) => Err(e),
    }
}
