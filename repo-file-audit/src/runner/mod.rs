//! Orchestrates an audit run.
//!
//! The run is strictly sequential: list repositories, guard the search
//! quota once, then check each repository in turn. The first unexpected
//! lookup failure ends the run without a report.

mod error;

pub use error::RunnerError;

use crate::config::AuditRequest;
use crate::discovery::discover_repositories;
use crate::host::{GitHubHost, RepositoryHost};
use crate::presence::{check_file, FilePresence};
use crate::rate_limit::guard_search_quota;
use crate::report::AuditReport;
use std::io::{self, Write};
use tracing::{debug, info, info_span, Instrument};

/// Runs the audit described by an [`AuditRequest`] against a host.
pub struct Runner<H = GitHubHost> {
    request: AuditRequest,
    host: H,
}

impl Runner<GitHubHost> {
    /// Builds a runner that talks to GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Client`] if the GitHub client cannot be built.
    pub fn new(request: AuditRequest) -> Result<Self, RunnerError> {
        let host = GitHubHost::new(&request)?;
        Ok(Self::with_host(request, host))
    }
}

impl<H: RepositoryHost> Runner<H> {
    /// Builds a runner over an arbitrary host.
    pub fn with_host(request: AuditRequest, host: H) -> Self {
        Self { request, host }
    }

    /// Executes the audit, printing progress to standard output.
    ///
    /// # Errors
    ///
    /// See [`Runner::run_with_output`].
    pub async fn run(&self) -> Result<AuditReport, RunnerError> {
        let mut stdout = io::stdout();
        self.run_with_output(&mut stdout).await
    }

    /// Executes the audit, writing progress lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Enumeration`] if the repositories cannot be
    /// listed, [`RunnerError::FileCheck`] on the first lookup that fails for
    /// any reason other than the file being absent, and
    /// [`RunnerError::Output`] if `out` cannot be written.
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<AuditReport, RunnerError> {
        let organization = self.request.organization();
        let target_file = self.request.target_file();
        let reference = self.request.reference();

        let span = info_span!(
            "audit",
            organization = %organization,
            target_file = %target_file,
            reference = %reference
        );

        async {
            writeln!(out, "Listing repos for the {organization} org...")?;
            let repositories = discover_repositories(&self.host, organization)
                .await
                .map_err(|source| RunnerError::Enumeration {
                    organization: organization.to_string(),
                    source,
                })?;

            guard_search_quota(&self.host).await;

            let mut report = AuditReport::new(organization, target_file);
            for repository in &repositories {
                writeln!(out, "Checking {}...", repository.name)?;

                let presence = check_file(
                    &self.host,
                    organization,
                    &repository.name,
                    target_file,
                    reference,
                )
                .await
                .map_err(|source| RunnerError::FileCheck {
                    repository: format!("{organization}/{}", repository.name),
                    file: target_file.to_string(),
                    source,
                })?;

                match presence {
                    FilePresence::Present => debug!(repo = %repository.name, "File present"),
                    FilePresence::Absent => report.record_missing(&repository.name),
                }
            }

            info!(
                checked = repositories.len(),
                missing = report.missing.len(),
                "Audit complete"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }
}
