#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod discovery;
pub mod host;
pub mod presence;
pub mod rate_limit;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use config::{AuditRequest, ConfigError, DEFAULT_REFERENCE, REPOSITORIES_PER_PAGE};
pub use discovery::discover_repositories;
pub use host::{GitHubHost, HostError, RepositoryHost, RepositorySummary};
pub use presence::{check_file, FilePresence};
pub use rate_limit::{guard_search_quota, wait_duration, RateLimitInfo};
pub use report::AuditReport;
pub use runner::{Runner, RunnerError};
