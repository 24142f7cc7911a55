//! Search quota guard.
//!
//! File lookups are assumed to draw from the search quota. The guard runs
//! once before the scan: when exactly one search request is left it sleeps
//! until just after the quota resets.

mod info;

pub use info::RateLimitInfo;

use crate::host::RepositoryHost;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

/// Remaining count at which the guard pauses.
const LAST_REQUEST: u32 = 1;

/// Extra time slept past the reset instant.
const RESET_GRACE: Duration = Duration::from_secs(1);

/// Returns how long to wait before scanning, given a quota snapshot taken at `now`.
///
/// Only a remaining count of exactly one triggers a wait. An already
/// exhausted quota is left for the API to reject. Returns `None` when the
/// reset (plus grace) is not in the future or cannot be represented.
#[must_use]
pub fn wait_duration(info: &RateLimitInfo, now: SystemTime) -> Option<Duration> {
    if info.remaining != LAST_REQUEST {
        return None;
    }

    let wake_at = info.reset_at()?.checked_add(RESET_GRACE)?;
    wake_at
        .duration_since(now)
        .ok()
        .filter(|wait| !wait.is_zero())
}

/// Checks the search quota and sleeps if it is about to run out.
///
/// A failure to read the quota is logged and ignored. Returns how long the
/// guard slept, if at all.
pub async fn guard_search_quota(host: &dyn RepositoryHost) -> Option<Duration> {
    let info = match host.search_rate_limit().await {
        Ok(info) => info,
        Err(e) => {
            warn!(error = %e, "Problem in getting rate limit information");
            return None;
        }
    };

    let wait = wait_duration(&info, SystemTime::now())?;
    info!(
        remaining = info.remaining,
        limit = info.limit,
        reset = info.reset,
        wait_secs = wait.as_secs_f64(),
        "Search quota nearly exhausted, waiting for reset"
    );

    tokio::time::sleep(wait).await;
    Some(wait)
}
