//! Rate limit information.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rate limit information for a specific resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns the reset instant as a [`SystemTime`].
    ///
    /// Returns `None` if the timestamp is not representable.
    #[must_use]
    pub fn reset_at(&self) -> Option<SystemTime> {
        UNIX_EPOCH.checked_add(Duration::from_secs(self.reset))
    }
}
