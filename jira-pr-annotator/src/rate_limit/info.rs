//! Rate limit information.

use std::time::Duration;

/// Maximum time to wait for rate limit reset (1 hour).
pub(crate) const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
pub(crate) const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Core API quota as reported by GitHub.
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
    /// How long to pause before the next write, given the current time.
    ///
    /// `None` while enough quota remains or once the window has already
    /// reset. Waits are capped at [`MAX_WAIT_SECS`].
    #[must_use]
    pub fn wait_duration(&self, now_secs: u64) -> Option<Duration> {
        if self.remaining >= MIN_REMAINING_THRESHOLD || self.reset <= now_secs {
            return None;
        }
        let wait_secs = (self.reset - now_secs).min(MAX_WAIT_SECS);
        Some(Duration::from_secs(wait_secs))
    }
}
