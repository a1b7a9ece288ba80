//! Rate limiting for GitHub API writes.
//!
//! Before each write the core quota is checked. When it runs low the run
//! sleeps until the window resets instead of failing with a 403.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Fetches the current core API quota.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Sleeps if the quota is nearly exhausted, returning true if it waited.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(wait) = info.wait_duration(now) else {
        return false;
    };

    if info.reset.saturating_sub(now) > wait.as_secs() {
        warn!(
            reset = info.reset,
            wait_secs = wait.as_secs(),
            "Rate limit reset too far in future, capping wait time"
        );
    }

    info!(
        remaining = info.remaining,
        wait_secs = wait.as_secs(),
        "Rate limit low, waiting for reset"
    );
    tokio::time::sleep(wait).await;
    true
}

/// Ensures sufficient core quota before a write.
///
/// # Errors
///
/// Returns an error if the rate limit check fails.
pub async fn ensure_core_rate_limit(octocrab: &Octocrab) -> Result<(), octocrab::Error> {
    let info = check_core_rate_limit(octocrab).await?;
    wait_if_needed(&info).await;
    Ok(())
}
