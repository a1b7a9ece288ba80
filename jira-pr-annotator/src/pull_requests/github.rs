//! Pull request writes through the GitHub REST API.

use super::{PullRequestRef, PullRequestStore, StoreError};
use crate::rate_limit::ensure_core_rate_limit;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// A [`PullRequestStore`] backed by an authenticated GitHub client.
#[derive(Clone)]
pub struct GitHubStore {
    octocrab: Octocrab,
}

impl GitHubStore {
    /// Wraps an authenticated client.
    #[must_use]
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl PullRequestStore for GitHubStore {
    async fn update_title(&self, pr: &PullRequestRef, title: &str) -> Result<(), StoreError> {
        debug!(pr = %pr, "Patching pull request title");
        ensure_core_rate_limit(&self.octocrab).await?;

        self.octocrab
            .pulls(&pr.owner, &pr.repo)
            .update(pr.number)
            .title(title)
            .send()
            .await?;

        Ok(())
    }

    async fn update_body(&self, pr: &PullRequestRef, body: &str) -> Result<(), StoreError> {
        debug!(pr = %pr, "Patching pull request body");
        ensure_core_rate_limit(&self.octocrab).await?;

        self.octocrab
            .pulls(&pr.owner, &pr.repo)
            .update(pr.number)
            .body(body)
            .send()
            .await?;

        Ok(())
    }
}
