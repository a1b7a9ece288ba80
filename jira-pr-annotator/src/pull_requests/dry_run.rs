//! A store that only reports what it would write.

use super::{PullRequestRef, PullRequestStore, StoreError};
use async_trait::async_trait;
use tracing::info;

/// Logs planned writes instead of performing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunStore;

#[async_trait]
impl PullRequestStore for DryRunStore {
    async fn update_title(&self, pr: &PullRequestRef, title: &str) -> Result<(), StoreError> {
        info!(pr = %pr, title, "[DRY RUN] Would update PR title");
        Ok(())
    }

    async fn update_body(&self, pr: &PullRequestRef, body: &str) -> Result<(), StoreError> {
        info!(pr = %pr, "[DRY RUN] Would update PR body");
        for line in body.lines() {
            info!("    {line}");
        }
        Ok(())
    }
}
