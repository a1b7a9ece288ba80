//! Pull request identity, state, and the writes the annotator performs.
//!
//! The annotator never talks to GitHub directly. It works against the
//! [`PullRequestStore`] trait, which [`GitHubStore`] implements over the REST
//! API and [`DryRunStore`] implements by logging.

mod dry_run;
mod error;
mod github;

pub use dry_run::DryRunStore;
pub use error::StoreError;
pub use github::GitHubStore;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Identifies the pull request to modify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Pull request number.
    pub number: u64,
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// The state of a pull request when the run started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// Source branch name.
    pub head_branch: String,

    /// Current title.
    pub title: String,

    /// Current description. GitHub reports an empty description as `null`.
    pub body: Option<String>,
}

/// Writes single fields of a pull request.
///
/// Each call is one remote mutation of exactly one field.
#[async_trait]
pub trait PullRequestStore: Send + Sync {
    /// Replaces the pull request title.
    async fn update_title(&self, pr: &PullRequestRef, title: &str) -> Result<(), StoreError>;

    /// Replaces the pull request description.
    async fn update_body(&self, pr: &PullRequestRef, body: &str) -> Result<(), StoreError>;
}
