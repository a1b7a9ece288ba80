//! Pull request store error types.

use thiserror::Error;

/// Errors that can occur while writing to a pull request.
#[derive(Debug, Error)]
pub enum StoreError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The store refused the write.
    #[error("{message}")]
    Rejected { message: String },
}
