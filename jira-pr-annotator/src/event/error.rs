//! Event payload error types.

use thiserror::Error;

/// Errors that can occur while loading the triggering event.
#[derive(Debug, Error)]
pub enum EventError {
    /// `GITHUB_EVENT_PATH` is not set.
    #[error("Environment variable not set: {name}")]
    MissingEnv { name: &'static str },

    /// Failed to read the payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the payload JSON.
    #[error("Failed to parse event payload '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The event carries no pull request.
    #[error("This action can only be run on pull request events.")]
    NotPullRequest,
}
