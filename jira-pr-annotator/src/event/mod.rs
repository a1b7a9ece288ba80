//! Triggering event loading.
//!
//! GitHub writes the webhook payload of the event that started the workflow
//! to the file named by `GITHUB_EVENT_PATH`. Only the handful of fields the
//! annotator needs are deserialized.

mod error;

pub use error::EventError;

use crate::pull_requests::{PullRequestRef, PullRequestSnapshot};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the payload path.
pub const EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
    repository: RepositoryPayload,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    title: String,
    body: Option<String>,
    head: HeadPayload,
}

#[derive(Debug, Deserialize)]
struct HeadPayload {
    #[serde(rename = "ref")]
    branch: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

/// The pull request an event refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// Which pull request to modify.
    pub pr: PullRequestRef,
    /// Its state when the event fired.
    pub snapshot: PullRequestSnapshot,
}

impl PullRequestEvent {
    /// Parses a webhook payload.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NotPullRequest`] for payloads without a pull
    /// request and [`EventError::JsonError`] for malformed JSON.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, EventError> {
        let payload: EventPayload =
            serde_json::from_str(json).map_err(|source| EventError::JsonError {
                path: origin.to_string(),
                source,
            })?;

        let pull_request = payload.pull_request.ok_or(EventError::NotPullRequest)?;

        Ok(Self {
            pr: PullRequestRef {
                owner: payload.repository.owner.login,
                repo: payload.repository.name,
                number: pull_request.number,
            },
            snapshot: PullRequestSnapshot {
                head_branch: pull_request.head.branch,
                title: pull_request.title,
                body: pull_request.body,
            },
        })
    }

    /// Loads a webhook payload from disk.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] if the file can't be read or isn't a pull
    /// request event.
    pub fn load(path: &Path) -> Result<Self, EventError> {
        debug!(path = %path.display(), "Loading event payload");

        let json = std::fs::read_to_string(path).map_err(|source| EventError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&json, &path.display().to_string())
    }

    /// Loads the payload named by `GITHUB_EVENT_PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingEnv`] if the variable is unset, otherwise
    /// the errors of [`PullRequestEvent::load`].
    pub fn load_from_env() -> Result<Self, EventError> {
        let path = std::env::var_os(EVENT_PATH_ENV).ok_or(EventError::MissingEnv {
            name: EVENT_PATH_ENV,
        })?;
        Self::load(Path::new(&path))
    }
}
