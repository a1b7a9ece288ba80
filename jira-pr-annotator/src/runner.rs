//! Wires configuration, the triggering event and a store into one run.

mod error;

pub use error::RunnerError;

use crate::annotator::{self, Outcome};
use crate::config::ActionConfig;
use crate::event::{EventError, PullRequestEvent, EVENT_PATH_ENV};
use crate::pull_requests::{DryRunStore, GitHubStore, PullRequestStore};
use octocrab::Octocrab;
use tracing::info;

/// Runs the annotator for the pull request that triggered the workflow.
pub struct Runner {
    config: ActionConfig,
    store: Box<dyn PullRequestStore>,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// In dry-run mode no GitHub client is created and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the GitHub client can't be built.
    pub fn new(config: ActionConfig) -> Result<Self, RunnerError> {
        let store: Box<dyn PullRequestStore> = if config.dry_run() {
            Box::new(DryRunStore)
        } else {
            let octocrab = Octocrab::builder()
                .personal_token(config.token().to_string())
                .build()?;
            Box::new(GitHubStore::new(octocrab))
        };
        Ok(Self::with_store(config, store))
    }

    /// Builds a runner that writes through a custom store.
    pub fn with_store(config: ActionConfig, store: Box<dyn PullRequestStore>) -> Self {
        Self { config, store }
    }

    /// Loads the event and annotates its pull request.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Event`] if the event payload can't be loaded.
    /// Failed writes are reported through [`Outcome::Failed`] instead.
    pub async fn run(&self) -> Result<Outcome, RunnerError> {
        let event = self.load_event()?;

        if self.config.dry_run() {
            info!(pr = %event.pr, "Dry run, no changes will be written");
        }

        Ok(annotator::run(
            &event.pr,
            &event.snapshot,
            self.config.jira_base_url(),
            self.store.as_ref(),
        )
        .await)
    }

    /// Loads the configured payload, falling back to `GITHUB_EVENT_PATH`.
    fn load_event(&self) -> Result<PullRequestEvent, EventError> {
        match self.config.event_path() {
            Some(path) => {
                info!(path = %path.display(), "Loading event payload");
                PullRequestEvent::load(path)
            }
            None => {
                info!(env = EVENT_PATH_ENV, "Loading event payload from environment");
                PullRequestEvent::load_from_env()
            }
        }
    }
}
