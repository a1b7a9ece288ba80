//! Action configuration.
//!
//! This module holds the inputs a workflow passes to the action and
//! validates the Jira base URL used to build issue links.

mod error;
mod jira_base_url;

pub use error::ConfigError;
pub use jira_base_url::JiraBaseUrl;

use std::path::{Path, PathBuf};

/// Configuration for a single annotation run.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Jira instance that issue links point at.
    jira_base_url: JiraBaseUrl,
    /// Path to the webhook payload. `None` reads `GITHUB_EVENT_PATH`.
    event_path: Option<PathBuf>,
    /// Whether to log planned changes instead of writing them.
    dry_run: bool,
}

impl ActionConfig {
    /// Creates a new configuration for a run.
    pub fn new(token: String, jira_base_url: JiraBaseUrl) -> Self {
        Self {
            token,
            jira_base_url,
            event_path: None,
            dry_run: false,
        }
    }

    /// Reads the event payload from a fixed path.
    pub fn with_event_path(mut self, event_path: PathBuf) -> Self {
        self.event_path = Some(event_path);
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the Jira base URL.
    pub fn jira_base_url(&self) -> &JiraBaseUrl {
        &self.jira_base_url
    }

    /// Returns the configured event payload path, if any.
    pub fn event_path(&self) -> Option<&Path> {
        self.event_path.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
