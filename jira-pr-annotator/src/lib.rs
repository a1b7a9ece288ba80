#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod annotator;
pub mod config;
pub mod event;
pub mod issue_id;
pub mod plan;
pub mod pull_requests;
pub mod rate_limit;
pub mod runner;

pub use annotator::{run, Outcome};
pub use config::{ActionConfig, ConfigError, JiraBaseUrl};
pub use event::{EventError, PullRequestEvent};
pub use issue_id::{derive_issue_id, IssueId};
pub use plan::{jira_link, plan, plan_body_update, plan_title_update, UpdatePlan};
pub use pull_requests::{
    DryRunStore, GitHubStore, PullRequestRef, PullRequestSnapshot, PullRequestStore, StoreError,
};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use runner::{Runner, RunnerError};
