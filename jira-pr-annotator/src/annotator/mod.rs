//! Pull request annotation.
//!
//! This module ties the pure planning functions to a [`PullRequestStore`]:
//! it derives the issue key from the head branch, then rewrites the title
//! and the body, in that order, only where they don't reference the issue
//! yet.

mod outcome;

pub use outcome::Outcome;

use crate::config::JiraBaseUrl;
use crate::issue_id::derive_issue_id;
use crate::plan::plan;
use crate::pull_requests::{PullRequestRef, PullRequestSnapshot, PullRequestStore};
use tracing::{error, info, info_span, warn, Instrument};

/// Annotates a pull request with the issue key found in its branch name.
///
/// The title is written before the body. A failed write ends the run with
/// [`Outcome::Failed`] and is not retried; a title written before a failed
/// body write stays in place.
///
/// If the body already carries a Jira link the run ends right after the
/// title step, without the final success report.
///
/// # Arguments
///
/// * `pr` - Pull request to modify
/// * `snapshot` - Its state when the event fired
/// * `jira_base_url` - Jira instance to link to
/// * `store` - Where writes go
pub async fn run<S>(
    pr: &PullRequestRef,
    snapshot: &PullRequestSnapshot,
    jira_base_url: &JiraBaseUrl,
    store: &S,
) -> Outcome
where
    S: PullRequestStore + ?Sized,
{
    let span = info_span!("annotate", pr = %pr, branch = %snapshot.head_branch);

    async {
        let Some(issue_id) = derive_issue_id(&snapshot.head_branch) else {
            warn!(
                "No Jira issue ID found in branch name. Branch format should be ISSUE-123/description"
            );
            return Outcome::NoIssueIdFound;
        };
        info!(issue_id = %issue_id, "Found Jira issue ID");

        let plan = plan(snapshot, &issue_id, jira_base_url);

        let title_written = match plan.title {
            Some(title) => {
                info!(title = %title, "Updating PR title");
                if let Err(e) = store.update_title(pr, &title).await {
                    error!(error = %e, "Failed to update PR title");
                    return Outcome::Failed {
                        reason: e.to_string(),
                    };
                }
                true
            }
            None => {
                info!("PR title already contains Jira issue ID. Skipping title update.");
                false
            }
        };

        let Some(body) = plan.body else {
            info!("PR body already contains Jira link. Skipping body update.");
            return Outcome::from_writes(title_written, false);
        };

        info!("Updating PR body with Jira information");
        if let Err(e) = store.update_body(pr, &body).await {
            error!(error = %e, "Failed to update PR body");
            return Outcome::Failed {
                reason: e.to_string(),
            };
        }

        info!("PR updated successfully with Jira information");
        Outcome::from_writes(title_written, true)
    }
    .instrument(span)
    .await
}
