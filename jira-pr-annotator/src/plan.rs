//! Pure decisions about how a pull request's title and body should change.

use crate::config::JiraBaseUrl;
use crate::issue_id::IssueId;
use crate::pull_requests::PullRequestSnapshot;

/// Marker that identifies a body which already links to Jira.
pub const JIRA_LINK_MARKER: &str = "JIRA Link:";

/// Separator placed between the Jira link and the original body.
const BODY_SEPARATOR: &str = "\n---\n";

/// The fields of a pull request that need rewriting.
///
/// A field is `Some` only when it differs from what is already there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement body.
    pub body: Option<String>,
}

impl UpdatePlan {
    /// Returns true if nothing needs to be written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// Plans both field updates for a snapshot.
#[must_use]
pub fn plan(
    snapshot: &PullRequestSnapshot,
    issue_id: &IssueId,
    jira_base_url: &JiraBaseUrl,
) -> UpdatePlan {
    UpdatePlan {
        title: plan_title_update(&snapshot.title, issue_id),
        body: plan_body_update(snapshot.body.as_deref(), issue_id, jira_base_url),
    }
}

/// Prefixes the title with the issue key unless the key already appears in it.
///
/// The containment check is a literal, case-sensitive substring match.
#[must_use]
pub fn plan_title_update(current_title: &str, issue_id: &IssueId) -> Option<String> {
    if current_title.contains(issue_id.as_str()) {
        return None;
    }
    Some(format!("{issue_id}: {current_title}"))
}

/// Prepends a Jira link to the body unless it already carries one.
///
/// Any body containing [`JIRA_LINK_MARKER`] counts as annotated, even if the
/// link points at a different issue.
#[must_use]
pub fn plan_body_update(
    current_body: Option<&str>,
    issue_id: &IssueId,
    jira_base_url: &JiraBaseUrl,
) -> Option<String> {
    let link = jira_link(issue_id, jira_base_url);

    match current_body {
        None | Some("") => Some(link),
        Some(body) if body.contains(JIRA_LINK_MARKER) => None,
        Some(body) => Some(format!("{link}{BODY_SEPARATOR}{body}")),
    }
}

/// Renders the markdown link to an issue.
#[must_use]
pub fn jira_link(issue_id: &IssueId, jira_base_url: &JiraBaseUrl) -> String {
    format!(
        "[{JIRA_LINK_MARKER} {issue_id}]({})",
        jira_base_url.browse_url(issue_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_id::derive_issue_id;

    fn id(raw: &str) -> IssueId {
        derive_issue_id(raw).unwrap()
    }

    fn base_url() -> JiraBaseUrl {
        JiraBaseUrl::parse("https://jira.example.com").unwrap()
    }

    #[test]
    fn prefixes_title_with_issue_id() {
        assert_eq!(
            plan_title_update("Fix bug", &id("ABC-123")),
            Some("ABC-123: Fix bug".to_string())
        );
    }

    #[test]
    fn skips_title_already_containing_issue_id() {
        assert_eq!(plan_title_update("ABC-123: Fix bug", &id("ABC-123")), None);
        assert_eq!(plan_title_update("Fix bug (ABC-123)", &id("ABC-123")), None);
    }

    #[test]
    fn title_containment_is_case_sensitive() {
        assert_eq!(
            plan_title_update("abc-123: Fix bug", &id("ABC-123")),
            Some("ABC-123: abc-123: Fix bug".to_string())
        );
    }

    #[test]
    fn title_update_is_idempotent() {
        let issue = id("ABC-123");
        for title in ["Fix bug", "", "ABC-12 partial", "ABC-123 done"] {
            let once = plan_title_update(title, &issue).unwrap_or_else(|| title.to_string());
            assert_eq!(plan_title_update(&once, &issue), None, "title: {title:?}");
        }
    }

    #[test]
    fn empty_body_becomes_link() {
        let expected = "[JIRA Link: ABC-123](https://jira.example.com/browse/ABC-123)";
        assert_eq!(
            plan_body_update(Some(""), &id("ABC-123"), &base_url()),
            Some(expected.to_string())
        );
        assert_eq!(
            plan_body_update(None, &id("ABC-123"), &base_url()),
            Some(expected.to_string())
        );
    }

    #[test]
    fn link_is_prepended_to_existing_body() {
        assert_eq!(
            plan_body_update(Some("Some description"), &id("ABC-123"), &base_url()),
            Some(
                "[JIRA Link: ABC-123](https://jira.example.com/browse/ABC-123)\n---\nSome description"
                    .to_string()
            )
        );
    }

    #[test]
    fn any_existing_link_marker_skips_body() {
        let body = "Intro\n\nJIRA Link: XYZ-1 somewhere";
        assert_eq!(plan_body_update(Some(body), &id("ABC-123"), &base_url()), None);
        assert_eq!(plan_body_update(Some(body), &id("XYZ-1"), &base_url()), None);
    }

    #[test]
    fn planned_body_is_not_annotated_twice() {
        let issue = id("ABC-123");
        let once = plan_body_update(Some("Body"), &issue, &base_url()).unwrap();
        assert_eq!(plan_body_update(Some(&once), &issue, &base_url()), None);
    }

    #[test]
    fn plans_both_fields() {
        let snapshot = PullRequestSnapshot {
            head_branch: "ABC-123/fix".to_string(),
            title: "ABC-123 Fix".to_string(),
            body: None,
        };
        let plan = plan(&snapshot, &id("ABC-123"), &base_url());

        assert_eq!(plan.title, None);
        assert!(plan.body.is_some());
        assert!(!plan.is_empty());
        assert!(UpdatePlan::default().is_empty());
    }
}
