//! Annotation outcome types.

use serde::Serialize;

/// How an annotation run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The branch name does not start with an issue key. Nothing was written.
    NoIssueIdFound,

    /// Title and body already reference the issue.
    TitleAndBodyUnchanged,

    /// Only the title was rewritten.
    TitleUpdated,

    /// Only the body was rewritten.
    BodyUpdated,

    /// Both fields were rewritten.
    TitleAndBodyUpdated,

    /// A write failed. Earlier writes in the same run are kept.
    Failed {
        /// Error message from the store.
        reason: String,
    },
}

impl Outcome {
    /// Builds the success outcome for the writes that took place.
    #[must_use]
    pub fn from_writes(title_written: bool, body_written: bool) -> Self {
        match (title_written, body_written) {
            (false, false) => Self::TitleAndBodyUnchanged,
            (true, false) => Self::TitleUpdated,
            (false, true) => Self::BodyUpdated,
            (true, true) => Self::TitleAndBodyUpdated,
        }
    }

    /// Returns the outcome as a string for reporting.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoIssueIdFound => "no_issue_id_found",
            Self::TitleAndBodyUnchanged => "title_and_body_unchanged",
            Self::TitleUpdated => "title_updated",
            Self::BodyUpdated => "body_updated",
            Self::TitleAndBodyUpdated => "title_and_body_updated",
            Self::Failed { .. } => "failed",
        }
    }

    /// Returns true if the run should be reported as failing.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
