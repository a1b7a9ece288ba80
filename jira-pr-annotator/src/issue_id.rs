//! Jira issue identifiers derived from branch names.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Matches a `LETTERS-DIGITS` token at the very start of a branch name.
static BRANCH_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+-[0-9]+").expect("branch prefix pattern is valid")
});

/// A Jira issue key such as `ABC-123`.
///
/// The letters are matched case-insensitively and kept exactly as they
/// appear in the branch name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IssueId(String);

impl IssueId {
    /// Returns the issue key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IssueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extracts the issue key a branch name starts with.
///
/// Anything after the digits is ignored, so `ABC-123/fix-thing` yields
/// `ABC-123`. Returns `None` when the branch does not start with a key.
#[must_use]
pub fn derive_issue_id(branch_name: &str) -> Option<IssueId> {
    BRANCH_PREFIX
        .find(branch_name)
        .map(|m| IssueId(m.as_str().to_string()))
}
