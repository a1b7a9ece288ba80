//! Validated Jira instance URL.

use crate::config::ConfigError;
use crate::issue_id::IssueId;
use std::fmt;
use url::Url;

/// Base URL of a Jira instance, e.g. `https://company.atlassian.net`.
///
/// The input is validated as an absolute http(s) URL but kept verbatim, so
/// links are built from exactly what the workflow supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraBaseUrl(String);

impl JiraBaseUrl {
    /// Validates and wraps a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the value is not an absolute http(s) URL.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
            value: value.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                value: value.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::ValidationError {
                value: value.to_string(),
                message: "must not contain a query or fragment".to_string(),
            });
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the URL exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `/browse/` URL for an issue.
    #[must_use]
    pub fn browse_url(&self, issue_id: &IssueId) -> String {
        format!("{}/browse/{issue_id}", self.0)
    }
}

impl fmt::Display for JiraBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_id::derive_issue_id;

    #[test]
    fn builds_browse_url() {
        let url = JiraBaseUrl::parse("https://jira.example.com").unwrap();
        let id = derive_issue_id("ABC-123").unwrap();
        assert_eq!(url.browse_url(&id), "https://jira.example.com/browse/ABC-123");
    }

    #[test]
    fn keeps_value_verbatim() {
        let url = JiraBaseUrl::parse("https://example.com/jira").unwrap();
        assert_eq!(url.as_str(), "https://example.com/jira");
    }

    #[test]
    fn rejects_relative_url() {
        assert!(matches!(
            JiraBaseUrl::parse("jira.example.com"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            JiraBaseUrl::parse("ftp://jira.example.com"),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_query() {
        assert!(matches!(
            JiraBaseUrl::parse("https://jira.example.com?a=b"),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
