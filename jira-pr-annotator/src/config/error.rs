//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while validating action inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The Jira base URL could not be parsed.
    #[error("Invalid Jira base URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The Jira base URL parsed but cannot host `/browse/` links.
    #[error("Invalid Jira base URL '{value}': {message}")]
    ValidationError { value: String, message: String },
}
