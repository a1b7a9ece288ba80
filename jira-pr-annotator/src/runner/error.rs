//! Runner error types.

/// Errors that stop a run before any annotation is attempted.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The triggering event could not be loaded.
    #[error(transparent)]
    Event(#[from] crate::event::EventError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
