#![allow(dead_code)]

use async_trait::async_trait;
use jira_pr_annotator::{PullRequestRef, PullRequestStore, StoreError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/events")
        .join(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    Title(String),
    Body(String),
}

/// Records successful writes and fails the fields it is told to.
///
/// Clones share their records, so a clone can be boxed into a runner while
/// the test keeps the original for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    pub fail_title: bool,
    pub fail_body: bool,
    writes: Arc<Mutex<Vec<Write>>>,
    attempts: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn failing_body() -> Self {
        Self {
            fail_body: true,
            ..Self::default()
        }
    }

    pub fn failing_title() -> Self {
        Self {
            fail_title: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn record(&self, fail: bool, write: Write) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if fail {
            return Err(StoreError::Rejected {
                message: "Resource not accessible by integration".to_string(),
            });
        }
        self.writes.lock().unwrap().push(write);
        Ok(())
    }
}

#[async_trait]
impl PullRequestStore for RecordingStore {
    async fn update_title(&self, _pr: &PullRequestRef, title: &str) -> Result<(), StoreError> {
        self.record(self.fail_title, Write::Title(title.to_string()))
    }

    async fn update_body(&self, _pr: &PullRequestRef, body: &str) -> Result<(), StoreError> {
        self.record(self.fail_body, Write::Body(body.to_string()))
    }
}
