mod common;

use common::{fixture, RecordingStore, Write};
use jira_pr_annotator::{ActionConfig, EventError, JiraBaseUrl, Outcome, Runner, RunnerError};
use std::path::PathBuf;

fn config(event: PathBuf) -> ActionConfig {
    ActionConfig::new(
        "token".to_string(),
        JiraBaseUrl::parse("https://acme.atlassian.net").unwrap(),
    )
    .with_event_path(event)
}

#[tokio::test]
async fn annotates_pull_request_from_event_payload() {
    let store = RecordingStore::default();
    let runner = Runner::with_store(
        config(fixture("pull_request_opened.json")),
        Box::new(store.clone()),
    );

    let outcome = runner.run().await.unwrap();

    assert_eq!(outcome, Outcome::TitleAndBodyUpdated);
    assert_eq!(
        store.writes(),
        vec![
            Write::Title("AUTH-314: Fix login redirect".to_string()),
            Write::Body(
                "[JIRA Link: AUTH-314](https://acme.atlassian.net/browse/AUTH-314)\n---\n\
                 Redirects back to the page the user came from."
                    .to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn branch_without_issue_succeeds_without_writes() {
    let store = RecordingStore::default();
    let runner = Runner::with_store(
        config(fixture("pull_request_no_issue.json")),
        Box::new(store.clone()),
    );

    assert_eq!(runner.run().await.unwrap(), Outcome::NoIssueIdFound);
    assert_eq!(store.attempts(), 0);
}

#[tokio::test]
async fn push_event_is_rejected() {
    let store = RecordingStore::default();
    let runner = Runner::with_store(config(fixture("push.json")), Box::new(store.clone()));

    let result = runner.run().await;

    assert!(matches!(
        result,
        Err(RunnerError::Event(EventError::NotPullRequest))
    ));
    assert_eq!(store.attempts(), 0);
}

#[tokio::test]
async fn dry_run_writes_nothing() {
    let runner = Runner::new(config(fixture("pull_request_opened.json")).with_dry_run(true)).unwrap();

    assert_eq!(runner.run().await.unwrap(), Outcome::TitleAndBodyUpdated);
}
