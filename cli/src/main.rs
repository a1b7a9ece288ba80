//! CLI for the Jira PR Annotator.
//!
//! Reads the pull request event that triggered the workflow, then prefixes
//! its title with the Jira issue key from the branch name and links the
//! issue in its description.

use clap::Parser;
use jira_pr_annotator::{ActionConfig, JiraBaseUrl, Outcome, Runner, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Jira PR Annotator - Link pull requests to the Jira issue named by their branch.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token with pull-requests write permission.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// Base URL of the Jira instance, e.g. https://company.atlassian.net.
    #[arg(long, env = "JIRA_BASE_URL", value_parser = JiraBaseUrl::parse)]
    jira_base_url: JiraBaseUrl,

    /// Path to the webhook payload of the triggering event.
    /// Defaults to the file named by `GITHUB_EVENT_PATH`.
    #[arg(long)]
    event_path: Option<PathBuf>,

    /// Log the changes instead of writing them.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => {
            report(&outcome);
            if outcome.is_failure() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            workflow_command("error", &format!("Action failed: {e}"));
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with a compact formatter and `RUST_LOG` filtering
/// (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<Outcome, RunnerError> {
    let mut config =
        ActionConfig::new(args.github_token, args.jira_base_url).with_dry_run(args.dry_run);
    if let Some(path) = args.event_path {
        config = config.with_event_path(path);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the outcome and surfaces it as a workflow annotation.
fn report(outcome: &Outcome) {
    println!("\nOutcome: {}", outcome.as_str());

    match outcome {
        Outcome::NoIssueIdFound => workflow_command(
            "warning",
            "No Jira issue ID found in branch name. Branch format should be ISSUE-123/description",
        ),
        Outcome::Failed { reason } => {
            workflow_command("error", &format!("Action failed: {reason}"));
        }
        _ => {}
    }
}

/// Emits a GitHub Actions workflow command when running inside Actions.
fn workflow_command(command: &str, message: &str) {
    if std::env::var_os("GITHUB_ACTIONS").is_none() {
        return;
    }
    println!("::{command}::{}", escape_data(message));
}

/// Escapes a workflow command message.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
