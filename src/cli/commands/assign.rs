//! Assignment notifier CLI command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::infrastructure::config::ConfigLoader;
use crate::triage;

use super::{github_client, read_event};

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Path to the issue-opened event payload JSON
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_file: PathBuf,
}

/// Execute the assignment notifier against the event's issue.
pub async fn execute(args: AssignArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let event = read_event(&args.event_file)?;
    let client = github_client(&config)?;

    let repo = event.repo_ref();
    let mut rng = rand::thread_rng();

    triage::assign::run(&client, &repo, &event.issue, &mut rng)
        .await
        .with_context(|| {
            format!(
                "Assignment failed for issue #{} in {}",
                event.issue.number,
                repo.full_name()
            )
        })?;

    Ok(())
}
