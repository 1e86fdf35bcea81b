//! CLI command implementations.
//!
//! Each triage procedure gets its own module with an `execute`
//! function; the helpers here resolve the pieces both commands need
//! (event payload, API client).

pub mod assign;
pub mod label;

use std::path::Path;

use anyhow::{Context, Result};

use crate::adapters::github::GitHubClient;
use crate::domain::models::{Config, IssueEvent};

/// Read and parse the issue-opened event payload from disk.
pub(crate) fn read_event(path: &Path) -> Result<IssueEvent> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event payload from {}", path.display()))?;
    let event = IssueEvent::parse(&raw)
        .with_context(|| format!("Failed to parse event payload from {}", path.display()))?;
    Ok(event)
}

/// Build the GitHub client from config, falling back to `GITHUB_TOKEN`.
pub(crate) fn github_client(config: &Config) -> Result<GitHubClient> {
    let client = match &config.github.token {
        Some(token) if !token.is_empty() => GitHubClient::new(token.clone()),
        _ => GitHubClient::from_env().context("No GitHub token configured")?,
    };
    Ok(client)
}
