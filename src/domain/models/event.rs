//! Issue-opened event payload models.
//!
//! These structs map to the subset of the GitHub webhook/Actions event
//! JSON that the triage procedures consume. Parsing is fail-fast: a
//! payload missing any required field is rejected up front rather than
//! silently triaged with defaults.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// The issue being triaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRef {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    /// Issue title, the sole input to label classification.
    pub title: String,
}

/// Identity of the repository the issue belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository owner (user or organisation login).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoRef {
    /// The full repository path (`owner/repo`), used in log lines.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Owner object nested inside the event's repository record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerPayload {
    /// The owner's login name.
    pub login: String,
}

/// Repository record as delivered in the event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryPayload {
    /// Repository name without the owner prefix.
    pub name: String,
    /// Nested owner object.
    pub owner: OwnerPayload,
}

/// An issue-opened event as delivered by the hosting automation.
///
/// Only the fields the triage procedures read are modelled; everything
/// else in the host payload is ignored by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueEvent {
    /// The issue the event refers to.
    pub issue: IssueRef,
    /// The repository the event was raised in.
    pub repository: RepositoryPayload,
}

impl IssueEvent {
    /// Parse an event payload from its JSON text.
    ///
    /// Returns `Err(ValidationFailed)` when the payload is malformed or
    /// any required field (`issue.number`, `issue.title`,
    /// `repository.name`, `repository.owner.login`) is absent.
    pub fn parse(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            DomainError::ValidationFailed(format!("malformed issue event payload: {e}"))
        })
    }

    /// The repository identity extracted from the payload.
    pub fn repo_ref(&self) -> RepoRef {
        RepoRef {
            owner: self.repository.owner.login.clone(),
            repo: self.repository.name.clone(),
        }
    }
}
