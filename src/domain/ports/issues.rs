//! Issue-tracker capability port.
//!
//! The triage procedures interact with the issue tracker exclusively
//! through this trait, keeping the decision logic decoupled from any
//! specific API client and independently testable against a fake.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::RepoRef;

/// Port for the issue-tracker operations the triage procedures invoke.
///
/// Implementations are expected to perform a single request per call
/// with no retries; failures surface as [`DomainResult`] errors and
/// propagate to the caller's own failure handling.
#[async_trait]
pub trait IssueApi: Send + Sync {
    /// Add assignees to an issue.
    async fn add_assignees(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        assignees: &[String],
    ) -> DomainResult<()>;

    /// Post a comment on an issue.
    async fn create_comment(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        body: &str,
    ) -> DomainResult<()>;

    /// Add labels to an issue.
    async fn add_labels(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        labels: &[String],
    ) -> DomainResult<()>;
}
