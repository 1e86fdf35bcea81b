//! GitHub HTTP client.
//!
//! Wraps the GitHub REST API v3, providing typed methods for the three
//! operations the triage procedures use. Requests are single-shot: no
//! retries and no rate limiting, matching the fire-and-forget contract
//! of the triage run.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::RepoRef;
use crate::domain::ports::IssueApi;

use super::models::{AddAssigneesRequest, AddLabelsRequest, CommentRequest};

/// Base URL for the GitHub REST API v3.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`DomainResult`] and map HTTP / network errors
/// to [`DomainError::ExecutionFailed`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// GitHub personal access token or fine-grained token.
    token: String,
    /// API base URL; overridable so tests can point at a local server.
    base_url: String,
}

impl GitHubClient {
    /// Create a new client with the given token.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE.to_string())
    }

    /// Create a client against a non-default API base URL.
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            token,
            base_url,
        }
    }

    /// Create a client by reading the `GITHUB_TOKEN` environment variable.
    ///
    /// Returns `Err(MissingCredentials)` if the variable is not set or
    /// is empty.
    pub fn from_env() -> DomainResult<Self> {
        let token = std::env::var("GITHUB_TOKEN").map_err(|_| {
            DomainError::MissingCredentials(
                "GITHUB_TOKEN environment variable is not set".to_string(),
            )
        })?;
        if token.is_empty() {
            return Err(DomainError::MissingCredentials(
                "GITHUB_TOKEN environment variable is empty".to_string(),
            ));
        }
        Ok(Self::new(token))
    }

    /// Build an authorized POST request with the standard header set.
    fn authorized_post(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "issue-triage")
    }

    /// POST a JSON body to an issue sub-resource and discard the
    /// response body on success.
    async fn post_issue_resource<B: Serialize>(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        resource: &str,
        body: &B,
        operation: &str,
    ) -> DomainResult<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/{}",
            self.base_url, repo.owner, repo.repo, issue_number, resource
        );

        let resp = self
            .authorized_post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                DomainError::ExecutionFailed(format!("GitHub {operation} request failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExecutionFailed(format!(
                "GitHub {operation} returned {status}: {body_text}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl IssueApi for GitHubClient {
    async fn add_assignees(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        assignees: &[String],
    ) -> DomainResult<()> {
        let body = AddAssigneesRequest {
            assignees: assignees.to_vec(),
        };
        self.post_issue_resource(repo, issue_number, "assignees", &body, "add_assignees")
            .await
    }

    async fn create_comment(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        body: &str,
    ) -> DomainResult<()> {
        let body = CommentRequest {
            body: body.to_string(),
        };
        self.post_issue_resource(repo, issue_number, "comments", &body, "create_comment")
            .await
    }

    async fn add_labels(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        labels: &[String],
    ) -> DomainResult<()> {
        let body = AddLabelsRequest {
            labels: labels.to_vec(),
        };
        self.post_issue_resource(repo, issue_number, "labels", &body, "add_labels")
            .await
    }
}
