//! GitHub issue-tracker adapter.
//!
//! Implements the [`IssueApi`](crate::domain::ports::IssueApi) port
//! against the GitHub REST API v3: assignee addition, issue comments,
//! and label application.

pub mod client;
pub mod models;

pub use client::GitHubClient;
