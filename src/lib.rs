//! Issue Triage - Incoming Issue Automation
//!
//! Issue-triage is a small automation suite run against freshly opened
//! issues: it assigns each issue to a randomly chosen maintainer (with an
//! acknowledgment comment) and applies classification labels derived from
//! keyword matches on the issue title.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): errors, typed event payloads, and the
//!   issue-tracker capability port
//! - **Triage Layer** (`triage`): the assignment and labeling procedures
//!   and their static decision tables
//! - **Adapter Layer** (`adapters`): the GitHub REST implementation of the
//!   capability port
//! - **Infrastructure Layer** (`infrastructure`): configuration loading
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use issue_triage::adapters::github::GitHubClient;
//! use issue_triage::triage;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GitHubClient::from_env()?;
//!     // Run the label classifier for issue #42 of octocat/hello-world
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod triage;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{Config, GithubConfig, IssueEvent, IssueRef, LoggingConfig, RepoRef};
pub use domain::ports::IssueApi;
pub use infrastructure::config::{ConfigError, ConfigLoader};
