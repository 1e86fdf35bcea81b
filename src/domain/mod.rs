//! Domain layer: errors, models, and ports.
//!
//! Everything in this module is pure: no I/O, no HTTP, no clocks. The
//! triage procedures depend on the [`ports::IssueApi`] trait rather than
//! any concrete issue-tracker client.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
pub use models::{Config, GithubConfig, IssueEvent, IssueRef, LoggingConfig, RepoRef};
pub use ports::IssueApi;
