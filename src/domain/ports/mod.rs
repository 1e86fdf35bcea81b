//! Domain port traits.

pub mod issues;

pub use issues::IssueApi;
