//! Triage procedures for freshly opened issues.
//!
//! Two independent, stateless procedures, each a single pass over the
//! issue context followed by calls on the [`IssueApi`] port:
//!
//! - [`assign`]: pick a maintainer at random, assign them, and post an
//!   acknowledgment comment.
//! - [`labels`]: match the issue title against a static keyword table
//!   and apply the resulting labels (or a fallback).
//!
//! The procedures share no state and may run in either order; the
//! hosting automation invokes each on its own issue-opened trigger.
//!
//! [`IssueApi`]: crate::domain::ports::IssueApi

pub mod assign;
pub mod labels;

pub use assign::{acknowledgment_body, pick_assignee, MAINTAINERS};
pub use labels::{classify_title, FALLBACK_LABEL, LABEL_RULES};
