//! Command-line interface.
//!
//! One subcommand per triage procedure. The hosting automation invokes
//! the binary with the event payload path supplied via `--event-file`
//! or the `GITHUB_EVENT_PATH` environment variable.

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::assign::AssignArgs;
pub use commands::label::LabelArgs;

#[derive(Parser)]
#[command(name = "issue-triage")]
#[command(about = "Issue triage automation for incoming issues", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output errors in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign the issue to a random maintainer and post an acknowledgment
    Assign(AssignArgs),

    /// Apply classification labels derived from the issue title
    Label(LabelArgs),
}

/// Report a fatal error and exit nonzero so the hosting automation
/// marks the run failed.
pub fn handle_error(err: &anyhow::Error, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
