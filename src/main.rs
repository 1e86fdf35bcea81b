//! Issue-triage CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use issue_triage::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assign(args) => issue_triage::cli::commands::assign::execute(args).await,
        Commands::Label(args) => issue_triage::cli::commands::label::execute(args).await,
    };

    if let Err(err) = result {
        issue_triage::cli::handle_error(&err, cli.json);
    }
}
