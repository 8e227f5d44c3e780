//! Tally CLI - Personal finance ledger
//!
//! Usage:
//!   tally init                Initialize the database
//!   tally import --file CSV   Bulk-import transactions
//!   tally serve --port 8080   Start the web server

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Import { file } => commands::cmd_import(&cli.db, &file),
        Commands::Serve { host, port } => commands::cmd_serve(&cli.db, &host, port).await,
    }
}
