//! Warfront binary entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warfront::cli::Cli;
use warfront::{GameSession, tui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file: the TUI owns the terminal.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(seed = ?cli.seed, "Starting warfront");

    let session = GameSession::new(cli.seed);
    tui::run(session)
}
