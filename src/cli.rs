//! Command-line interface for warfront.

use clap::Parser;
use std::path::PathBuf;

/// Warfront - turn-based territorial conquest with secret missions
#[derive(Parser, Debug)]
#[command(name = "warfront")]
#[command(about = "Turn-based territorial conquest with secret missions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the session's random number generator (reproducible campaigns)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File the tracing output is written to (the TUI owns the terminal)
    #[arg(long, default_value = "warfront.log")]
    pub log_file: PathBuf,
}
