//! Command-line entry point for rust-beer-score.

use anyhow::Result;
use clap::Parser;
use rust_beer_score::cli::{cmd_info, cmd_prepare, cmd_score, Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score(args) => cmd_score(args)?,
        Command::Prepare(args) => cmd_prepare(args)?,
        Command::Info => cmd_info(),
    }

    Ok(())
}
