//! Excerpt command-line entry point

use anyhow::Result;
use clap::Parser;
use excerpt_cli::commands::Commands;

/// Extractive TextRank summarization
#[derive(Debug, Parser)]
#[command(name = "excerpt")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
