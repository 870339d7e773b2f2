//! flowseg command-line entry point

use clap::Parser;
use flowseg_cli::commands::Commands;
use flowseg_cli::CliResult;

/// Extract sentences and standalone blocks from HTML documents
#[derive(Debug, Parser)]
#[command(name = "flowseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
