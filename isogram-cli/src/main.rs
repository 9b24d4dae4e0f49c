//! `isogram` command-line entry point

use clap::Parser;
use isogram_cli::commands::Commands;
use isogram_cli::CliResult;

/// Keep only the words whose letters never repeat
#[derive(Debug, Parser)]
#[command(name = "isogram", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
