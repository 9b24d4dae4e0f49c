//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod filter;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Keep the words whose letters never repeat
    Filter(filter::FilterArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with default settings
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check that a configuration file is valid
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List duplicate-word policies
    Policies,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Filter(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        for (name, description) in self.entries() {
            println!("{name:<15} {description}");
        }
    }

    fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ListCommands::Formats => &[
                ("text", "One word per line"),
                ("json", "JSON array of words and statistics per input"),
                ("markdown", "Numbered word list per input"),
            ],
            ListCommands::Policies => &[
                ("drop_repeated", "Drop exact repeats of a word already kept (default)"),
                ("keep_all", "Keep every occurrence"),
            ],
        }
    }
}
