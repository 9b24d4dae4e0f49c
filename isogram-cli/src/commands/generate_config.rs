//! Generate config command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!();
        println!("Use it for filtering:");
        println!(
            "   isogram filter -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml_string()?;
        Ok(format!(
            r#"# isogram configuration
#
# [filter]
#   decode_hex_pairs: decode two-digit hex tokens ("61" -> "a") before filtering
#   duplicates:       "drop_repeated" drops exact repeats of a kept word,
#                     "keep_all" keeps every occurrence
# [output]
#   default_format:   "text", "json" or "markdown"
#   pretty_json:      indent JSON output

{body}"#
        ))
    }
}
