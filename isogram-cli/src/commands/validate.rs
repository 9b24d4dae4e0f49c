//! Validate command implementation

use crate::commands::filter::OutputFormat;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Decode hex pairs: {}", config.filter.decode_hex_pairs);
                println!("  Duplicates: {}", config.filter.duplicates);
                println!("  Default format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    /// Load the file and check values serde cannot
    fn check(path: &std::path::Path) -> Result<CliConfig> {
        let config = CliConfig::load(path)?;
        if OutputFormat::from_str(&config.output.default_format, true).is_err() {
            return Err(CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into());
        }
        Ok(config)
    }
}
