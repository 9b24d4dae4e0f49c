//! Filter command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, InputSource};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use isogram_core::{DuplicatePolicy, FilterConfig, FilterOutput, WordFilter};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Filter this text instead of reading files or stdin
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "ISOGRAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Decode two-digit hex tokens (e.g. `61` -> `a`) before filtering
    #[arg(long)]
    pub decode_hex: bool,

    /// Keep exact repeats of words already kept
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Filter input files concurrently
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One word per line
    Text,
    /// JSON array of words and statistics per input
    Json,
    /// Markdown formatted output
    Markdown,
}

impl FilterArgs {
    /// Execute the filter command
    pub fn execute(&self) -> CliResult<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting word filtering");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let filter = WordFilter::with_config(self.filter_config(&cli_config.filter));
        let format = self.output_format(&cli_config)?;
        let sources = self.sources()?;

        let results = self.run(&filter, &sources)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for (source, output) in &results {
            formatter.format_result(&source.name(), output)?;
        }
        formatter.finish()?;

        log::info!("Filtered {} input(s)", results.len());
        Ok(())
    }

    /// Merge command-line overrides into the configured filter rules
    pub fn filter_config(&self, base: &FilterConfig) -> FilterConfig {
        let mut builder = FilterConfig::builder()
            .decode_hex_pairs(base.decode_hex_pairs || self.decode_hex)
            .duplicates(base.duplicates);
        if self.keep_duplicates {
            builder = builder.duplicates(DuplicatePolicy::KeepAll);
        }
        builder.build()
    }

    /// Pick the output format from flags, then config
    pub fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Resolve the input sources: inline text, files, or stdin
    pub fn sources(&self) -> Result<Vec<InputSource>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputSource::Text(text.clone())]);
        }
        if self.input.is_empty() {
            return Ok(vec![InputSource::Stdin]);
        }
        Ok(resolve_patterns(&self.input)?
            .into_iter()
            .map(InputSource::File)
            .collect())
    }

    fn run<'a>(
        &self,
        filter: &WordFilter,
        sources: &'a [InputSource],
    ) -> Result<Vec<(&'a InputSource, FilterOutput)>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let filter_one = |source: &'a InputSource| -> Result<(&'a InputSource, FilterOutput)> {
            let text = source.read()?;
            let output = filter.filter_with_stats(&text);
            progress.file_completed(&source.name());
            Ok((source, output))
        };

        let results = if self.parallel && sources.len() > 1 {
            log::debug!("Filtering {} inputs in parallel", sources.len());
            sources.par_iter().map(filter_one).collect::<Result<Vec<_>>>()
        } else {
            sources.iter().map(filter_one).collect::<Result<Vec<_>>>()
        };

        progress.finish();
        results
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
