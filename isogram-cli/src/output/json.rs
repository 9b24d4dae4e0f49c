//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use isogram_core::{FilterOutput, FilterStats};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one record per input source as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<SourceResult>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceResult {
    /// Name of the input source
    pub source: String,
    /// Surviving words
    pub words: Vec<String>,
    /// Filtering counters
    pub stats: FilterStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, output: &FilterOutput) -> Result<()> {
        self.results.push(SourceResult {
            source: source.to_string(),
            words: output.words.clone(),
            stats: output.stats,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
