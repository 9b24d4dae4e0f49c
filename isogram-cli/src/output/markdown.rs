//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use isogram_core::FilterOutput;
use std::io::Write;

/// Markdown formatter - outputs a numbered list of words per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, output: &FilterOutput) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for (index, word) in output.words.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, word)?;
        }
        if output.words.is_empty() {
            writeln!(self.writer, "*No words kept*")?;
        }
        writeln!(self.writer)?;
        self.word_count += output.words.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
