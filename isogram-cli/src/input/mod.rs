//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Where a piece of text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Text given on the command line
    Text(String),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Display name used in output
    pub fn name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Text(_) => "<text>".to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read the full text of this source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
                Ok(text)
            }
        }
    }
}
