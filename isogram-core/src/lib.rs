//! Isogram word filter
//!
//! Tokenizes arbitrary Unicode text into words, normalizes them to ASCII
//! letters and word-internal hyphens, and keeps only the words whose letters
//! are pairwise distinct when case is ignored (isograms).
//!
//! # Pipeline
//!
//! - **Hex-pair decoding** (optional): `61` → `a`
//! - **Normalization**: canonical decomposition, then every character other
//!   than an ASCII letter, a hyphen or whitespace is removed
//! - **Tokenization**: whitespace split; edge hyphens trimmed, empty tokens
//!   dropped
//! - **Repetition filter**: words with a repeated letter, and exact repeats of
//!   an already kept word, are dropped
//!
//! # Example
//!
//! ```rust
//! use isogram_core::{FilterConfig, WordFilter};
//!
//! let filter = WordFilter::with_config(FilterConfig::default());
//! let words = filter.filter("marinara nori joker Sheffield Worcestershire mango Kuwait");
//! assert_eq!(words, vec!["nori", "joker", "mango", "Kuwait"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;
pub mod processor;

// Re-export key types
pub use config::{FilterConfig, FilterConfigBuilder};
pub use domain::{AsciiClassifier, CharClass, CharacterClassifier, DuplicatePolicy, Verdict};
pub use error::{FilterError, Result};
pub use processor::{FilterOutput, FilterStats, WordFilter};

/// Filter text with the default configuration
pub fn isogram_words(text: &str) -> Vec<String> {
    WordFilter::new().filter(text)
}
