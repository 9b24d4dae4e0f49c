//! Word filter driver
//!
//! Orchestrates decoding, normalization, tokenization and the repetition
//! filter for one input at a time.

use crate::config::FilterConfig;
use crate::domain::{
    AsciiClassifier, CharacterClassifier, HexPairDecoder, Normalizer, RepetitionFilter, Tokenizer,
    Verdict,
};
use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// Counters describing one filtering call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Non-empty candidate words produced by the tokenizer
    pub candidates: usize,
    /// Candidates dropped for a repeated letter
    pub repeated_letter_drops: usize,
    /// Candidates dropped as exact repeats of a kept word
    pub duplicate_drops: usize,
}

impl FilterStats {
    /// Number of words that survived
    pub fn kept(&self) -> usize {
        self.candidates
            .saturating_sub(self.repeated_letter_drops)
            .saturating_sub(self.duplicate_drops)
    }
}

/// Surviving words plus statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOutput {
    /// Surviving words in input order
    pub words: Vec<String>,
    /// Per-call counters
    pub stats: FilterStats,
}

/// Keeps the words of a text whose letters are all distinct
///
/// A filter holds only immutable configuration; it is cheap to clone and can
/// be shared across threads. Each call builds its own buffers.
///
/// ```
/// use isogram_core::WordFilter;
///
/// let filter = WordFilter::new();
/// let words = filter.filter("na-do - ko-ko, kan-ryo-chi!");
/// assert_eq!(words, vec!["na-do", "kan-ryo-chi"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordFilter {
    config: FilterConfig,
    decoder: HexPairDecoder,
    normalizer: Normalizer,
    tokenizer: Tokenizer,
    repetition: RepetitionFilter,
}

impl WordFilter {
    /// Create a filter with the default configuration
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default())
    }

    /// Create a filter with a custom configuration
    pub fn with_config(config: FilterConfig) -> Self {
        Self::with_classifier(config, Arc::new(AsciiClassifier::new()))
    }

    /// Create a filter with a custom configuration and character classifier
    pub fn with_classifier(
        config: FilterConfig,
        classifier: Arc<dyn CharacterClassifier>,
    ) -> Self {
        Self {
            decoder: HexPairDecoder::new(),
            normalizer: Normalizer::new(Arc::clone(&classifier)),
            tokenizer: Tokenizer::new(Arc::clone(&classifier)),
            repetition: RepetitionFilter::new(classifier, config.duplicates),
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter `text`, returning the surviving words in input order
    pub fn filter(&self, text: &str) -> Vec<String> {
        self.filter_with_stats(text).words
    }

    /// Filter text that may be absent
    ///
    /// Absent input is reported as [`FilterError::MissingInput`], which keeps
    /// it distinguishable from empty or all-symbol input (both yield
    /// `Ok(vec![])`).
    pub fn try_filter(&self, text: Option<&str>) -> Result<Vec<String>> {
        text.map(|text| self.filter(text))
            .ok_or(FilterError::MissingInput)
    }

    /// Filter `text` and report what was dropped
    pub fn filter_with_stats(&self, text: &str) -> FilterOutput {
        let decoded = if self.config.decode_hex_pairs {
            self.decoder.decode(text)
        } else {
            Cow::Borrowed(text)
        };
        let normalized = self.normalizer.normalize(&decoded);
        let candidates = self.tokenizer.tokenize(&normalized);

        let mut output = FilterOutput {
            words: Vec::with_capacity(candidates.len()),
            stats: FilterStats {
                candidates: candidates.len(),
                ..Default::default()
            },
        };

        let mut pass = self.repetition.pass();
        for candidate in candidates {
            match pass.judge(&candidate) {
                Verdict::Keep => output.words.push(candidate.into_owned()),
                Verdict::RepeatedLetter(letter) => {
                    log::trace!("dropped {candidate:?}: letter {letter:?} repeats");
                    output.stats.repeated_letter_drops += 1;
                }
                Verdict::Duplicate => {
                    log::trace!("dropped {candidate:?}: already kept");
                    output.stats.duplicate_drops += 1;
                }
            }
        }

        log::debug!(
            "kept {} of {} candidate words ({} repeated letters, {} duplicates)",
            output.words.len(),
            output.stats.candidates,
            output.stats.repeated_letter_drops,
            output.stats.duplicate_drops
        );
        output
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new()
    }
}
