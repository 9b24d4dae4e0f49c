//! Unicode to ASCII letter/hyphen normalization

use super::classifier::CharacterClassifier;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Maps arbitrary text onto the letter/hyphen/whitespace alphabet
///
/// The text is canonically decomposed first, so `À` becomes `A` followed by
/// a combining grave accent. Every character the classifier rejects is
/// removed in place: it neither contributes a letter nor splits a word, and a
/// token built only from rejected characters ends up empty.
#[derive(Clone)]
pub struct Normalizer {
    classifier: Arc<dyn CharacterClassifier>,
}

impl Normalizer {
    /// Create a normalizer using the given classifier
    pub fn new(classifier: Arc<dyn CharacterClassifier>) -> Self {
        Self { classifier }
    }

    /// Normalize `text`, keeping whitespace where it was
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = String::with_capacity(text.len());
        let mut rejected = 0usize;

        for ch in text.nfd() {
            if self.classifier.is_rejected(ch) {
                rejected += 1;
            } else {
                normalized.push(ch);
            }
        }

        if rejected > 0 {
            log::trace!("normalization removed {rejected} characters");
        }
        normalized
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}
