//! Whitespace tokenizer for normalized text

use super::classifier::CharacterClassifier;
use std::borrow::Cow;
use std::sync::Arc;

/// Splits normalized text into candidate words
///
/// A hyphen only survives as a joiner between letters: hyphens at either end
/// of a token are trimmed, so a standalone `-` disappears, and runs of
/// interior hyphens collapse to one.
#[derive(Clone)]
pub struct Tokenizer {
    classifier: Arc<dyn CharacterClassifier>,
}

impl Tokenizer {
    /// Create a tokenizer using the given classifier
    pub fn new(classifier: Arc<dyn CharacterClassifier>) -> Self {
        Self { classifier }
    }

    /// Split `text` into non-empty candidate words, in input order
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        text.split(|ch: char| self.classifier.is_whitespace(ch))
            .filter_map(|raw| self.clean(raw))
            .collect()
    }

    /// Trim edge hyphens and collapse interior hyphen runs
    fn clean<'a>(&self, raw: &'a str) -> Option<Cow<'a, str>> {
        let trimmed = raw.trim_matches(|ch: char| self.classifier.is_hyphen(ch));
        if trimmed.is_empty() {
            return None;
        }

        let mut previous_hyphen = false;
        let has_hyphen_run = trimmed.chars().any(|ch| {
            let hyphen = self.classifier.is_hyphen(ch);
            let run = hyphen && previous_hyphen;
            previous_hyphen = hyphen;
            run
        });
        if !has_hyphen_run {
            return Some(Cow::Borrowed(trimmed));
        }

        let mut collapsed = String::with_capacity(trimmed.len());
        let mut previous_hyphen = false;
        for ch in trimmed.chars() {
            let hyphen = self.classifier.is_hyphen(ch);
            if !(hyphen && previous_hyphen) {
                collapsed.push(ch);
            }
            previous_hyphen = hyphen;
        }
        Some(Cow::Owned(collapsed))
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::AsciiClassifier;

    fn tokenize(text: &str) -> Vec<String> {
        Tokenizer::new(Arc::new(AsciiClassifier::new()))
            .tokenize(text)
            .into_iter()
            .map(Cow::into_owned)
            .collect()
    }

    #[test]
    fn test_whitespace_runs_split() {
        assert_eq!(
            tokenize("MOOOOO  \n\n scary is it  \t\t crazy cow"),
            vec!["MOOOOO", "scary", "is", "it", "crazy", "cow"]
        );
    }

    #[test]
    fn test_standalone_hyphen_dropped() {
        assert_eq!(
            tokenize("na-do - ko-ko kan-ryo-chi"),
            vec!["na-do", "ko-ko", "kan-ryo-chi"]
        );
    }

    #[test]
    fn test_edge_hyphens_trimmed() {
        assert_eq!(tokenize("-abc def- --ghi--"), vec!["abc", "def", "ghi"]);
    }

    #[test]
    fn test_interior_hyphen_runs_collapsed() {
        assert_eq!(tokenize("up--to---date"), vec!["up-to-date"]);
    }

    #[test]
    fn test_no_dedup_or_case_change() {
        assert_eq!(tokenize("Tango tango Tango"), vec!["Tango", "tango", "Tango"]);
    }

    #[test]
    fn test_borrowed_when_clean() {
        let tokenizer = Tokenizer::new(Arc::new(AsciiClassifier::new()));
        let tokens = tokenizer.tokenize("na-do -x-");
        assert!(matches!(tokens[0], Cow::Borrowed("na-do")));
        assert!(matches!(tokens[1], Cow::Borrowed("x")));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
        assert!(tokenize("- -- ---").is_empty());
    }
}
