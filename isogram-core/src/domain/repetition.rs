//! Repetition filter: letter uniqueness and exact-duplicate suppression

use super::classifier::CharacterClassifier;
use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// What to do with a word that is textually identical to one already kept
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Drop later exact repeats; `Burg` and `burg` are still distinct
    #[default]
    DropRepeated,
    /// Keep every occurrence
    KeepAll,
}

impl DuplicatePolicy {
    /// Canonical name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::DropRepeated => "drop_repeated",
            DuplicatePolicy::KeepAll => "keep_all",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "drop_repeated" => Ok(DuplicatePolicy::DropRepeated),
            "keep_all" => Ok(DuplicatePolicy::KeepAll),
            other => Err(FilterError::Config(format!(
                "unknown duplicate policy: {other}"
            ))),
        }
    }
}

/// Outcome for a single candidate word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The word survives
    Keep,
    /// The word contains this letter more than once (case-folded)
    RepeatedLetter(char),
    /// The word repeats one kept earlier in the same input
    Duplicate,
}

impl Verdict {
    /// Whether the word survives
    pub fn is_keep(&self) -> bool {
        matches!(self, Verdict::Keep)
    }
}

/// Decides which candidate words survive
#[derive(Clone)]
pub struct RepetitionFilter {
    classifier: Arc<dyn CharacterClassifier>,
    policy: DuplicatePolicy,
}

impl RepetitionFilter {
    /// Create a filter using the given classifier and duplicate policy
    pub fn new(classifier: Arc<dyn CharacterClassifier>, policy: DuplicatePolicy) -> Self {
        Self { classifier, policy }
    }

    /// The duplicate policy in effect
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// First letter that occurs twice in `word`, ignoring case and hyphens
    ///
    /// The returned letter is the second occurrence, as written.
    pub fn first_repeated_letter(&self, word: &str) -> Option<char> {
        let mut ascii_seen = 0u32;
        let mut other_seen: Vec<char> = Vec::new();

        for ch in word.chars().filter(|&ch| self.classifier.is_letter(ch)) {
            if ch.is_ascii_alphabetic() {
                let bit = 1u32 << (ch.to_ascii_lowercase() as u8 - b'a');
                if ascii_seen & bit != 0 {
                    return Some(ch);
                }
                ascii_seen |= bit;
            } else {
                for folded in ch.to_lowercase() {
                    if other_seen.contains(&folded) {
                        return Some(ch);
                    }
                    other_seen.push(folded);
                }
            }
        }
        None
    }

    /// Whether every letter in `word` is distinct
    pub fn has_unique_letters(&self, word: &str) -> bool {
        self.first_repeated_letter(word).is_none()
    }

    /// Start judging the words of one input
    pub fn pass(&self) -> FilterPass<'_> {
        FilterPass {
            filter: self,
            kept: HashSet::new(),
        }
    }
}

impl fmt::Debug for RepetitionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepetitionFilter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Per-input filtering state; remembers the words kept so far
#[derive(Debug)]
pub struct FilterPass<'f> {
    filter: &'f RepetitionFilter,
    kept: HashSet<String>,
}

impl FilterPass<'_> {
    /// Judge the next candidate word
    pub fn judge(&mut self, word: &str) -> Verdict {
        if let Some(letter) = self.filter.first_repeated_letter(word) {
            return Verdict::RepeatedLetter(letter);
        }
        match self.filter.policy {
            DuplicatePolicy::KeepAll => Verdict::Keep,
            DuplicatePolicy::DropRepeated => {
                if self.kept.contains(word) {
                    Verdict::Duplicate
                } else {
                    self.kept.insert(word.to_string());
                    Verdict::Keep
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::AsciiClassifier;

    fn filter(policy: DuplicatePolicy) -> RepetitionFilter {
        RepetitionFilter::new(Arc::new(AsciiClassifier::new()), policy)
    }

    #[test]
    fn test_repeated_letters_detected() {
        let filter = filter(DuplicatePolicy::default());
        assert_eq!(filter.first_repeated_letter("marinara"), Some('a'));
        assert_eq!(filter.first_repeated_letter("Sheffield"), Some('f'));
        assert_eq!(filter.first_repeated_letter("nori"), None);
        assert_eq!(filter.first_repeated_letter("Kuwait"), None);
    }

    #[test]
    fn test_case_insensitive() {
        let filter = filter(DuplicatePolicy::default());
        assert_eq!(filter.first_repeated_letter("Tact"), Some('t'));
        assert_eq!(filter.first_repeated_letter("aA"), Some('A'));
        assert!(filter.has_unique_letters("kAnRyOcHi"));
    }

    #[test]
    fn test_hyphens_exempt() {
        let filter = filter(DuplicatePolicy::default());
        assert!(filter.has_unique_letters("kan-ryo-chi"));
        assert!(filter.has_unique_letters("na-do"));
        assert_eq!(filter.first_repeated_letter("ko-ko"), Some('k'));
        assert_eq!(filter.first_repeated_letter("kanryo-ssi"), Some('s'));
    }

    #[test]
    fn test_single_letter_kept() {
        let filter = filter(DuplicatePolicy::default());
        assert!(filter.has_unique_letters("a"));
        assert!(filter.has_unique_letters("Z"));
    }

    #[test]
    fn test_exact_duplicates_dropped() {
        let filter = filter(DuplicatePolicy::DropRepeated);
        let mut pass = filter.pass();
        assert_eq!(pass.judge("Billy"), Verdict::RepeatedLetter('l'));
        assert_eq!(pass.judge("Burgy"), Verdict::Keep);
        assert_eq!(pass.judge("burg"), Verdict::Keep);
        assert_eq!(pass.judge("Burgy"), Verdict::Duplicate);
        assert_eq!(pass.judge("Burg"), Verdict::Keep);
    }

    #[test]
    fn test_keep_all_policy() {
        let filter = filter(DuplicatePolicy::KeepAll);
        let mut pass = filter.pass();
        assert!(pass.judge("Tango").is_keep());
        assert!(pass.judge("Tango").is_keep());
    }

    #[test]
    fn test_passes_are_independent() {
        let filter = filter(DuplicatePolicy::DropRepeated);
        assert!(filter.pass().judge("ufo").is_keep());
        assert!(filter.pass().judge("ufo").is_keep());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "drop_repeated".parse::<DuplicatePolicy>().unwrap(),
            DuplicatePolicy::DropRepeated
        );
        assert_eq!(
            "Keep-All".parse::<DuplicatePolicy>().unwrap(),
            DuplicatePolicy::KeepAll
        );
        let err = "sometimes".parse::<DuplicatePolicy>().unwrap_err();
        assert!(err.to_string().contains("unknown duplicate policy"));
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [DuplicatePolicy::DropRepeated, DuplicatePolicy::KeepAll] {
            assert_eq!(policy.to_string().parse::<DuplicatePolicy>().unwrap(), policy);
        }
    }
}
