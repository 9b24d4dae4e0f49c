//! Property-based tests for the word filter

use isogram_core::{DuplicatePolicy, FilterConfig, WordFilter};
use proptest::prelude::*;
use std::collections::HashSet;

/// Reference model for plain ASCII words separated by single spaces
fn model(words: &[String]) -> Vec<String> {
    let mut kept = Vec::new();
    let mut seen = HashSet::new();
    for word in words {
        let mut letters = HashSet::new();
        let unique = word
            .chars()
            .filter(|ch| *ch != '-')
            .all(|ch| letters.insert(ch.to_ascii_lowercase()));
        if unique && seen.insert(word.clone()) {
            kept.push(word.clone());
        }
    }
    kept
}

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|word| rest.any(|candidate| candidate == word))
}

proptest! {
    #[test]
    fn prop_output_words_satisfy_invariant(text in "\\PC{0,200}") {
        let filter = WordFilter::new();
        for word in filter.filter(&text) {
            prop_assert!(!word.is_empty());
            prop_assert!(word.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '-'));
            prop_assert!(!word.starts_with('-') && !word.ends_with('-'));
            prop_assert!(!word.contains("--"));

            let mut letters = HashSet::new();
            for ch in word.chars().filter(|ch| *ch != '-') {
                prop_assert!(letters.insert(ch.to_ascii_lowercase()), "{word} repeats {ch}");
            }
        }
    }

    #[test]
    fn prop_filtering_is_idempotent(text in "\\PC{0,200}") {
        let filter = WordFilter::new();
        let once = filter.filter(&text);
        let twice = filter.filter(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_no_exact_duplicates(text in "[a-dA-D \\-!]{0,80}") {
        let output = WordFilter::new().filter(&text);
        let distinct: HashSet<&String> = output.iter().collect();
        prop_assert_eq!(distinct.len(), output.len());
    }

    #[test]
    fn prop_matches_reference_model(
        words in prop::collection::vec("[a-zA-Z]{1,6}(-[a-zA-Z]{1,3})?", 0..20)
    ) {
        let output = WordFilter::new().filter(&words.join(" "));
        prop_assert_eq!(output, model(&words));
    }

    #[test]
    fn prop_order_preserved(text in "[a-fA-F \\t\\n\\-,.?]{0,120}") {
        let deduplicated = WordFilter::new().filter(&text);
        let all = WordFilter::with_config(
            FilterConfig::builder().duplicates(DuplicatePolicy::KeepAll).build(),
        )
        .filter(&text);
        prop_assert!(is_subsequence(&deduplicated, &all));
    }

    #[test]
    fn prop_pure(text in "\\PC{0,120}") {
        let filter = WordFilter::new();
        prop_assert_eq!(filter.filter(&text), filter.filter(&text));
    }
}
