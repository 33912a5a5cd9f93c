//! Property-based checks for segmentation and pattern scanning.

use std::sync::LazyLock;

use proptest::prelude::*;

use sift_core::config::PolicyConfig;
use sift_rules::patterns::PatternSet;
use sift_rules::segment::segment;

static PATTERNS: LazyLock<PatternSet> =
    LazyLock::new(|| PatternSet::compile(&PolicyConfig::default()).unwrap());

proptest! {
    #[test]
    fn sentences_are_trimmed_substrings_in_order(text in "\\PC{0,300}") {
        let sentences = segment(&text);
        for (i, s) in sentences.iter().enumerate() {
            prop_assert_eq!(s.index, i);
            prop_assert!(!s.text.is_empty());
            prop_assert_eq!(s.text.trim(), s.text.as_str());
            prop_assert!(text.contains(&s.text), "sentence not found in source");
        }
    }

    #[test]
    fn segmentation_is_deterministic(text in "\\PC{0,300}") {
        prop_assert_eq!(segment(&text), segment(&text));
    }

    #[test]
    fn scan_events_point_at_real_sentences(text in "\\PC{0,300}") {
        let sentences = segment(&text);
        for event in PATTERNS.scan(&sentences) {
            let sentence = &sentences[event.sentence_index];
            prop_assert!(event.span.0 < event.span.1);
            prop_assert!(event.span.1 <= sentence.text.len());
            prop_assert!(sentence.text.is_char_boundary(event.span.0));
            prop_assert!(sentence.text.is_char_boundary(event.span.1));
        }
    }
}
