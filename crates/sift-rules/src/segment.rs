//! Sentence segmentation.
//!
//! A simple punctuation-based splitter: `.` `!` `?` and newlines terminate
//! a sentence and stay attached to it, so later pattern matching and
//! interrogative detection see every character of the source text.

use sift_core::events::Sentence;

/// Split text into an ordered, non-empty-filtered sequence of sentences.
///
/// Deterministic and restartable; empty or whitespace-only input yields an
/// empty vec, never an error.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?' | '\n') {
            flush(&mut sentences, &mut current);
        }
    }
    flush(&mut sentences, &mut current);

    sentences
}

fn flush(sentences: &mut Vec<Sentence>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence {
            index: sentences.len(),
            text: trimmed.to_string(),
        });
    }
    current.clear();
}
