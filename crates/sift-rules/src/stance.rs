//! Whole-text stance amplification.
//!
//! Certainty vocabulary and imperative health directives amplify categories
//! that are already in positive territory. The scanner only counts; the
//! aggregator gates each amplification on the category's running score, so
//! stance can never initiate a label on its own.

use sift_core::config::DeltaConfig;

use crate::lexicon;

/// Occurrence counts from a whole-text stance scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanceFindings {
    pub certainty_hits: usize,
    pub imperative_hits: usize,
}

impl StanceFindings {
    /// Total amplification these hits would add to one qualifying category.
    pub fn total_boost(&self, deltas: &DeltaConfig) -> f64 {
        self.certainty_hits as f64 * deltas.stance_certainty
            + self.imperative_hits as f64 * deltas.stance_imperative
    }

    pub fn is_empty(&self) -> bool {
        self.certainty_hits == 0 && self.imperative_hits == 0
    }
}

/// Certainty/imperative vocabulary scanner.
#[derive(Debug, Default)]
pub struct StanceScanner;

impl StanceScanner {
    pub fn new() -> Self {
        Self
    }

    /// Scan the whole text, not only matched sentences.
    pub fn scan(&self, text: &str) -> StanceFindings {
        StanceFindings {
            certainty_hits: lexicon::count(&lexicon::RE_CERTAINTY, text),
            imperative_hits: lexicon::count(&lexicon::RE_IMPERATIVE_HEALTH, text),
        }
    }
}
