//! Per-sentence context analysis: negation voids, quote discounts, hedging
//! discounts, and context-window cues.
//!
//! Every check is independent and emits candidate `Adjustment`s; combining
//! rules (caps, single-most-negative window) live in the aggregator.

use std::collections::HashSet;

use sift_core::category::Category;
use sift_core::config::DeltaConfig;
use sift_core::events::{Adjustment, AdjustmentSource, MatchEvent, Sentence};

use crate::lexicon;

/// Output of context analysis over one text.
pub struct ContextFindings {
    /// Candidate adjustments; the aggregator applies caps and the
    /// single-most-negative window rule.
    pub adjustments: Vec<Adjustment>,
    /// Sentence indices that counted as window refutations. The citation
    /// verifier uses this to halve the legitimate-citation discount instead
    /// of discounting the same sentence twice.
    pub refutation_sentences: HashSet<usize>,
}

/// Rule-based context analyzer.
pub struct ContextAnalyzer {
    deltas: DeltaConfig,
    window_radius: usize,
}

impl ContextAnalyzer {
    pub fn new(deltas: DeltaConfig, window_radius: usize) -> Self {
        Self {
            deltas,
            window_radius,
        }
    }

    pub fn analyze(&self, sentences: &[Sentence], matches: &[MatchEvent]) -> ContextFindings {
        let mut adjustments = Vec::new();
        let mut refutation_sentences = HashSet::new();

        let matched_categories: HashSet<Category> = matches.iter().map(|m| m.category).collect();

        // Title negation: a cue in the first sentence voids every matched
        // category text-wide, regardless of which sentence matched.
        if let Some(first) = sentences.first() {
            if let Some(cue) = negation_cue(first) {
                for &category in &matched_categories {
                    adjustments.push(Adjustment::void(
                        category,
                        AdjustmentSource::Negation,
                        format!("title negation: '{cue}'"),
                    ));
                }
            }
        }

        // Distinct (category, sentence) pairs — a category matching the same
        // sentence through two patterns is analyzed once.
        let mut seen_pairs = HashSet::new();
        for m in matches {
            if !seen_pairs.insert((m.category, m.sentence_index)) {
                continue;
            }
            let Some(sentence) = sentences.get(m.sentence_index) else {
                continue;
            };

            // Negation / refutation / interrogative: binary void, not a
            // numeric reduction.
            if let Some(cue) = negation_cue(sentence) {
                adjustments.push(Adjustment::void(
                    m.category,
                    AdjustmentSource::Negation,
                    format!("negation in matched sentence: '{cue}'"),
                ));
            }

            // Tentative/hedging: one delta per instance, capped later.
            for _ in 0..lexicon::count(&lexicon::RE_TENTATIVE, &sentence.text) {
                adjustments.push(Adjustment::new(
                    m.category,
                    self.deltas.tentative,
                    AdjustmentSource::Tentative,
                    format!("hedging in sentence {}", sentence.index),
                ));
            }

            // Context window: each cue in a neighboring sentence is a
            // candidate; only the most negative survives aggregation.
            self.scan_window(
                sentences,
                sentence.index,
                m.category,
                &mut adjustments,
                &mut refutation_sentences,
            );
        }

        // Quote detection is per quoted match instance, not per sentence.
        let mut seen_spans = HashSet::new();
        for m in matches {
            if !seen_spans.insert((m.category, m.sentence_index, m.span)) {
                continue;
            }
            let Some(sentence) = sentences.get(m.sentence_index) else {
                continue;
            };
            if is_quoted(&sentence.text, m.span)
                && lexicon::is_match(&lexicon::RE_REPORTING_VERB, &sentence.text)
            {
                adjustments.push(Adjustment::new(
                    m.category,
                    self.deltas.quote,
                    AdjustmentSource::Quote,
                    format!("quoted phrase in sentence {}", sentence.index),
                ));
            }
        }

        ContextFindings {
            adjustments,
            refutation_sentences,
        }
    }

    fn scan_window(
        &self,
        sentences: &[Sentence],
        center: usize,
        category: Category,
        adjustments: &mut Vec<Adjustment>,
        refutation_sentences: &mut HashSet<usize>,
    ) {
        let lo = center.saturating_sub(self.window_radius);
        let hi = (center + self.window_radius).min(sentences.len().saturating_sub(1));

        for sentence in &sentences[lo..=hi] {
            if sentence.index == center {
                continue;
            }
            if lexicon::is_match(&lexicon::RE_WINDOW_REFUTATION, &sentence.text)
                || negation_cue(sentence).is_some()
            {
                refutation_sentences.insert(sentence.index);
                adjustments.push(Adjustment::new(
                    category,
                    self.deltas.window_refutation,
                    AdjustmentSource::ContextWindow,
                    format!("refutation in sentence {}", sentence.index),
                ));
            }
            if lexicon::is_match(&lexicon::RE_WINDOW_SAFETY, &sentence.text) {
                adjustments.push(Adjustment::new(
                    category,
                    self.deltas.window_safety_advice,
                    AdjustmentSource::ContextWindow,
                    format!("safety advice in sentence {}", sentence.index),
                ));
            }
            if lexicon::is_match(&lexicon::RE_WINDOW_CREDIBLE, &sentence.text) {
                adjustments.push(Adjustment::new(
                    category,
                    self.deltas.window_credible_source,
                    AdjustmentSource::ContextWindow,
                    format!("credible-source cue in sentence {}", sentence.index),
                ));
            }
        }
    }
}

/// Negation cue word or interrogative form. Returns the cue for the trace.
fn negation_cue(sentence: &Sentence) -> Option<String> {
    if sentence.text.trim_end().ends_with('?') {
        return Some("interrogative".to_string());
    }
    lexicon::first_match(&lexicon::RE_NEGATION, &sentence.text).map(|s| s.to_string())
}

/// Whether a byte span sits fully inside a balanced pair of double quotes
/// (straight or curly). Single quotes are excluded: apostrophes in
/// contractions make them unpairable.
fn is_quoted(text: &str, span: (usize, usize)) -> bool {
    let mut straight_open: Option<usize> = None;
    let mut curly_open: Option<usize> = None;
    let mut pairs: Vec<(usize, usize)> = Vec::new();

    for (i, c) in text.char_indices() {
        match c {
            '"' => match straight_open.take() {
                Some(start) => pairs.push((start, i)),
                None => straight_open = Some(i),
            },
            '“' => curly_open = Some(i),
            '”' => {
                if let Some(start) = curly_open.take() {
                    pairs.push((start, i));
                }
            }
            _ => {}
        }
    }

    pairs
        .iter()
        .any(|&(start, end)| start < span.0 && span.1 <= end)
}
