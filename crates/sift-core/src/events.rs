use serde::{Deserialize, Serialize};

use crate::category::Category;

/// An ordered text span within the source text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Zero-based position within the source text.
    pub index: usize,
    pub text: String,
}

/// Pattern tier: strong patterns carry the category's full base score,
/// weak patterns accumulate through the weak-score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Strong,
    Weak,
}

/// Evidence that a category is active for a text.
///
/// Records the literal pattern that fired so callers can explain why a
/// label was emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvent {
    pub category: Category,
    pub tier: MatchTier,
    pub sentence_index: usize,
    /// The source regex that fired, verbatim.
    pub pattern: String,
    /// Byte span of the match within the sentence.
    pub span: (usize, usize),
}

/// Origin of a score adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustmentSource {
    Quote,
    Tentative,
    ContextWindow,
    Domain,
    Citation,
    Semantic,
    Stance,
    Negation,
}

/// A single signed score adjustment.
///
/// All adjustment producers emit this one shape so the aggregator stays
/// generic over sources. `void` is only ever set by negation detection and
/// zeroes the category unconditionally, after every numeric adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub category: Category,
    pub delta: f64,
    pub source: AdjustmentSource,
    /// Human-readable rationale for trace output.
    pub detail: String,
    pub void: bool,
}

impl Adjustment {
    pub fn new(
        category: Category,
        delta: f64,
        source: AdjustmentSource,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            category,
            delta,
            source,
            detail: detail.into(),
            void: false,
        }
    }

    /// A void marker: unconditional zeroing, distinct from a numeric delta.
    pub fn void(category: Category, source: AdjustmentSource, detail: impl Into<String>) -> Self {
        Self {
            category,
            delta: 0.0,
            source,
            detail: detail.into(),
            void: true,
        }
    }
}

/// Per-category accumulated scores. All values are >= 0 after finalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    scores: [f64; Category::ALL.len()],
}

impl ScoreRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.scores[category.ordinal()]
    }

    pub fn set(&mut self, category: Category, value: f64) {
        self.scores[category.ordinal()] = value;
    }

    /// Iterate (category, score) pairs in category-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Whether any category carries a positive score.
    pub fn any_positive(&self) -> bool {
        self.scores.iter().any(|&s| s > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_record_defaults_to_zero() {
        let r = ScoreRecord::new();
        for (_, s) in r.iter() {
            assert_eq!(s, 0.0);
        }
        assert!(!r.any_positive());
    }

    #[test]
    fn score_record_set_get() {
        let mut r = ScoreRecord::new();
        r.set(Category::RiskyFastingDetox, 1.3);
        assert_eq!(r.get(Category::RiskyFastingDetox), 1.3);
        assert_eq!(r.get(Category::UnverifiedCure), 0.0);
        assert!(r.any_positive());
    }

    #[test]
    fn iter_follows_definition_order() {
        let r = ScoreRecord::new();
        let order: Vec<Category> = r.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn void_constructor_sets_flag() {
        let a = Adjustment::void(
            Category::UnverifiedCure,
            AdjustmentSource::Negation,
            "negation cue",
        );
        assert!(a.void);
        assert_eq!(a.delta, 0.0);
    }
}
