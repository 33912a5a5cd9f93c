//! Compiled per-category pattern tables.
//!
//! Config-supplied patterns compile here; any failure is a `ConfigError`
//! raised before scoring begins. Strong matches yield the base score once
//! per category (no stacking); weak matches count distinct patterns and go
//! through the saturating weak-score table at aggregation time.

use regex::Regex;

use sift_core::category::Category;
use sift_core::config::PolicyConfig;
use sift_core::errors::ConfigError;
use sift_core::events::{MatchEvent, MatchTier, Sentence};

/// One compiled pattern, keeping the literal source for explainability.
struct CompiledPattern {
    source: String,
    regex: Regex,
}

/// Compiled strong/weak tables for one category.
struct CompiledCategory {
    category: Category,
    strong: Vec<CompiledPattern>,
    weak: Vec<CompiledPattern>,
}

/// All category tables, compiled once at engine construction.
pub struct PatternSet {
    categories: Vec<CompiledCategory>,
}

impl PatternSet {
    /// Compile every pattern in the config's category table.
    pub fn compile(config: &PolicyConfig) -> Result<Self, ConfigError> {
        let mut categories = Vec::with_capacity(config.categories.len());
        for entry in &config.categories {
            categories.push(CompiledCategory {
                category: entry.category,
                strong: compile_all(entry.category, &entry.strong_patterns)?,
                weak: compile_all(entry.category, &entry.weak_patterns)?,
            });
        }
        Ok(Self { categories })
    }

    /// Scan all sentences against all category tables.
    ///
    /// Strong tier: every firing pattern is recorded (for explainability),
    /// but the aggregator grants the base score once per category. Weak
    /// tier: one event per distinct weak pattern, at its first firing
    /// location — repeated hits of the same weak pattern don't accumulate.
    pub fn scan(&self, sentences: &[Sentence]) -> Vec<MatchEvent> {
        let mut events = Vec::new();

        for table in &self.categories {
            for pat in &table.strong {
                for sentence in sentences {
                    if let Some(m) = pat.regex.find(&sentence.text) {
                        events.push(MatchEvent {
                            category: table.category,
                            tier: MatchTier::Strong,
                            sentence_index: sentence.index,
                            pattern: pat.source.clone(),
                            span: (m.start(), m.end()),
                        });
                    }
                }
            }
            for pat in &table.weak {
                // First firing location only; distinctness is per pattern.
                let hit = sentences
                    .iter()
                    .find_map(|s| pat.regex.find(&s.text).map(|m| (s.index, m)));
                if let Some((index, m)) = hit {
                    events.push(MatchEvent {
                        category: table.category,
                        tier: MatchTier::Weak,
                        sentence_index: index,
                        pattern: pat.source.clone(),
                        span: (m.start(), m.end()),
                    });
                }
            }
        }

        events
    }
}

fn compile_all(
    category: Category,
    patterns: &[String],
) -> Result<Vec<CompiledPattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p)
                .map(|regex| CompiledPattern {
                    source: p.clone(),
                    regex,
                })
                .map_err(|e| ConfigError::InvalidPattern {
                    category: category.as_str().to_string(),
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
        })
        .collect()
}
