//! PolicyEngine — the scoring pipeline entry point.
//!
//! Construction compiles the category table (ConfigError is fatal here,
//! before any scoring). Scoring itself never fails: malformed input yields
//! all-zero scores and a failing adjustment source degrades to no signal
//! for that source only.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info};

use sift_core::category::Category;
use sift_core::config::PolicyConfig;
use sift_core::domains::DomainList;
use sift_core::errors::SiftResult;
use sift_core::events::{Adjustment, MatchEvent, ScoreRecord};
use sift_core::mode::Mode;

use sift_rules::context::ContextAnalyzer;
use sift_rules::patterns::PatternSet;
use sift_rules::segment::segment;
use sift_rules::sources::SourceVerifier;
use sift_rules::stance::StanceScanner;
use sift_semantic::SemanticVerifier;

use crate::aggregate::{aggregate, AggregationInput};
use crate::labeler;

/// Full outcome of scoring one text, for explainable output.
pub struct ScoreOutcome {
    pub record: ScoreRecord,
    pub matches: Vec<MatchEvent>,
    /// Applied adjustments in aggregation order.
    pub trace: Vec<Adjustment>,
}

/// The scoring pipeline.
///
/// Configuration is read-only after construction; the engine is `Sync` and
/// can be shared across threads without coordination.
pub struct PolicyEngine {
    config: PolicyConfig,
    patterns: PatternSet,
    context: ContextAnalyzer,
    sources: SourceVerifier,
    semantic: Option<SemanticVerifier>,
    stance: StanceScanner,
}

impl PolicyEngine {
    /// Build an engine from a policy. Fails fast on a malformed category
    /// table; domain lists start empty and the semantic verifier absent.
    pub fn new(config: PolicyConfig) -> SiftResult<Self> {
        config.validate()?;
        let patterns = PatternSet::compile(&config)?;
        let context = ContextAnalyzer::new(config.deltas.clone(), config.window_radius);
        let sources = SourceVerifier::new(
            DomainList::new(),
            DomainList::new(),
            config.deltas.clone(),
        );

        info!(
            categories = config.categories.len(),
            modes = config.modes.len(),
            "policy engine initialized"
        );

        Ok(Self {
            config,
            patterns,
            context,
            sources,
            semantic: None,
            stance: StanceScanner::new(),
        })
    }

    /// Attach allow/risk domain lists.
    pub fn with_domain_lists(mut self, allow: DomainList, risk: DomainList) -> Self {
        self.sources = SourceVerifier::new(allow, risk, self.config.deltas.clone());
        self
    }

    /// Attach the embedding-backed verifier. Callers see the same scoring
    /// surface whether or not it is present or available.
    pub fn with_semantic(mut self, verifier: SemanticVerifier) -> Self {
        self.semantic = Some(verifier);
        self
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Score one text. Never fails; empty input scores all zeros.
    pub fn score(&self, text: &str) -> ScoreRecord {
        self.score_with_trace(text).record
    }

    /// Score one text, returning match events and the applied-adjustment
    /// trace for explainable output.
    pub fn score_with_trace(&self, text: &str) -> ScoreOutcome {
        let sentences = segment(text);
        if sentences.is_empty() {
            return ScoreOutcome {
                record: ScoreRecord::new(),
                matches: Vec::new(),
                trace: Vec::new(),
            };
        }

        let matches = self.patterns.scan(&sentences);
        if matches.is_empty() {
            return ScoreOutcome {
                record: ScoreRecord::new(),
                matches,
                trace: Vec::new(),
            };
        }
        let matched: HashSet<Category> = matches.iter().map(|m| m.category).collect();

        let context = self.context.analyze(&sentences, &matches);
        let sources = self.sources.verify(
            text,
            &sentences,
            &matched,
            &context.refutation_sentences,
        );

        let mut candidates = context.adjustments;
        let mut suppressed = sources.suppressed;
        candidates.extend(sources.adjustments);

        if let Some(semantic) = &self.semantic {
            let findings = semantic.verify(&sentences, &matched);
            candidates.extend(findings.adjustments);
            suppressed.extend(findings.suppressed);
        }

        let stance = self.stance.scan(text);

        let input = AggregationInput {
            matches: &matches,
            candidates: &candidates,
            suppressed: &suppressed,
            stance,
        };
        let (record, trace) = aggregate(&self.config, &input);

        for a in &trace {
            debug!(
                category = %a.category,
                delta = a.delta,
                source = ?a.source,
                void = a.void,
                detail = %a.detail,
                "adjustment applied"
            );
        }

        ScoreOutcome {
            record,
            matches,
            trace,
        }
    }

    /// Label one text under a mode.
    pub fn labels(&self, text: &str, mode: &Mode) -> Vec<Category> {
        let record = self.score(text);
        labeler::labels(&self.config, &record, mode)
    }

    /// Label one text under a mode looked up by name in the policy.
    pub fn labels_by_name(&self, text: &str, mode_name: &str) -> SiftResult<Vec<Category>> {
        let mode = self.config.mode(mode_name)?.clone();
        Ok(self.labels(text, &mode))
    }

    /// Score many texts in parallel. Configuration is shared read-only, so
    /// this is a plain data-parallel map with no coordination.
    pub fn score_batch(&self, texts: &[String]) -> Vec<ScoreRecord> {
        texts.par_iter().map(|t| self.score(t)).collect()
    }
}
