//! Score aggregation.
//!
//! Deterministic order per category with at least one match event:
//!
//! ```text
//! score = base (strong, else weak table)
//!       + single most negative window candidate   (skipped if suppressed)
//!       + quote total, floored at the quote cap
//!       + tentative total, floored at its cap
//!       + domain deltas
//!       + citation deltas
//!       + semantic deltas                          (negatives skipped if suppressed)
//!       then + stance boost, only while the running score is > 0
//!       then × cure-overlap shrink                 (cure category only)
//!       then clamp to [0, upper_bound]
//!       then void ⇒ 0                              (absolute, last)
//! ```

use std::collections::HashSet;

use tracing::debug;

use sift_core::category::Category;
use sift_core::config::PolicyConfig;
use sift_core::events::{Adjustment, AdjustmentSource, MatchEvent, MatchTier, ScoreRecord};
use sift_rules::stance::StanceFindings;

/// Everything the aggregator consumes for one text.
pub struct AggregationInput<'a> {
    pub matches: &'a [MatchEvent],
    /// Candidate adjustments from every producer.
    pub candidates: &'a [Adjustment],
    /// Categories whose window/semantic reductions are disabled by misuse.
    pub suppressed: &'a HashSet<Category>,
    pub stance: StanceFindings,
}

/// Aggregate candidates into final scores plus the applied-adjustment trace.
pub fn aggregate(
    config: &PolicyConfig,
    input: &AggregationInput<'_>,
) -> (ScoreRecord, Vec<Adjustment>) {
    let mut record = ScoreRecord::new();
    let mut trace = Vec::new();

    let matched: HashSet<Category> = input.matches.iter().map(|m| m.category).collect();

    for category in Category::ALL {
        if !matched.contains(&category) {
            continue;
        }
        let score = score_category(config, input, category, &mut trace);
        record.set(category, score);
    }

    (record, trace)
}

fn score_category(
    config: &PolicyConfig,
    input: &AggregationInput<'_>,
    category: Category,
    trace: &mut Vec<Adjustment>,
) -> f64 {
    let deltas = &config.deltas;
    let suppressed = input.suppressed.contains(&category);
    let of_source = |source: AdjustmentSource| {
        input
            .candidates
            .iter()
            .filter(move |a| a.category == category && a.source == source && !a.void)
    };

    // Base: any strong hit grants the base score exactly once; otherwise
    // distinct weak signals go through the saturating table.
    let has_strong = input
        .matches
        .iter()
        .any(|m| m.category == category && m.tier == MatchTier::Strong);
    let mut score = if has_strong {
        config
            .category(category)
            .map(|c| c.base_score)
            .unwrap_or_default()
    } else {
        let weak_count = input
            .matches
            .iter()
            .filter(|m| m.category == category && m.tier == MatchTier::Weak)
            .count();
        config.weak_score(weak_count)
    };

    // Context window: the single most negative candidate, never the sum.
    if !suppressed {
        if let Some(best) = of_source(AdjustmentSource::ContextWindow)
            .min_by(|a, b| a.delta.total_cmp(&b.delta))
        {
            score += best.delta;
            trace.push(best.clone());
        }
    }

    // Quote and tentative: per-instance totals floored at their caps.
    score += capped_total(
        of_source(AdjustmentSource::Quote),
        deltas.quote_cap,
        category,
        AdjustmentSource::Quote,
        trace,
    );
    score += capped_total(
        of_source(AdjustmentSource::Tentative),
        deltas.tentative_cap,
        category,
        AdjustmentSource::Tentative,
        trace,
    );

    // Domain and citation deltas apply as-is.
    for a in of_source(AdjustmentSource::Domain).chain(of_source(AdjustmentSource::Citation)) {
        score += a.delta;
        trace.push(a.clone());
    }

    // Semantic: capped at emission; misuse suppression drops reductions.
    for a in of_source(AdjustmentSource::Semantic) {
        if suppressed && a.delta < 0.0 {
            continue;
        }
        score += a.delta;
        trace.push(a.clone());
    }

    // Stance amplifies only categories already in positive territory.
    if score > 0.0 && !input.stance.is_empty() {
        let boost = input.stance.total_boost(deltas);
        score += boost;
        trace.push(Adjustment::new(
            category,
            boost,
            AdjustmentSource::Stance,
            format!(
                "{} certainty + {} imperative occurrence(s)",
                input.stance.certainty_hits, input.stance.imperative_hits
            ),
        ));
    }

    // Cross-category rule: generic cure shrinks when a specific category
    // co-matched. With several co-matches the strongest shrink wins.
    if category == Category::UnverifiedCure {
        let matched_specific = |c: Category| input.matches.iter().any(|m| m.category == c);
        let mut factor = 1.0f64;
        if matched_specific(Category::UnsafeMedicationAdvice) {
            factor = factor.min(config.cure_shrink.medication);
        }
        if matched_specific(Category::UnverifiedSupplement) {
            factor = factor.min(config.cure_shrink.supplement);
        }
        if matched_specific(Category::RiskyFastingDetox) {
            factor = factor.min(config.cure_shrink.fasting);
        }
        if factor < 1.0 {
            debug!(%category, factor, "cure-overlap shrink applied");
            score *= factor;
        }
    }

    // Clamp, then the void override — absolute, last, wins over everything.
    score = score.clamp(0.0, config.upper_bound);

    if let Some(void) = input
        .candidates
        .iter()
        .find(|a| a.category == category && a.void)
    {
        trace.push(void.clone());
        return 0.0;
    }

    score
}

/// Sum per-instance deltas, floored at a (negative) cap, and record one
/// trace entry for the applied total.
fn capped_total<'a>(
    candidates: impl Iterator<Item = &'a Adjustment>,
    cap: f64,
    category: Category,
    source: AdjustmentSource,
    trace: &mut Vec<Adjustment>,
) -> f64 {
    let items: Vec<&Adjustment> = candidates.collect();
    if items.is_empty() {
        return 0.0;
    }
    let sum: f64 = items.iter().map(|a| a.delta).sum();
    let total = sum.max(cap);
    trace.push(Adjustment::new(
        category,
        total,
        source,
        format!("{} instance(s), cap {:.2}", items.len(), cap),
    ));
    total
}
