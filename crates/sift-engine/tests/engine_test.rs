//! End-to-end pipeline tests: scoring scenarios, degradation behavior, and
//! the documented aggregation rules observed from the outside.

use sift_core::category::Category;
use sift_core::config::PolicyConfig;
use sift_core::domains::DomainList;
use sift_core::errors::{ConfigError, SiftError};
use sift_core::mode::Mode;
use sift_engine::PolicyEngine;
use sift_semantic::{ExemplarSet, SemanticVerifier, TfIdfBackend};

fn engine() -> PolicyEngine {
    PolicyEngine::new(PolicyConfig::default()).unwrap()
}

fn engine_with_domains() -> PolicyEngine {
    engine().with_domain_lists(
        DomainList::from_lines(["cdc.gov", "who.int", "nih.gov", "mayoclinic.org"]),
        DomainList::from_lines(["miraclecures.example"]),
    )
}

// ─── Construction ───

#[test]
fn malformed_config_fails_before_scoring() {
    let mut config = PolicyConfig::default();
    config.categories[0].strong_patterns.push("([bad".into());
    let err = PolicyEngine::new(config).err().expect("construction must fail");
    assert!(matches!(
        err,
        SiftError::Config(ConfigError::InvalidPattern { .. })
    ));
}

// ─── Malformed input ───

#[test]
fn empty_input_scores_all_zero() {
    let e = engine();
    let record = e.score("");
    assert!(!record.any_positive());
    assert!(e.labels("", &Mode::recall()).is_empty());
}

#[test]
fn whitespace_input_scores_all_zero() {
    assert!(!engine().score("   \n\t  ").any_positive());
}

// ─── No matches, no labels ───

#[test]
fn benign_text_gets_no_labels_under_any_mode() {
    let e = engine();
    let text = "We hiked up the ridge and watched the sunrise. Breakfast was great.";
    for mode in [Mode::recall(), Mode::default_mode(), Mode::conservative()] {
        assert!(e.labels(text, &mode).is_empty());
    }
}

// ─── Scoring scenarios ───

#[test]
fn negation_voids_medication_advice() {
    let e = engine();
    assert!(e
        .labels("Don't stop taking your insulin", &Mode::default_mode())
        .is_empty());
    assert_eq!(e.score("Don't stop taking your insulin").get(
        Category::UnsafeMedicationAdvice
    ), 0.0);
}

#[test]
fn amplified_medication_advice_is_labeled() {
    let e = engine();
    let text = "Stop taking your insulin 100% guaranteed, it's poison!";
    let labels = e.labels(text, &Mode::default_mode());
    assert_eq!(labels, vec![Category::UnsafeMedicationAdvice]);

    // Base plus at least two stance deltas.
    let score = e.score(text).get(Category::UnsafeMedicationAdvice);
    assert!(score >= 1.0 + 2.0 * 0.2, "got {score}");
}

#[test]
fn quoted_and_refuted_phrase_is_not_labeled() {
    let e = engine();
    let text = "He said \"stop taking your insulin\" online. This claim is false.";
    assert!(e.labels(text, &Mode::default_mode()).is_empty());
    assert_eq!(e.score(text).get(Category::UnsafeMedicationAdvice), 0.0);
}

#[test]
fn allow_listed_domain_suppresses_the_label() {
    let e = engine_with_domains();
    let text = "This tea cures cancer. More at https://cdc.gov/cancer.";
    let score = e.score(text).get(Category::UnverifiedCure);
    assert!((score - 0.5).abs() < 1e-9, "1.0 - 0.5 allow delta, got {score}");
    assert!(e.labels(text, &Mode::default_mode()).is_empty());
}

#[test]
fn risk_listed_domain_bumps_the_score() {
    let e = engine_with_domains();
    let text = "This tea cures cancer. Order at https://shop.miraclecures.example/buy.";
    let score = e.score(text).get(Category::UnverifiedCure);
    assert!((score - 1.3).abs() < 1e-9, "1.0 + 0.3 risk delta, got {score}");
}

// ─── Title negation ───

#[test]
fn title_negation_voids_text_wide() {
    let e = engine();
    let text = "This viral claim is false. Garlic cures cancer, they say!";
    assert!(e.labels(text, &Mode::recall()).is_empty());
}

// ─── Weak signals ───

#[test]
fn weak_signals_accumulate_but_stay_below_default() {
    let e = engine();
    let text = "Big pharma is hiding this. It's a natural remedy.";
    let score = e.score(text).get(Category::UnverifiedCure);
    assert!((score - 0.7).abs() < 1e-9, "two weak signals, got {score}");
    assert!(e.labels(text, &Mode::default_mode()).is_empty());
}

#[test]
fn three_weak_signals_reach_the_recall_threshold() {
    let e = engine();
    let text = "Big pharma is hiding this. It's a natural remedy. Doctors won't tell you.";
    let score = e.score(text).get(Category::UnverifiedCure);
    assert!((score - 1.0).abs() < 1e-9, "saturated weak table, got {score}");
    assert_eq!(e.labels(text, &Mode::recall()), vec![Category::UnverifiedCure]);
}

// ─── Hedging cap ───

#[test]
fn heavy_hedging_is_capped_at_the_tentative_ceiling() {
    let e = engine();
    let text = "I'm not sure, maybe I might try it, wondering if I should stop taking my insulin.";
    let outcome = e.score_with_trace(text);

    // Four hedging cues, but the applied total is floored at the cap.
    let tentative: Vec<_> = outcome
        .trace
        .iter()
        .filter(|a| a.source == sift_core::events::AdjustmentSource::Tentative)
        .collect();
    assert_eq!(tentative.len(), 1);
    assert!((tentative[0].delta - (-0.5)).abs() < 1e-9);

    // 1.0 - 0.5 + 0.3 imperative stance.
    let score = outcome.record.get(Category::UnsafeMedicationAdvice);
    assert!((score - 0.8).abs() < 1e-9, "got {score}");
}

// ─── Cross-category shrink ───

#[test]
fn cure_shrinks_next_to_specific_medication_advice() {
    let e = engine();
    let text = "Garlic cures cancer. Stop taking your statins today.";
    let record = e.score(text);
    assert!((record.get(Category::UnverifiedCure) - 0.5).abs() < 1e-9);
    assert_eq!(record.get(Category::UnsafeMedicationAdvice), 1.0);
}

// ─── Citation misuse ───

#[test]
fn citation_misuse_cannot_be_softened_by_nearby_safety_advice() {
    let e = engine();
    // Without misuse, the safety-advice window cue would discount.
    let softened = "This tea cures cancer. Please talk to your doctor first.";
    let softened_score = e.score(softened).get(Category::UnverifiedCure);
    assert!((softened_score - 0.5).abs() < 1e-9);

    let misused = "This tea cures cancer despite the CDC. Please talk to your doctor first.";
    let misused_score = e.score(misused).get(Category::UnverifiedCure);
    assert!(
        (misused_score - 1.5).abs() < 1e-9,
        "misuse +0.5, window reduction suppressed, got {misused_score}"
    );
}

// ─── Semantic verifier ───

fn semantic_verifier() -> SemanticVerifier {
    let config = PolicyConfig::default();
    SemanticVerifier::new(
        Box::new(TfIdfBackend::new(256)),
        ExemplarSet::default(),
        &config.semantic,
        config.deltas,
    )
}

#[test]
fn semantic_refutation_catches_what_rules_miss() {
    let text = "Garlic cures cancer. This is not recommended.";

    // The rule lexicons have no cue for this phrasing.
    let rule_only = engine().score(text).get(Category::UnverifiedCure);
    assert_eq!(rule_only, 1.0);

    let e = engine().with_semantic(semantic_verifier());
    let semantic_score = e.score(text).get(Category::UnverifiedCure);
    assert!(
        semantic_score < rule_only,
        "semantic refutation should reduce: {semantic_score}"
    );
    assert!(e.labels(text, &Mode::default_mode()).is_empty());
}

#[test]
fn scoring_surface_is_identical_with_an_unavailable_backend() {
    struct DeadBackend;
    impl sift_core::traits::ISimilarityBackend for DeadBackend {
        fn embed(&self, _: &str) -> sift_core::errors::SiftResult<Vec<f32>> {
            Err(sift_core::errors::BackendError::Unavailable {
                provider: "dead".into(),
            }
            .into())
        }
        fn dimensions(&self) -> usize {
            0
        }
        fn name(&self) -> &str {
            "dead"
        }
        fn is_available(&self) -> bool {
            false
        }
    }

    let config = PolicyConfig::default();
    let dead = SemanticVerifier::new(
        Box::new(DeadBackend),
        ExemplarSet::default(),
        &config.semantic,
        config.deltas,
    );
    let text = "Garlic cures cancer. This is not recommended.";
    let with_dead = engine().with_semantic(dead).score(text);
    let without = engine().score(text);
    assert_eq!(with_dead, without, "absence must look like no signal");
}

// ─── Explainability ───

#[test]
fn trace_names_the_pattern_and_adjustments() {
    let e = engine();
    let outcome = e.score_with_trace("Stop taking your insulin. This claim is false.");
    assert!(outcome
        .matches
        .iter()
        .any(|m| m.category == Category::UnsafeMedicationAdvice && !m.pattern.is_empty()));
    assert!(!outcome.trace.is_empty());
}

// ─── Modes ───

#[test]
fn unknown_mode_name_is_a_config_error() {
    let e = engine();
    assert!(matches!(
        e.labels_by_name("whatever", "aggressive"),
        Err(SiftError::Config(ConfigError::UnknownMode { .. }))
    ));
}

#[test]
fn mode_lookup_by_name_matches_builtin() {
    let e = engine();
    let text = "Stop taking your insulin 100% guaranteed, it's poison!";
    assert_eq!(
        e.labels_by_name(text, "default").unwrap(),
        e.labels(text, &Mode::default_mode())
    );
}

// ─── Batch ───

#[test]
fn batch_scoring_matches_sequential() {
    let e = engine_with_domains();
    let texts: Vec<String> = vec![
        "Stop taking your insulin 100% guaranteed, it's poison!".into(),
        "Don't stop taking your insulin".into(),
        "This tea cures cancer. More at https://cdc.gov/cancer.".into(),
        "We hiked up the ridge and watched the sunrise.".into(),
        String::new(),
    ];
    let batch = e.score_batch(&texts);
    for (text, record) in texts.iter().zip(&batch) {
        assert_eq!(record, &e.score(text));
    }
}
