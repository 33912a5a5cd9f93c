//! The embedding-backed verifier.
//!
//! Emits adjustments through the same uniform event shape as the rule-based
//! checks, capped at the rule-based magnitudes. Any backend failure, at
//! construction or per call, degrades to "no semantic signal".

use std::collections::HashSet;

use tracing::debug;

use sift_core::category::Category;
use sift_core::config::{DeltaConfig, SemanticConfig};
use sift_core::events::{Adjustment, AdjustmentSource, Sentence};
use sift_core::traits::{cosine_similarity, ISimilarityBackend};

use crate::exemplars::ExemplarSet;

/// Output of semantic verification over one text.
pub struct SemanticFindings {
    pub adjustments: Vec<Adjustment>,
    /// Categories suppressed because misuse similarity was accepted.
    pub suppressed: HashSet<Category>,
}

impl SemanticFindings {
    fn empty() -> Self {
        Self {
            adjustments: Vec::new(),
            suppressed: HashSet::new(),
        }
    }
}

/// Pre-embedded exemplar vectors for one group.
struct EmbeddedGroup {
    vectors: Vec<Vec<f32>>,
}

impl EmbeddedGroup {
    /// Best cosine similarity of `v` against the group.
    fn best(&self, v: &[f32]) -> f32 {
        self.vectors
            .iter()
            .map(|e| cosine_similarity(v, e))
            .fold(0.0, f32::max)
    }
}

/// Embedding-similarity verifier.
pub struct SemanticVerifier {
    backend: Box<dyn ISimilarityBackend>,
    /// `None` when exemplar embedding failed at construction; the verifier
    /// then reports no signal, indistinguishable from an absent backend.
    embedded: Option<(EmbeddedGroup, EmbeddedGroup, EmbeddedGroup)>,
    accept_threshold: f64,
    deltas: DeltaConfig,
}

impl SemanticVerifier {
    /// Build a verifier over a backend. Exemplars are embedded once here,
    /// outside the scoring hot path. Failure degrades, never errors.
    pub fn new(
        backend: Box<dyn ISimilarityBackend>,
        exemplars: ExemplarSet,
        semantic: &SemanticConfig,
        deltas: DeltaConfig,
    ) -> Self {
        let embedded = if backend.is_available() {
            match (
                embed_group(&*backend, &exemplars.refutation),
                embed_group(&*backend, &exemplars.legitimate),
                embed_group(&*backend, &exemplars.misuse),
            ) {
                (Some(r), Some(l), Some(m)) => Some((r, l, m)),
                _ => {
                    debug!(
                        backend = backend.name(),
                        "exemplar embedding failed, semantic signal disabled"
                    );
                    None
                }
            }
        } else {
            None
        };

        Self {
            backend,
            embedded,
            accept_threshold: semantic.accept_threshold,
            deltas,
        }
    }

    /// Whether the verifier can currently produce a signal.
    pub fn is_available(&self) -> bool {
        self.embedded.is_some() && self.backend.is_available()
    }

    /// Compare sentences against the exemplar groups.
    ///
    /// At most one adjustment per group per text, scaled by the accepted
    /// confidence and capped by the rule-based counterpart's magnitude.
    pub fn verify(
        &self,
        sentences: &[Sentence],
        matched: &HashSet<Category>,
    ) -> SemanticFindings {
        let Some((refutation, legitimate, misuse)) = &self.embedded else {
            return SemanticFindings::empty();
        };
        if matched.is_empty() || sentences.is_empty() {
            return SemanticFindings::empty();
        }

        // Best similarity per group across all sentences.
        let mut best_refutation = 0.0f32;
        let mut best_legitimate = 0.0f32;
        let mut best_misuse = 0.0f32;
        for sentence in sentences {
            let v = match self.backend.embed(&sentence.text) {
                Ok(v) => v,
                Err(e) => {
                    debug!(error = %e, "semantic embed failed, degrading to no signal");
                    return SemanticFindings::empty();
                }
            };
            best_refutation = best_refutation.max(refutation.best(&v));
            best_legitimate = best_legitimate.max(legitimate.best(&v));
            best_misuse = best_misuse.max(misuse.best(&v));
        }

        let mut findings = SemanticFindings::empty();
        self.emit(
            &mut findings,
            matched,
            best_refutation,
            self.deltas.window_refutation,
            "refutation similarity",
        );
        self.emit(
            &mut findings,
            matched,
            best_legitimate,
            self.deltas.citation_legitimate,
            "legitimate-context similarity",
        );
        if self.accepted(best_misuse) {
            self.emit(
                &mut findings,
                matched,
                best_misuse,
                self.deltas.citation_misuse,
                "source-misuse similarity",
            );
            findings.suppressed.extend(matched.iter().copied());
        }

        findings
    }

    fn accepted(&self, similarity: f32) -> bool {
        f64::from(similarity) > self.accept_threshold
    }

    fn emit(
        &self,
        findings: &mut SemanticFindings,
        matched: &HashSet<Category>,
        similarity: f32,
        cap: f64,
        what: &str,
    ) {
        if !self.accepted(similarity) {
            return;
        }
        // Confidence-scaled and capped: |delta| <= |cap| since similarity <= 1.
        let delta = cap * f64::from(similarity);
        for &category in matched {
            findings.adjustments.push(Adjustment::new(
                category,
                delta,
                AdjustmentSource::Semantic,
                format!("{what} {:.2}", similarity),
            ));
        }
    }
}

fn embed_group(backend: &dyn ISimilarityBackend, texts: &[String]) -> Option<EmbeddedGroup> {
    let vectors: Option<Vec<Vec<f32>>> =
        texts.iter().map(|t| backend.embed(t).ok()).collect();
    vectors.map(|vectors| EmbeddedGroup { vectors })
}
