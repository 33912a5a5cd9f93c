//! Linked-domain and named-organization verification.
//!
//! Domain deltas apply uniformly to every category with at least one match.
//! Citation misuse raises a suppression flag: a text that misrepresents a
//! credible source must not be softened by safe-sounding surrounding text,
//! so context-window reductions are disabled for the affected categories.

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use sift_core::category::Category;
use sift_core::config::DeltaConfig;
use sift_core::domains::DomainList;
use sift_core::events::{Adjustment, AdjustmentSource, Sentence};

use crate::lexicon;

/// Output of source verification over one text.
pub struct SourceFindings {
    pub adjustments: Vec<Adjustment>,
    /// Categories whose context-window (and semantic refutation) reductions
    /// are disabled because a citation misuse was detected.
    pub suppressed: HashSet<Category>,
}

/// Domain-list and citation verifier.
pub struct SourceVerifier {
    allow: DomainList,
    risk: DomainList,
    deltas: DeltaConfig,
}

impl SourceVerifier {
    pub fn new(allow: DomainList, risk: DomainList, deltas: DeltaConfig) -> Self {
        Self {
            allow,
            risk,
            deltas,
        }
    }

    pub fn verify(
        &self,
        text: &str,
        sentences: &[Sentence],
        matched: &HashSet<Category>,
        refutation_sentences: &HashSet<usize>,
    ) -> SourceFindings {
        let mut adjustments = Vec::new();
        let mut suppressed = HashSet::new();

        if matched.is_empty() {
            return SourceFindings {
                adjustments,
                suppressed,
            };
        }

        self.verify_domains(text, matched, &mut adjustments);
        self.verify_citations(
            sentences,
            matched,
            refutation_sentences,
            &mut adjustments,
            &mut suppressed,
        );

        SourceFindings {
            adjustments,
            suppressed,
        }
    }

    /// Extract linked hosts and test list membership. One allow delta and
    /// one risk delta at most per text, applied to every matched category.
    fn verify_domains(
        &self,
        text: &str,
        matched: &HashSet<Category>,
        adjustments: &mut Vec<Adjustment>,
    ) {
        let hosts = extract_hosts(text);
        if hosts.is_empty() {
            return;
        }

        let allow_hit = hosts.iter().find(|h| self.allow.contains(h));
        let risk_hit = hosts.iter().find(|h| self.risk.contains(h));

        if let Some(host) = allow_hit {
            for &category in matched {
                adjustments.push(Adjustment::new(
                    category,
                    self.deltas.domain_allow,
                    AdjustmentSource::Domain,
                    format!("allow-listed domain: {host}"),
                ));
            }
        }
        if let Some(host) = risk_hit {
            for &category in matched {
                adjustments.push(Adjustment::new(
                    category,
                    self.deltas.domain_risk,
                    AdjustmentSource::Domain,
                    format!("risk-listed domain: {host}"),
                ));
            }
        }
    }

    /// Per-sentence citation verification.
    ///
    /// Legitimate use discounts; a contradiction cue attaches to the nearest
    /// preceding organization mention only and both marks misuse and
    /// suppresses window reductions.
    fn verify_citations(
        &self,
        sentences: &[Sentence],
        matched: &HashSet<Category>,
        refutation_sentences: &HashSet<usize>,
        adjustments: &mut Vec<Adjustment>,
        suppressed: &mut HashSet<Category>,
    ) {
        for sentence in sentences {
            let orgs = lexicon::find_all(&lexicon::RE_ORG, &sentence.text);
            let direct_misuse = lexicon::is_match(&lexicon::RE_MISUSE_DIRECT, &sentence.text);

            // "<org> says X but Y": the cue attaches to the nearest
            // preceding org mention, never to every named organization.
            let contradicted_org = lexicon::find_all(
                &lexicon::RE_MISUSE_CONTRADICTION,
                &sentence.text,
            )
            .into_iter()
            .find_map(|(cue_pos, _)| {
                orgs.iter()
                    .rev()
                    .find(|(org_pos, _)| *org_pos < cue_pos)
                    .map(|(_, name)| *name)
            });

            if direct_misuse || contradicted_org.is_some() {
                let org = contradicted_org
                    .map(str::to_string)
                    .or_else(|| orgs.first().map(|(_, n)| n.to_string()))
                    .unwrap_or_else(|| "credible source".to_string());
                for &category in matched {
                    adjustments.push(Adjustment::new(
                        category,
                        self.deltas.citation_misuse,
                        AdjustmentSource::Citation,
                        format!("citation misuse of {org} in sentence {}", sentence.index),
                    ));
                    suppressed.insert(category);
                }
                continue;
            }

            if orgs.is_empty() {
                continue;
            }
            if lexicon::is_match(&lexicon::RE_CITATION_LEGITIMACY, &sentence.text) {
                // Partial discount when this sentence already counted as a
                // window refutation, so it isn't discounted twice.
                let (delta, detail) = if refutation_sentences.contains(&sentence.index) {
                    (
                        self.deltas.citation_legitimate_partial,
                        "legitimate citation (already a window refutation)",
                    )
                } else {
                    (self.deltas.citation_legitimate, "legitimate citation")
                };
                debug!(sentence = sentence.index, delta, "citation verified");
                for &category in matched {
                    adjustments.push(Adjustment::new(
                        category,
                        delta,
                        AdjustmentSource::Citation,
                        format!("{detail} in sentence {}", sentence.index),
                    ));
                }
            }
        }
    }
}

/// Extract lowercased hosts from URL-like substrings, stripping `www.`.
/// Unparseable URLs are skipped: a bad link degrades to no signal.
fn extract_hosts(text: &str) -> Vec<String> {
    lexicon::find_all(&lexicon::RE_URL, text)
        .into_iter()
        .filter_map(|(_, raw)| {
            let url = Url::parse(raw.trim_end_matches(['.', ',', ';'])).ok()?;
            let host = url.host_str()?.to_lowercase();
            Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
        })
        .collect()
}
