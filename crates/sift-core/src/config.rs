use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::ConfigError;
use crate::mode::Mode;

/// Named default constants for the scoring policy.
///
/// Magnitudes form one internally consistent table; they are not averaged
/// with the variants that circulate elsewhere.
pub mod defaults {
    /// Base score granted by any strong match (no stacking).
    pub const BASE_SCORE: f64 = 1.0;
    /// Weak-signal score table: 1, 2, 3+ distinct weak signals, saturating.
    pub const WEAK_SCORE_TABLE: [f64; 3] = [0.4, 0.7, 1.0];

    /// Per quoted instance, and the total cap across instances.
    pub const QUOTE_DELTA: f64 = -0.3;
    pub const QUOTE_CAP: f64 = -0.6;
    /// Per hedging instance, and the total cap across instances.
    pub const TENTATIVE_DELTA: f64 = -0.25;
    pub const TENTATIVE_CAP: f64 = -0.5;

    /// Context-window candidate deltas; only the most negative applies.
    pub const WINDOW_REFUTATION: f64 = -0.8;
    pub const WINDOW_SAFETY_ADVICE: f64 = -0.5;
    pub const WINDOW_CREDIBLE_SOURCE: f64 = -0.6;
    /// Sentences examined on each side of a matched sentence.
    pub const WINDOW_RADIUS: usize = 2;

    pub const DOMAIN_ALLOW_DELTA: f64 = -0.5;
    pub const DOMAIN_RISK_DELTA: f64 = 0.3;

    /// Full legitimate-citation discount, and the partial variant used when
    /// the sentence already counted as a window refutation.
    pub const CITATION_LEGITIMATE: f64 = -0.7;
    pub const CITATION_LEGITIMATE_PARTIAL: f64 = -0.35;
    pub const CITATION_MISUSE: f64 = 0.5;

    pub const STANCE_CERTAINTY: f64 = 0.2;
    pub const STANCE_IMPERATIVE: f64 = 0.3;

    /// Clamp ceiling for every category score.
    pub const UPPER_BOUND: f64 = 3.0;

    /// Cure-score shrink factors when a specific category co-matched.
    pub const CURE_SHRINK_MEDICATION: f64 = 0.5;
    pub const CURE_SHRINK_SUPPLEMENT: f64 = 0.6;
    pub const CURE_SHRINK_FASTING: f64 = 0.6;

    /// Semantic similarity must exceed this to emit an adjustment.
    pub const SEMANTIC_ACCEPT_THRESHOLD: f64 = 0.5;
}

/// Pattern sets and scoring parameters for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub category: Category,
    /// Presence of any of these yields the full base score, once.
    pub strong_patterns: Vec<String>,
    /// Distinct hits accumulate through the weak score table.
    pub weak_patterns: Vec<String>,
    pub base_score: f64,
    /// Optional per-mode threshold overrides (mode name -> threshold).
    #[serde(default)]
    pub mode_thresholds: HashMap<String, f64>,
}

/// Signed adjustment magnitudes and caps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaConfig {
    pub quote: f64,
    pub quote_cap: f64,
    pub tentative: f64,
    pub tentative_cap: f64,
    pub window_refutation: f64,
    pub window_safety_advice: f64,
    pub window_credible_source: f64,
    pub domain_allow: f64,
    pub domain_risk: f64,
    pub citation_legitimate: f64,
    pub citation_legitimate_partial: f64,
    pub citation_misuse: f64,
    pub stance_certainty: f64,
    pub stance_imperative: f64,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            quote: defaults::QUOTE_DELTA,
            quote_cap: defaults::QUOTE_CAP,
            tentative: defaults::TENTATIVE_DELTA,
            tentative_cap: defaults::TENTATIVE_CAP,
            window_refutation: defaults::WINDOW_REFUTATION,
            window_safety_advice: defaults::WINDOW_SAFETY_ADVICE,
            window_credible_source: defaults::WINDOW_CREDIBLE_SOURCE,
            domain_allow: defaults::DOMAIN_ALLOW_DELTA,
            domain_risk: defaults::DOMAIN_RISK_DELTA,
            citation_legitimate: defaults::CITATION_LEGITIMATE,
            citation_legitimate_partial: defaults::CITATION_LEGITIMATE_PARTIAL,
            citation_misuse: defaults::CITATION_MISUSE,
            stance_certainty: defaults::STANCE_CERTAINTY,
            stance_imperative: defaults::STANCE_IMPERATIVE,
        }
    }
}

/// Cure-overlap shrink factors, keyed by the co-matched specific category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CureShrinkConfig {
    pub medication: f64,
    pub supplement: f64,
    pub fasting: f64,
}

impl Default for CureShrinkConfig {
    fn default() -> Self {
        Self {
            medication: defaults::CURE_SHRINK_MEDICATION,
            supplement: defaults::CURE_SHRINK_SUPPLEMENT,
            fasting: defaults::CURE_SHRINK_FASTING,
        }
    }
}

/// Semantic verifier parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    pub accept_threshold: f64,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            accept_threshold: defaults::SEMANTIC_ACCEPT_THRESHOLD,
        }
    }
}

/// The full scoring policy: category table, adjustment magnitudes, modes.
///
/// Loaded once, immutable for the run, passed explicitly into the engine —
/// never a hidden global. `Default` carries the built-in health lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub categories: Vec<CategoryConfig>,
    pub weak_score_table: Vec<f64>,
    pub deltas: DeltaConfig,
    pub cure_shrink: CureShrinkConfig,
    pub semantic: SemanticConfig,
    pub window_radius: usize,
    pub upper_bound: f64,
    pub modes: Vec<Mode>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            categories: builtin_categories(),
            weak_score_table: defaults::WEAK_SCORE_TABLE.to_vec(),
            deltas: DeltaConfig::default(),
            cure_shrink: CureShrinkConfig::default(),
            semantic: SemanticConfig::default(),
            window_radius: defaults::WINDOW_RADIUS,
            upper_bound: defaults::UPPER_BOUND,
            modes: vec![Mode::recall(), Mode::default_mode(), Mode::conservative()],
        }
    }
}

impl PolicyConfig {
    /// Parse a policy from TOML.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Structural validation. Pattern compilability is checked separately
    /// when the engine compiles the table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weak_score_table.is_empty() {
            return Err(ConfigError::EmptyWeakTable);
        }
        for category in Category::ALL {
            let entry = self
                .categories
                .iter()
                .find(|c| c.category == category)
                .ok_or_else(|| ConfigError::MissingCategory {
                    category: category.as_str().to_string(),
                })?;
            if entry.strong_patterns.is_empty() && entry.weak_patterns.is_empty() {
                return Err(ConfigError::EmptyPatternSet {
                    category: category.as_str().to_string(),
                });
            }
            if !entry.base_score.is_finite() || entry.base_score < 0.0 {
                return Err(ConfigError::InvalidBaseScore {
                    category: category.as_str().to_string(),
                    value: entry.base_score,
                });
            }
        }
        Ok(())
    }

    /// Look up the config entry for a category.
    pub fn category(&self, category: Category) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Look up a mode by name.
    pub fn mode(&self, name: &str) -> Result<&Mode, ConfigError> {
        self.modes
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ConfigError::UnknownMode {
                name: name.to_string(),
            })
    }

    /// Weak-signal score for a distinct-hit count, saturating at the top
    /// of the table. Zero hits score zero.
    pub fn weak_score(&self, distinct_hits: usize) -> f64 {
        if distinct_hits == 0 {
            return 0.0;
        }
        let idx = (distinct_hits - 1).min(self.weak_score_table.len() - 1);
        self.weak_score_table[idx]
    }

    /// Effective threshold: per-category override first, then the mode.
    pub fn effective_threshold(&self, category: Category, mode: &Mode) -> f64 {
        self.category(category)
            .and_then(|c| c.mode_thresholds.get(&mode.name).copied())
            .unwrap_or_else(|| mode.threshold_for(category))
    }
}

/// The built-in category table, transcribed from the shipped health policy.
fn builtin_categories() -> Vec<CategoryConfig> {
    let strong = |category: Category, patterns: &[&str]| CategoryConfig {
        category,
        strong_patterns: patterns.iter().map(|p| p.to_string()).collect(),
        weak_patterns: Vec::new(),
        base_score: defaults::BASE_SCORE,
        mode_thresholds: HashMap::new(),
    };

    let mut table = vec![
        strong(
            Category::UnverifiedCure,
            &[
                r"(?i)\b(cures?|reverse[sd]?|eliminates?)\b.*\b(cancer|diabetes|autism|heart\s+disease)\b",
                r"(?i)\bmiracle (cure|treatment)\b",
                r"(?i)\bno side effects\b.*\b(any|all)\b.*\b(disease|condition)\b",
            ],
        ),
        strong(
            Category::UnsafeMedicationAdvice,
            &[
                r"(?i)\b(stop|quit|throw away|ditch)\b.*\b(taking\s+)?(your\s+)?(insulin|statins?|antidepressants?|blood pressure meds?|bp meds?)\b",
                r"(?i)\b(double|triple|cut|halve)\s+your\s+(dose|dosage)\b",
                r"(?i)\b(no need|don['’]t need)\b.*\b(prescription|doctor)\b",
            ],
        ),
        strong(
            Category::RiskyFastingDetox,
            &[
                r"(?i)\b(dry fast|water fast)\b.*\b(48|72|96|120)\s*(h|hours?)\b",
                r"(?i)\bdetox (tea|cleanse|flush)\b.*\b(weight|fat|toxins?)\b",
                r"(?i)\bcolon cleanse\b.*\b(lose|drop)\s+\d+\s*(kg|kgs|pounds|lbs)\b",
            ],
        ),
        strong(
            Category::UnverifiedSupplement,
            &[
                r"(?i)\b(NMN|NAD\+|peptides?|SARMs?|nootropics?)\b.*\b(cures?|fixes?|revers(es|e))\b",
                r"(?i)\bjust take\b.*\b(supplements?|herbs?|pills?)\b.*\b(no need|instead)\b",
            ],
        ),
        strong(
            Category::UnsafeDeviceUse,
            &[
                r"(?i)\bnebuliz(e|er)\b.*\b(essential oils?|hydrogen peroxide|vinegar)\b",
                r"(?i)\bCGM\b.*\b(hack|game|cheat)\b.*\b(diabetes|insulin)\b",
                r"(?i)\bSpO2\b.*\b(no need\b.*\bdoctor|ignore\b.*\bdoctor)\b",
            ],
        ),
    ];

    // Weak lexicons: partial, cumulative evidence per category.
    table[0].weak_patterns = vec![
        r"(?i)\bmiracle\b".into(),
        r"(?i)\bbig pharma\b.*\b(hiding|hides|suppress(es|ed)?)\b".into(),
        r"(?i)\bnatural (cure|remedy)\b".into(),
        r"(?i)\bdoctors? (won['’]t|don['’]t) tell you\b".into(),
    ];
    table[1].weak_patterns = vec![
        r"(?i)\byou don['’]t need\b.*\bmeds?\b".into(),
        r"(?i)\bmeds? (are|is) poison\b".into(),
        r"(?i)\bpharma(ceutical)?s? (are|is) (a scam|poison)\b".into(),
    ];
    table[2].weak_patterns = vec![
        r"(?i)\bdetox(ing|ify)?\b".into(),
        r"(?i)\btoxins? (flush(ed)?|out)\b".into(),
        r"(?i)\bfast(ing)? heals\b".into(),
    ];
    table[3].weak_patterns = vec![
        r"(?i)\b(NMN|NAD\+|peptides?|SARMs?|nootropics?)\b".into(),
        r"(?i)\bsupplements? instead of\b".into(),
        r"(?i)\bmegadose\b".into(),
    ];
    table[4].weak_patterns = vec![
        r"(?i)\bnebulizer trick\b".into(),
        r"(?i)\bhack your (CGM|monitor)\b".into(),
    ];

    table
}
