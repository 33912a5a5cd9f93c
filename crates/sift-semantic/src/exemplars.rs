//! Reference exemplars for similarity comparison.

/// Phrases typical of refuting a claim rather than endorsing it.
pub const REFUTATION_EXEMPLARS: &[&str] = &[
    "this is false",
    "this is not true",
    "this is misinformation",
    "this claim is false",
    "this has been debunked",
    "this is a myth",
    "this is wrong",
    "this is incorrect",
    "this is dangerous",
    "this is harmful",
    "do not do this",
    "this is not recommended",
];

/// Phrases typical of legitimate, evidence-based health communication.
pub const LEGITIMATE_EXEMPLARS: &[&str] = &[
    "talk to your doctor",
    "consult your physician",
    "seek medical advice",
    "according to medical research",
    "studies show",
    "clinical trial",
    "peer-reviewed research",
    "evidence-based",
];

/// Phrases typical of misrepresenting or dismissing a credible source.
pub const MISUSE_EXEMPLARS: &[&str] = &[
    "the experts are wrong",
    "despite what the authorities say",
    "they say it works but it does not",
    "the official guidance is lying",
];

/// The three exemplar groups the verifier compares against.
#[derive(Debug, Clone)]
pub struct ExemplarSet {
    pub refutation: Vec<String>,
    pub legitimate: Vec<String>,
    pub misuse: Vec<String>,
}

impl Default for ExemplarSet {
    fn default() -> Self {
        let own = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            refutation: own(REFUTATION_EXEMPLARS),
            legitimate: own(LEGITIMATE_EXEMPLARS),
            misuse: own(MISUSE_EXEMPLARS),
        }
    }
}
