//! Built-in auxiliary cue lexicons.
//!
//! These are not the per-category tables (those come from `PolicyConfig`
//! and fail construction on a bad pattern). Auxiliary cues compile through
//! `LazyLock<Option<Regex>>`: a cue that fails to compile silently produces
//! no matches, so one bad lexicon entry degrades that signal only and never
//! aborts scoring.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! cue {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> =
            LazyLock::new(|| match Regex::new($regex_str) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(
                        cue = stringify!($name),
                        error = %e,
                        "cue lexicon failed to compile, signal disabled"
                    );
                    None
                }
            });
    };
}

// ── Negation / refutation (void cues) ──────────────────────────────────────
cue!(
    RE_NEGATION,
    r"(?i)\b(don['’]t|do not|never|not true|is false|are false|wrong|myth|debunk(ed|ing)?|misinformation|fact[- ]?check(ed|ing)?)\b"
);

// ── Quote detection ────────────────────────────────────────────────────────
cue!(
    RE_REPORTING_VERB,
    r"(?i)\b(say(s|ing)?|said|claim(s|ed|ing)?|alleg(es?|ed|ing)|according to|wrote|post(s|ed)?)\b"
);

// ── Tentative / hedging ────────────────────────────────────────────────────
cue!(
    RE_TENTATIVE,
    r"(?i)\b(i['’]ll see if|not sure|unsure|might|maybe|wondering if|thinking of trying|only with (my |a )?(doctor['’]s )?approval|if my doctor)\b"
);

// ── Context-window cues ────────────────────────────────────────────────────
cue!(
    RE_WINDOW_REFUTATION,
    r"(?i)\b((is|are|it['’]s)\s+not\s+true|this is misinformation|this claim is false|debunk(ed|ing)|(is|are) false|do not believe)\b"
);
cue!(
    RE_WINDOW_SAFETY,
    r"(?i)\b(talk to|speak with|check with|consult)\s+(your|a)\s+(doctor|physician|pharmacist)\b"
);
cue!(
    RE_WINDOW_CREDIBLE,
    r"(?i)\b(systematic review|meta[- ]analysis|randomized (controlled )?trial|peer[- ]reviewed|clinical (trial|evidence)|evidence[- ]based)\b"
);

// ── Citation verification ──────────────────────────────────────────────────
// Acronyms stay case-sensitive: lowercase "who" is a pronoun, not the WHO.
cue!(
    RE_ORG,
    r"\b(CDC|WHO|NIH|NHS|EMA|FDA|Mayo Clinic|Cochrane)\b"
);
cue!(
    RE_CITATION_LEGITIMACY,
    r"(?i)\b(study|studies|guidelines|reports?|finds?|shows?|recommends?|according to|randomized (controlled )?trial|systematic review|meta[- ]analysis)\b"
);
// Misuse shapes that name the organization directly.
cue!(
    RE_MISUSE_DIRECT,
    r"\b(?i:despite|ignoring|ignore)(?:\s+(?i:the))?\s+(?:CDC|WHO|NIH|NHS|EMA|FDA|Mayo Clinic|Cochrane)\b|\b(?:CDC|WHO|NIH|NHS|EMA|FDA|Mayo Clinic|Cochrane)\s+(?i:is|are)\s+(?i:wrong|lying|corrupt)\b"
);
// "<org> says X but Y" — the cue itself; attachment to the nearest
// preceding org mention happens in sources.rs.
cue!(
    RE_MISUSE_CONTRADICTION,
    r"(?i)\b(say(s)?|said|claim(s|ed)?)\b[^.!?]*\bbut\b"
);

// ── Stance ─────────────────────────────────────────────────────────────────
// `100%` carries no trailing \b: `%` is a non-word character.
cue!(
    RE_CERTAINTY,
    r"(?i)\b(never|always|guaranteed?|for sure)\b|\b100%"
);
cue!(
    RE_IMPERATIVE_HEALTH,
    r"(?i)\b(stop|quit|ditch|throw away|skip|avoid|refuse)\b[^.!?]*\b(shots?|vaccines?|meds?|medications?|insulin)\b|\bjust\b[^.!?]*\b(take|use|drink|eat|do)\b[^.!?]*\binstead\b"
);

// ── URLs ───────────────────────────────────────────────────────────────────
cue!(RE_URL, r"https?://[^\s<>\)\]]+");

/// Whether a cue matches. A cue that failed to compile matches nothing.
pub fn is_match(cue: &LazyLock<Option<Regex>>, text: &str) -> bool {
    cue.as_ref().is_some_and(|re| re.is_match(text))
}

/// Number of occurrences of a cue in the text.
pub fn count(cue: &LazyLock<Option<Regex>>, text: &str) -> usize {
    cue.as_ref().map_or(0, |re| re.find_iter(text).count())
}

/// First match of a cue, as the matched substring.
pub fn first_match<'t>(cue: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    cue.as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str())
}

/// All matches of a cue with their byte offsets.
pub fn find_all<'t>(cue: &LazyLock<Option<Regex>>, text: &'t str) -> Vec<(usize, &'t str)> {
    cue.as_ref().map_or_else(Vec::new, |re| {
        re.find_iter(text).map(|m| (m.start(), m.as_str())).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_cues_fire() {
        assert!(is_match(&RE_NEGATION, "Don't stop taking your insulin"));
        assert!(is_match(&RE_NEGATION, "this has been debunked"));
        assert!(!is_match(&RE_NEGATION, "stop taking your insulin"));
    }

    #[test]
    fn org_cue_is_case_sensitive() {
        assert!(is_match(&RE_ORG, "the CDC recommends vaccination"));
        assert!(!is_match(&RE_ORG, "people who fast regularly"));
    }

    #[test]
    fn certainty_count_sees_every_occurrence() {
        assert_eq!(count(&RE_CERTAINTY, "100% guaranteed, always works"), 3);
    }

    #[test]
    fn imperative_health_cue_fires() {
        assert!(is_match(&RE_IMPERATIVE_HEALTH, "stop taking your insulin"));
        assert!(is_match(&RE_IMPERATIVE_HEALTH, "just drink celery juice instead"));
        assert!(!is_match(&RE_IMPERATIVE_HEALTH, "keep taking your insulin"));
    }

    #[test]
    fn url_cue_extracts_links() {
        let found = find_all(&RE_URL, "see https://example.com/a and http://cdc.gov");
        assert_eq!(found.len(), 2);
    }
}
