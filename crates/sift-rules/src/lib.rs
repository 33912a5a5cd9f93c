//! # sift-rules
//!
//! Rule-based detection layer for the sift risk labeler.
//!
//! ## Modules
//! - **segment** — deterministic sentence segmentation
//! - **patterns** — compiled strong/weak category tables
//! - **lexicon** — built-in auxiliary cue lexicons (negation, quoting,
//!   hedging, window cues, citations, stance)
//! - **context** — per-sentence negation/quote/tentative/window analysis
//! - **sources** — linked-domain and named-organization verification
//! - **stance** — whole-text certainty/imperative scanning

pub mod context;
pub mod lexicon;
pub mod patterns;
pub mod segment;
pub mod sources;
pub mod stance;

pub use context::{ContextAnalyzer, ContextFindings};
pub use patterns::PatternSet;
pub use sources::{SourceFindings, SourceVerifier};
pub use stance::StanceScanner;
