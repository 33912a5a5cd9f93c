//! # sift-semantic
//!
//! Embedding-similarity verification for the sift risk labeler.
//!
//! A capability-compatible supplement to the rule-based context and source
//! checks: sentences are compared against reference exemplars (refutation,
//! legitimate citation, source misuse) and similarity above an acceptance
//! threshold emits adjustments capped identically to the rule-based
//! counterparts. A missing or failing backend degrades silently to "no
//! semantic signal" — callers cannot tell absence apart from no signal.

pub mod exemplars;
pub mod tfidf;
pub mod verifier;

pub use exemplars::ExemplarSet;
pub use tfidf::TfIdfBackend;
pub use verifier::SemanticVerifier;
