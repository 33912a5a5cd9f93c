//! # sift-engine
//!
//! The scoring pipeline: segment → match → adjust → aggregate → label.
//!
//! Scoring is a pure function of (text, configuration, backend
//! availability): no hidden state, no I/O, never an error. Batch scoring is
//! embarrassingly parallel — the engine is `Sync` and shared read-only.

pub mod aggregate;
pub mod engine;
pub mod labeler;
pub mod telemetry;

pub use engine::{PolicyEngine, ScoreOutcome};
