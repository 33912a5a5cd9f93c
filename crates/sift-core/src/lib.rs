//! # sift-core
//!
//! Foundation crate for the sift health-misinformation risk labeler.
//! Defines the category set, match/adjustment event types, threshold modes,
//! domain lists, configuration, errors, and the similarity-backend trait.
//! Every other crate in the workspace depends on this. No I/O happens here.

pub mod category;
pub mod config;
pub mod domains;
pub mod errors;
pub mod events;
pub mod mode;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::Category;
pub use config::PolicyConfig;
pub use domains::DomainList;
pub use errors::{SiftError, SiftResult};
pub use events::{Adjustment, AdjustmentSource, MatchEvent, MatchTier, ScoreRecord, Sentence};
pub use mode::{Mode, ThresholdPolicy};
