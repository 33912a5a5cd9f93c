//! Threshold labeling.
//!
//! Compares finalized scores against a mode's threshold policy. Output is
//! ordered by category definition, never by score; joining labels for
//! display is the caller's concern.

use sift_core::category::Category;
use sift_core::config::PolicyConfig;
use sift_core::events::ScoreRecord;
use sift_core::mode::Mode;

/// Categories whose final score meets the effective threshold.
pub fn labels(config: &PolicyConfig, record: &ScoreRecord, mode: &Mode) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|&category| record.get(category) >= config.effective_threshold(category, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_yields_no_labels() {
        let config = PolicyConfig::default();
        let record = ScoreRecord::new();
        for mode in [Mode::recall(), Mode::default_mode(), Mode::conservative()] {
            assert!(labels(&config, &record, &mode).is_empty());
        }
    }

    #[test]
    fn boundary_score_is_labeled() {
        let config = PolicyConfig::default();
        let mut record = ScoreRecord::new();
        record.set(Category::UnsafeDeviceUse, 1.0);
        assert_eq!(
            labels(&config, &record, &Mode::default_mode()),
            vec![Category::UnsafeDeviceUse]
        );
        assert!(labels(&config, &record, &Mode::conservative()).is_empty());
    }

    #[test]
    fn output_follows_definition_order_not_score_order() {
        let config = PolicyConfig::default();
        let mut record = ScoreRecord::new();
        record.set(Category::UnsafeDeviceUse, 2.5);
        record.set(Category::UnverifiedCure, 1.1);
        assert_eq!(
            labels(&config, &record, &Mode::default_mode()),
            vec![Category::UnverifiedCure, Category::UnsafeDeviceUse]
        );
    }
}
