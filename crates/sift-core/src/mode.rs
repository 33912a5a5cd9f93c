use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Threshold policy of a mode: one scalar for every category, or a
/// per-category map with a scalar fallback for unmapped categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThresholdPolicy {
    Scalar(f64),
    PerCategory {
        fallback: f64,
        overrides: HashMap<Category, f64>,
    },
}

impl ThresholdPolicy {
    /// Effective threshold for a category under this policy.
    pub fn threshold_for(&self, category: Category) -> f64 {
        match self {
            ThresholdPolicy::Scalar(t) => *t,
            ThresholdPolicy::PerCategory {
                fallback,
                overrides,
            } => overrides.get(&category).copied().unwrap_or(*fallback),
        }
    }
}

/// A named threshold policy controlling the precision/recall trade-off at
/// label-emission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub name: String,
    pub policy: ThresholdPolicy,
}

impl Mode {
    pub fn scalar(name: impl Into<String>, threshold: f64) -> Self {
        Self {
            name: name.into(),
            policy: ThresholdPolicy::Scalar(threshold),
        }
    }

    /// The permissive built-in mode (threshold 0.8).
    pub fn recall() -> Self {
        Self::scalar("recall", 0.8)
    }

    /// The built-in default mode (threshold 1.0).
    pub fn default_mode() -> Self {
        Self::scalar("default", 1.0)
    }

    /// The strict built-in mode (threshold 1.2).
    pub fn conservative() -> Self {
        Self::scalar("conservative", 1.2)
    }

    /// Effective threshold for a category under this mode.
    pub fn threshold_for(&self, category: Category) -> f64 {
        self.policy.threshold_for(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_modes_are_ordered() {
        let r = Mode::recall();
        let d = Mode::default_mode();
        let c = Mode::conservative();
        for cat in Category::ALL {
            assert!(r.threshold_for(cat) < d.threshold_for(cat));
            assert!(d.threshold_for(cat) < c.threshold_for(cat));
        }
    }

    #[test]
    fn per_category_override_wins() {
        let mut overrides = HashMap::new();
        overrides.insert(Category::UnsafeDeviceUse, 1.5);
        let mode = Mode {
            name: "custom".into(),
            policy: ThresholdPolicy::PerCategory {
                fallback: 1.0,
                overrides,
            },
        };
        assert_eq!(mode.threshold_for(Category::UnsafeDeviceUse), 1.5);
        assert_eq!(mode.threshold_for(Category::UnverifiedCure), 1.0);
    }
}
