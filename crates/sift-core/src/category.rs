use serde::{Deserialize, Serialize};

/// The fixed set of risk labels the scorer can emit.
///
/// Definition order is the label-emission order: `labels()` output is sorted
/// by this order, never by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "potential-unverified-cure")]
    UnverifiedCure,
    #[serde(rename = "potential-unsafe-medication-advice")]
    UnsafeMedicationAdvice,
    #[serde(rename = "risky-fasting-detox-content")]
    RiskyFastingDetox,
    #[serde(rename = "unverified-supplement-claims")]
    UnverifiedSupplement,
    #[serde(rename = "unsafe-device-usage")]
    UnsafeDeviceUse,
}

impl Category {
    /// All categories in definition order.
    pub const ALL: [Category; 5] = [
        Category::UnverifiedCure,
        Category::UnsafeMedicationAdvice,
        Category::RiskyFastingDetox,
        Category::UnverifiedSupplement,
        Category::UnsafeDeviceUse,
    ];

    /// Stable string identifier, used in config files and label output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::UnverifiedCure => "potential-unverified-cure",
            Category::UnsafeMedicationAdvice => "potential-unsafe-medication-advice",
            Category::RiskyFastingDetox => "risky-fasting-detox-content",
            Category::UnverifiedSupplement => "unverified-supplement-claims",
            Category::UnsafeDeviceUse => "unsafe-device-usage",
        }
    }

    /// Parse a string identifier back into a category.
    pub fn from_str_id(s: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    /// Position in definition order.
    pub fn ordinal(&self) -> usize {
        Category::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Whether this category is one of the specific categories that shrink
    /// the generic cure score when both match the same text.
    pub fn is_cure_overlap_specific(&self) -> bool {
        matches!(
            self,
            Category::UnsafeMedicationAdvice
                | Category::UnverifiedSupplement
                | Category::RiskyFastingDetox
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
