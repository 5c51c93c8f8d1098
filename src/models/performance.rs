// file: src/models/performance.rs
// description: quartile-based seller performance labels and ranked rows

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceCategory {
    Low,
    Medium,
    High,
    Top,
}

impl PerformanceCategory {
    pub const ALL: [PerformanceCategory; 4] = [
        PerformanceCategory::Low,
        PerformanceCategory::Medium,
        PerformanceCategory::High,
        PerformanceCategory::Top,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceCategory::Low => "Low",
            PerformanceCategory::Medium => "Medium",
            PerformanceCategory::High => "High",
            PerformanceCategory::Top => "Top",
        }
    }

    /// Label for the n-th quartile bucket, counting from the bottom.
    pub fn from_bucket(bucket: usize) -> Self {
        Self::ALL[bucket.min(Self::ALL.len() - 1)]
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerformanceCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(PerformanceCategory::Low),
            "medium" => Ok(PerformanceCategory::Medium),
            "high" => Ok(PerformanceCategory::High),
            "top" => Ok(PerformanceCategory::Top),
            other => Err(format!(
                "unknown performance category `{other}` (expected low, medium, high or top)"
            )),
        }
    }
}

/// One ranked seller. City and state come from a left join against the
/// sellers table, so an unknown seller_id keeps its row with both unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerPerformance {
    pub seller_id: String,
    pub total_orders: u64,
    pub seller_city: Option<String>,
    pub seller_state: Option<String>,
    pub performance_category: PerformanceCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in PerformanceCategory::ALL {
            let parsed: PerformanceCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("TOP".parse::<PerformanceCategory>().unwrap(), PerformanceCategory::Top);
        assert!("best".parse::<PerformanceCategory>().is_err());
    }

    #[test]
    fn test_from_bucket_clamps() {
        assert_eq!(PerformanceCategory::from_bucket(0), PerformanceCategory::Low);
        assert_eq!(PerformanceCategory::from_bucket(3), PerformanceCategory::Top);
        assert_eq!(PerformanceCategory::from_bucket(7), PerformanceCategory::Top);
    }
}
