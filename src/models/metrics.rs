// file: src/models/metrics.rs
// description: derived metric rows handed to the rendering layer

use chrono::{Datelike, NaiveDateTime};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::performance::SellerPerformance;

/// Calendar month key, e.g. "2017-01". Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_datetime(ts: &NaiveDateTime) -> Self {
        Self { year: ts.year(), month: ts.month() }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// Serialized as "YYYY-MM" so it can double as a JSON map key.
impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let (year, month) = raw
            .split_once('-')
            .ok_or_else(|| D::Error::custom(format!("expected YYYY-MM, got `{raw}`")))?;
        let year = year.parse().map_err(D::Error::custom)?;
        let month: u32 = month.parse().map_err(D::Error::custom)?;
        if !(1..=12).contains(&month) {
            return Err(D::Error::custom(format!("month out of range in `{raw}`")));
        }
        Ok(Self { year, month })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOrderCount {
    pub month: YearMonth,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSatisfaction {
    pub order_id: String,
    pub avg_review_score: f64,
    /// None when the order has no payment row at all.
    pub total_payment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub count: u64,
}

/// Headline counters shown as metric cards on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub total_items_sold: usize,
    pub total_sellers: usize,
    pub total_payment_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub summary: DashboardSummary,
    pub seller_performance: Vec<SellerPerformance>,
    pub monthly_trend: Vec<MonthlyOrderCount>,
    pub satisfaction: Vec<OrderSatisfaction>,
    /// None when no products table was configured.
    pub top_categories: Option<BTreeMap<YearMonth, Vec<CategorySales>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_ordering_is_chronological() {
        let mut months = vec![
            YearMonth::new(2018, 1),
            YearMonth::new(2017, 12),
            YearMonth::new(2017, 2),
        ];
        months.sort();

        let rendered: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, vec!["2017-02", "2017-12", "2018-01"]);
    }

    #[test]
    fn test_year_month_serde_round_trip() {
        let month = YearMonth::new(2017, 7);
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2017-07\"");

        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }

    #[test]
    fn test_year_month_as_json_map_key() {
        let mut map = BTreeMap::new();
        map.insert(YearMonth::new(2017, 1), 3u64);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "{\"2017-01\":3}");
    }

    #[test]
    fn test_year_month_rejects_bad_month() {
        assert!(serde_json::from_str::<YearMonth>("\"2017-13\"").is_err());
        assert!(serde_json::from_str::<YearMonth>("\"201701\"").is_err());
    }
}
