// file: src/models/order.rs
// description: order record with purchase timestamp parsing

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::metrics::YearMonth;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_status: String,
    #[serde(deserialize_with = "de_timestamp")]
    pub order_purchase_timestamp: NaiveDateTime,
}

impl Order {
    pub fn purchase_date(&self) -> NaiveDate {
        self.order_purchase_timestamp.date()
    }

    pub fn purchase_month(&self) -> YearMonth {
        YearMonth::from_datetime(&self.order_purchase_timestamp)
    }
}

// Accepts both full timestamps ("2017-01-15 10:56:33") and bare dates
// ("2017-01-15"), which appear across the dataset variants.
fn de_timestamp<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
        })
        .map_err(serde::de::Error::custom)
}
