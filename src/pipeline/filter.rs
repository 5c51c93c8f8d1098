// file: src/pipeline/filter.rs
// description: validated filter ranges applied before aggregation

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::error::{AnalyticsError, Result};
use crate::models::{Order, OrderItem, Product, Review};

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AnalyticsError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Builds a range from optional bounds; a missing side is unbounded.
    /// Returns None when neither bound is set.
    pub fn bounded(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Option<Self>> {
        if start.is_none() && end.is_none() {
            return Ok(None);
        }
        Self::new(start.unwrap_or(NaiveDate::MIN), end.unwrap_or(NaiveDate::MAX)).map(Some)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Inclusive review-score range within the 1–5 domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    min: u8,
    max: u8,
}

impl ScoreRange {
    pub fn new(min: u8, max: u8) -> Result<Self> {
        if !(1..=5).contains(&min) || !(1..=5).contains(&max) || min > max {
            return Err(AnalyticsError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }

    pub fn bounded(min: Option<u8>, max: Option<u8>) -> Result<Option<Self>> {
        if min.is_none() && max.is_none() {
            return Ok(None);
        }
        Self::new(min.unwrap_or(1), max.unwrap_or(5)).map(Some)
    }

    pub fn contains(&self, score: u8) -> bool {
        self.min <= score && score <= self.max
    }
}

/// Ids of the orders purchased inside the range.
pub fn order_ids_in_range<'a>(orders: &'a [Order], range: &DateRange) -> HashSet<&'a str> {
    orders
        .iter()
        .filter(|o| range.contains(o.purchase_date()))
        .map(|o| o.order_id.as_str())
        .collect()
}

pub fn filter_reviews_by_score(reviews: &[Review], range: &ScoreRange) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| range.contains(r.review_score))
        .cloned()
        .collect()
}

/// Keeps the order items whose product belongs to the given category.
pub fn filter_items_by_category(
    items: &[OrderItem],
    products: &[Product],
    category: &str,
) -> Vec<OrderItem> {
    let matching: HashSet<&str> = products
        .iter()
        .filter(|p| p.product_category_name.as_deref() == Some(category))
        .map(|p| p.product_id.as_str())
        .collect();

    items
        .iter()
        .filter(|item| matching.contains(item.product_id.as_str()))
        .cloned()
        .collect()
}
