// file: src/pipeline/trend.rs
// description: monthly order counts over an optional date range

use std::collections::BTreeMap;

use crate::models::{MonthlyOrderCount, Order, YearMonth};
use crate::pipeline::filter::DateRange;

/// Counts orders per calendar month, restricted to the inclusive date range
/// when one is given. Output is chronological.
pub fn monthly_order_trend(orders: &[Order], range: Option<&DateRange>) -> Vec<MonthlyOrderCount> {
    let mut counts: BTreeMap<YearMonth, u64> = BTreeMap::new();

    for order in orders {
        if let Some(range) = range
            && !range.contains(order.purchase_date())
        {
            continue;
        }
        *counts.entry(order.purchase_month()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(month, count)| MonthlyOrderCount { month, count })
        .collect()
}
