// file: src/pipeline/sellers.rs
// description: seller ranking by order volume with quartile performance labels

use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::models::{OrderItem, PerformanceCategory, Seller, SellerPerformance};
use crate::pipeline::quantile::Quartiles;

/// Counts order items per seller, left-joins seller attributes and assigns
/// each seller a quartile-based performance category. Output is sorted by
/// total_orders descending, seller_id ascending.
pub fn rank_sellers_by_performance(
    order_items: &[OrderItem],
    sellers: &[Seller],
) -> Result<Vec<SellerPerformance>> {
    if order_items.is_empty() {
        return Ok(Vec::new());
    }

    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for item in order_items {
        *counts.entry(item.seller_id.as_str()).or_default() += 1;
    }

    let totals: Vec<f64> = counts.values().map(|&c| c as f64).collect();
    let quartiles = Quartiles::new(&totals)?;

    let attributes: HashMap<&str, &Seller> =
        sellers.iter().map(|s| (s.seller_id.as_str(), s)).collect();

    let mut ranked: Vec<SellerPerformance> = counts
        .iter()
        .map(|(&seller_id, &total_orders)| {
            let seller = attributes.get(seller_id);
            SellerPerformance {
                seller_id: seller_id.to_string(),
                total_orders,
                seller_city: seller.map(|s| s.seller_city.clone()),
                seller_state: seller.map(|s| s.seller_state.clone()),
                performance_category: PerformanceCategory::from_bucket(
                    quartiles.bucket(total_orders as f64),
                ),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total_orders
            .cmp(&a.total_orders)
            .then_with(|| a.seller_id.cmp(&b.seller_id))
    });

    Ok(ranked)
}
