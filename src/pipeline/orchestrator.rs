// file: src/pipeline/orchestrator.rs
// description: coordinates filtering, the four aggregations and the summary
// reference: batch recomputation over the in-memory dataset

use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{AnalyticsError, Result};
use crate::models::{DashboardReport, DashboardSummary};
use crate::pipeline::categories::top_categories_by_month;
use crate::pipeline::filter::{self, DateRange, ScoreRange};
use crate::pipeline::satisfaction::satisfaction_vs_payment;
use crate::pipeline::sellers::rank_sellers_by_performance;
use crate::pipeline::trend::monthly_order_trend;

pub struct AnalyticsPipeline {
    config: Config,
}

impl AnalyticsPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// One full recomputation pass: validates the configured filters,
    /// applies them, runs every aggregation and assembles the report.
    /// The dataset itself is never mutated.
    pub fn build_report(&self, dataset: &Dataset) -> Result<DashboardReport> {
        let started = Instant::now();
        let filters = &self.config.filters;

        let date_range = DateRange::bounded(filters.start_date, filters.end_date)?;
        let score_range = ScoreRange::bounded(filters.min_score, filters.max_score)?;

        let summary = summarize(dataset);

        let mut items = match (&filters.category, &dataset.products) {
            (Some(category), Some(products)) => {
                let kept =
                    filter::filter_items_by_category(&dataset.order_items, products, category);
                debug!("Category filter `{}` kept {} of {} items", category, kept.len(),
                    dataset.order_items.len());
                kept
            }
            (Some(category), None) => {
                return Err(AnalyticsError::Config(format!(
                    "category filter `{category}` requires a products table"
                )));
            }
            (None, _) => dataset.order_items.clone(),
        };

        // The date window restricts every section, not just the trend: items
        // (and with them the seller ranking and category counts) as well as
        // reviews and payments are cut to orders purchased inside it.
        let in_range = date_range
            .as_ref()
            .map(|range| filter::order_ids_in_range(&dataset.orders, range));
        if let Some(ids) = &in_range {
            items.retain(|item| ids.contains(item.order_id.as_str()));
        }

        let mut seller_performance = rank_sellers_by_performance(&items, &dataset.sellers)?;
        if !filters.performance_categories.is_empty() {
            seller_performance
                .retain(|row| filters.performance_categories.contains(&row.performance_category));
        }

        // With a category filter, the trend counts only orders that contain
        // at least one item of that category.
        let monthly_trend = match &filters.category {
            Some(_) => {
                let with_category: HashSet<&str> =
                    items.iter().map(|item| item.order_id.as_str()).collect();
                let orders: Vec<_> = dataset
                    .orders
                    .iter()
                    .filter(|o| with_category.contains(o.order_id.as_str()))
                    .cloned()
                    .collect();
                monthly_order_trend(&orders, date_range.as_ref())
            }
            None => monthly_order_trend(&dataset.orders, date_range.as_ref()),
        };

        let mut reviews = match &score_range {
            Some(range) => filter::filter_reviews_by_score(&dataset.reviews, range),
            None => dataset.reviews.clone(),
        };
        if let Some(ids) = &in_range {
            reviews.retain(|review| ids.contains(review.order_id.as_str()));
        }
        let payments = match &in_range {
            Some(ids) => dataset
                .payments
                .iter()
                .filter(|p| ids.contains(p.order_id.as_str()))
                .cloned()
                .collect(),
            None => dataset.payments.clone(),
        };
        let satisfaction = satisfaction_vs_payment(&reviews, &payments);

        // Items are already cut to the window, so out-of-range orders cannot
        // contribute a month here.
        let top_categories = dataset.products.as_ref().map(|products| {
            top_categories_by_month(&items, &dataset.orders, products, self.config.report.top_k)
        });

        info!(
            "Report built in {:.0} ms: {} ranked sellers, {} months, {} satisfaction rows",
            started.elapsed().as_secs_f64() * 1000.0,
            seller_performance.len(),
            monthly_trend.len(),
            satisfaction.len()
        );

        Ok(DashboardReport {
            summary,
            seller_performance,
            monthly_trend,
            satisfaction,
            top_categories,
        })
    }
}

/// Headline counters over the unfiltered dataset, matching the dashboard's
/// metric cards.
pub fn summarize(dataset: &Dataset) -> DashboardSummary {
    DashboardSummary {
        total_orders: dataset.orders.len(),
        total_items_sold: dataset.order_items.len(),
        total_sellers: dataset.sellers.len(),
        total_payment_value: dataset.payments.iter().map(|p| p.payment_value).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, OrderItem, Payment, PerformanceCategory, Product, Review, Seller};
    use chrono::NaiveDate;

    fn order(id: &str, date: &str) -> Order {
        Order {
            order_id: id.into(),
            customer_id: format!("c_{id}"),
            order_status: "delivered".into(),
            order_purchase_timestamp: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        }
    }

    fn item(order_id: &str, product_id: &str, seller_id: &str) -> OrderItem {
        OrderItem {
            order_id: order_id.into(),
            order_item_id: 1,
            product_id: product_id.into(),
            seller_id: seller_id.into(),
            price: 25.0,
        }
    }

    fn fixture_dataset() -> Dataset {
        Dataset {
            sellers: vec![Seller {
                seller_id: "s1".into(),
                seller_zip_code_prefix: "13023".into(),
                seller_city: "campinas".into(),
                seller_state: "SP".into(),
            }],
            orders: vec![order("o1", "2017-01-15"), order("o2", "2017-02-01")],
            order_items: vec![item("o1", "p1", "s1"), item("o2", "p2", "s2")],
            reviews: vec![
                Review { order_id: "o1".into(), review_score: 4 },
                Review { order_id: "o1".into(), review_score: 2 },
                Review { order_id: "o2".into(), review_score: 1 },
            ],
            payments: vec![
                Payment { order_id: "o1".into(), payment_value: 60.0 },
                Payment { order_id: "o1".into(), payment_value: 40.0 },
            ],
            products: Some(vec![
                Product { product_id: "p1".into(), product_category_name: Some("toys".into()) },
                Product { product_id: "p2".into(), product_category_name: Some("beauty".into()) },
            ]),
        }
    }

    #[test]
    fn test_full_report() {
        let pipeline = AnalyticsPipeline::new(Config::default_config());
        let report = pipeline.build_report(&fixture_dataset()).unwrap();

        assert_eq!(report.summary.total_orders, 2);
        assert_eq!(report.summary.total_payment_value, 100.0);
        assert_eq!(report.seller_performance.len(), 2);
        assert_eq!(report.monthly_trend.len(), 2);
        assert_eq!(report.satisfaction.len(), 2);
        assert_eq!(report.top_categories.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_trend_total_matches_filtered_orders() {
        let mut config = Config::default_config();
        config.filters.start_date = NaiveDate::from_ymd_opt(2017, 1, 1);
        config.filters.end_date = NaiveDate::from_ymd_opt(2017, 1, 31);

        let pipeline = AnalyticsPipeline::new(config);
        let report = pipeline.build_report(&fixture_dataset()).unwrap();

        let total: u64 = report.monthly_trend.iter().map(|m| m.count).sum();
        assert_eq!(total, 1);
        assert_eq!(report.monthly_trend[0].month.to_string(), "2017-01");
    }

    #[test]
    fn test_date_window_restricts_seller_ranking() {
        let mut config = Config::default_config();
        config.filters.start_date = NaiveDate::from_ymd_opt(2017, 1, 1);
        config.filters.end_date = NaiveDate::from_ymd_opt(2017, 1, 31);

        let pipeline = AnalyticsPipeline::new(config);
        let report = pipeline.build_report(&fixture_dataset()).unwrap();

        // s2's only item belongs to the February order and must not rank.
        let ids: Vec<&str> =
            report.seller_performance.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["s1"]);
    }

    #[test]
    fn test_date_window_restricts_satisfaction() {
        let mut config = Config::default_config();
        config.filters.start_date = NaiveDate::from_ymd_opt(2017, 1, 1);
        config.filters.end_date = NaiveDate::from_ymd_opt(2017, 1, 31);

        let pipeline = AnalyticsPipeline::new(config);
        let report = pipeline.build_report(&fixture_dataset()).unwrap();

        assert_eq!(report.satisfaction.len(), 1);
        assert_eq!(report.satisfaction[0].order_id, "o1");
        assert_eq!(report.satisfaction[0].total_payment, Some(100.0));
    }

    #[test]
    fn test_category_filter_restricts_trend() {
        let mut config = Config::default_config();
        // p1/"toys" is only bought in the January order.
        config.filters.category = Some("toys".into());

        let pipeline = AnalyticsPipeline::new(config);
        let report = pipeline.build_report(&fixture_dataset()).unwrap();

        assert_eq!(report.monthly_trend.len(), 1);
        assert_eq!(report.monthly_trend[0].month.to_string(), "2017-01");
        assert_eq!(report.monthly_trend[0].count, 1);
    }

    #[test]
    fn test_score_filter_drops_low_reviews() {
        let mut config = Config::default_config();
        config.filters.min_score = Some(2);

        let pipeline = AnalyticsPipeline::new(config);
        let report = pipeline.build_report(&fixture_dataset()).unwrap();

        // o2 only has a score-1 review and disappears.
        assert_eq!(report.satisfaction.len(), 1);
        assert_eq!(report.satisfaction[0].order_id, "o1");
        assert_eq!(report.satisfaction[0].avg_review_score, 3.0);
        assert_eq!(report.satisfaction[0].total_payment, Some(100.0));
    }

    #[test]
    fn test_category_filter_without_products_table_fails() {
        let mut config = Config::default_config();
        config.filters.category = Some("toys".into());

        let mut dataset = fixture_dataset();
        dataset.products = None;

        let pipeline = AnalyticsPipeline::new(config);
        assert!(matches!(
            pipeline.build_report(&dataset).unwrap_err(),
            AnalyticsError::Config(_)
        ));
    }

    #[test]
    fn test_performance_subset_filter() {
        let mut config = Config::default_config();
        config.filters.performance_categories = vec![PerformanceCategory::Top];

        let pipeline = AnalyticsPipeline::new(config);
        let report = pipeline.build_report(&fixture_dataset()).unwrap();

        assert!(
            report
                .seller_performance
                .iter()
                .all(|row| row.performance_category == PerformanceCategory::Top)
        );
    }

    #[test]
    fn test_missing_products_table_skips_categories() {
        let mut dataset = fixture_dataset();
        dataset.products = None;

        let pipeline = AnalyticsPipeline::new(Config::default_config());
        let report = pipeline.build_report(&dataset).unwrap();

        assert!(report.top_categories.is_none());
    }
}
