// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod dataset;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{Config, DatasetConfig, FilterConfig, ReportConfig};
pub use dataset::{CachedLoader, Dataset, DatasetLoader, TableCheck};
pub use error::{AnalyticsError, Result};
pub use exporter::{ExportManifest, ReportExporter};
pub use models::{
    CategorySales, DashboardReport, DashboardSummary, MonthlyOrderCount, Order, OrderItem,
    OrderSatisfaction, Payment, PerformanceCategory, Product, Review, Seller, SellerPerformance,
    YearMonth,
};
pub use pipeline::{
    AnalyticsPipeline, DateRange, ScoreRange, monthly_order_trend, rank_sellers_by_performance,
    satisfaction_vs_payment, summarize, top_categories_by_month,
};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _pipeline = AnalyticsPipeline::new(config);
    }
}
