// file: src/pipeline/mod.rs
// description: aggregation pipeline module exports

pub mod categories;
pub mod filter;
pub mod orchestrator;
pub mod quantile;
pub mod satisfaction;
pub mod sellers;
pub mod trend;

pub use categories::top_categories_by_month;
pub use filter::{DateRange, ScoreRange};
pub use orchestrator::{AnalyticsPipeline, summarize};
pub use quantile::{Quartiles, quantile};
pub use satisfaction::satisfaction_vs_payment;
pub use sellers::rank_sellers_by_performance;
pub use trend::monthly_order_trend;
