// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod metrics;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod performance;
pub mod product;
pub mod review;
pub mod seller;

pub use metrics::{
    CategorySales, DashboardReport, DashboardSummary, MonthlyOrderCount, OrderSatisfaction,
    YearMonth,
};
pub use order::Order;
pub use order_item::OrderItem;
pub use payment::Payment;
pub use performance::{PerformanceCategory, SellerPerformance};
pub use product::Product;
pub use review::Review;
pub use seller::Seller;
