// file: src/dataset/mod.rs
// description: dataset module exports and the in-memory table container

pub mod cache;
pub mod loader;
pub mod schema;

pub use cache::CachedLoader;
pub use loader::{DatasetLoader, TableCheck};
pub use schema::TableSchema;

use crate::models::{Order, OrderItem, Payment, Product, Review, Seller};

/// All source tables for one run, held in memory. Products is optional;
/// the original dashboard variants disagree on whether it exists.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub reviews: Vec<Review>,
    pub payments: Vec<Payment>,
    pub products: Option<Vec<Product>>,
}
