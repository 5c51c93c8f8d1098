// file: src/dataset/schema.rs
// description: required-column definitions and header validation per source table

use csv::StringRecord;

use crate::error::{AnalyticsError, Result};

/// Columns a table must carry. Extra columns in the source are ignored.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub required_columns: &'static [&'static str],
}

pub const SELLERS: TableSchema = TableSchema {
    name: "sellers",
    required_columns: &["seller_id", "seller_zip_code_prefix", "seller_city", "seller_state"],
};

pub const ORDERS: TableSchema = TableSchema {
    name: "orders",
    required_columns: &["order_id", "customer_id", "order_status", "order_purchase_timestamp"],
};

pub const ORDER_ITEMS: TableSchema = TableSchema {
    name: "order_items",
    required_columns: &["order_id", "order_item_id", "product_id", "seller_id", "price"],
};

pub const REVIEWS: TableSchema = TableSchema {
    name: "reviews",
    required_columns: &["order_id", "review_score"],
};

pub const PAYMENTS: TableSchema = TableSchema {
    name: "payments",
    required_columns: &["order_id", "payment_value"],
};

pub const PRODUCTS: TableSchema = TableSchema {
    name: "products",
    required_columns: &["product_id", "product_category_name"],
};

impl TableSchema {
    /// Reports the first missing required column as a schema error.
    pub fn validate_headers(&self, headers: &StringRecord) -> Result<()> {
        for column in self.required_columns {
            if !headers.iter().any(|h| h == *column) {
                return Err(AnalyticsError::schema(self.name, *column));
            }
        }
        Ok(())
    }
}
