// file: src/models/order_item.rs
// description: order item record attributing a product and seller to a price

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    pub seller_id: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_ignores_extra_columns() {
        let data = "order_id,order_item_id,product_id,seller_id,price,freight_value\n\
                    o1,1,p1,s1,59.90,13.29\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let item: OrderItem = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(item.order_item_id, 1);
        assert_eq!(item.seller_id, "s1");
        assert!((item.price - 59.90).abs() < f64::EPSILON);
    }
}
