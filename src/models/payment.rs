// file: src/models/payment.rs
// description: payment installment record; an order may have several

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub payment_value: f64,
}
