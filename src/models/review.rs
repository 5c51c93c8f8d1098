// file: src/models/review.rs
// description: order review record; an order may carry duplicate review rows

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub order_id: String,
    pub review_score: u8,
}

impl Review {
    pub fn is_valid_score(&self) -> bool {
        (1..=5).contains(&self.review_score)
    }
}
