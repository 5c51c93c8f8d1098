// file: src/models/seller.rs
// description: seller record as read from the sellers table

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub seller_id: String,
    pub seller_zip_code_prefix: String,
    pub seller_city: String,
    pub seller_state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_from_csv_row() {
        let data = "seller_id,seller_zip_code_prefix,seller_city,seller_state\n\
                    s1,13023,campinas,SP\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let seller: Seller = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(seller.seller_id, "s1");
        assert_eq!(seller.seller_city, "campinas");
        assert_eq!(seller.seller_state, "SP");
    }
}
