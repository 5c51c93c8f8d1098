// file: src/models/product.rs
// description: product record; the category name may be blank in the source

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(deserialize_with = "de_blank_as_none")]
    pub product_category_name: Option<String>,
}

fn de_blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_category_becomes_none() {
        let data = "product_id,product_category_name\np1,beleza_saude\np2,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let products: Vec<Product> = reader.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(products[0].product_category_name.as_deref(), Some("beleza_saude"));
        assert_eq!(products[1].product_category_name, None);
    }
}
