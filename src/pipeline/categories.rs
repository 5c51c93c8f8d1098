// file: src/pipeline/categories.rs
// description: top product categories per month by order-item volume

use std::collections::{BTreeMap, HashMap};

use crate::models::{CategorySales, Order, OrderItem, Product, YearMonth};

/// Counts order items per (month, category), where an item's month is its
/// order's purchase month and its category comes from the products table.
/// Within each month categories are ranked by count descending with ties
/// broken by category name ascending, truncated to the top k. Items whose
/// order or category is unknown are skipped.
pub fn top_categories_by_month(
    order_items: &[OrderItem],
    orders: &[Order],
    products: &[Product],
    k: usize,
) -> BTreeMap<YearMonth, Vec<CategorySales>> {
    let order_month: HashMap<&str, YearMonth> = orders
        .iter()
        .map(|o| (o.order_id.as_str(), o.purchase_month()))
        .collect();

    let category_of: HashMap<&str, &str> = products
        .iter()
        .filter_map(|p| {
            p.product_category_name
                .as_deref()
                .map(|category| (p.product_id.as_str(), category))
        })
        .collect();

    let mut counts: BTreeMap<YearMonth, HashMap<&str, u64>> = BTreeMap::new();
    for item in order_items {
        let Some(&month) = order_month.get(item.order_id.as_str()) else {
            continue;
        };
        let Some(&category) = category_of.get(item.product_id.as_str()) else {
            continue;
        };
        *counts.entry(month).or_default().entry(category).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(month, by_category)| {
            let mut ranked: Vec<CategorySales> = by_category
                .into_iter()
                .map(|(category, count)| CategorySales { category: category.to_string(), count })
                .collect();
            ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
            ranked.truncate(k);
            (month, ranked)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn order(id: &str, date: &str) -> Order {
        Order {
            order_id: id.into(),
            customer_id: format!("c_{id}"),
            order_status: "delivered".into(),
            order_purchase_timestamp: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    fn item(order_id: &str, product_id: &str) -> OrderItem {
        OrderItem {
            order_id: order_id.into(),
            order_item_id: 1,
            product_id: product_id.into(),
            seller_id: "s1".into(),
            price: 10.0,
        }
    }

    fn product(id: &str, category: Option<&str>) -> Product {
        Product { product_id: id.into(), product_category_name: category.map(Into::into) }
    }

    #[test]
    fn test_ranked_by_count_within_month() {
        let orders = vec![order("o1", "2017-05-02"), order("o2", "2017-05-20")];
        let products = vec![product("p1", Some("toys")), product("p2", Some("beauty"))];
        let items = vec![
            item("o1", "p1"),
            item("o1", "p1"),
            item("o2", "p1"),
            item("o2", "p2"),
        ];

        let result = top_categories_by_month(&items, &orders, &products, 5);

        let may = &result[&YearMonth::new(2017, 5)];
        assert_eq!(
            may,
            &vec![
                CategorySales { category: "toys".into(), count: 3 },
                CategorySales { category: "beauty".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let orders = vec![order("o1", "2017-05-02")];
        let products = vec![
            product("p1", Some("toys")),
            product("p2", Some("beauty")),
            product("p3", Some("garden")),
        ];
        let items = vec![item("o1", "p1"), item("o1", "p2"), item("o1", "p3")];

        let result = top_categories_by_month(&items, &orders, &products, 5);

        let names: Vec<&str> =
            result[&YearMonth::new(2017, 5)].iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["beauty", "garden", "toys"]);
    }

    #[test]
    fn test_top_k_truncates() {
        let orders = vec![order("o1", "2017-05-02")];
        let products: Vec<Product> =
            (1..=4).map(|n| product(&format!("p{n}"), Some(&format!("cat{n}")))).collect();
        let items: Vec<OrderItem> =
            (1..=4).map(|n| item("o1", &format!("p{n}"))).collect();

        let result = top_categories_by_month(&items, &orders, &products, 2);
        assert_eq!(result[&YearMonth::new(2017, 5)].len(), 2);
    }

    #[test]
    fn test_unknown_order_or_category_is_skipped() {
        let orders = vec![order("o1", "2017-05-02")];
        let products = vec![product("p1", Some("toys")), product("p2", None)];
        let items = vec![
            item("o1", "p1"),
            item("orphan", "p1"),
            item("o1", "p2"),
            item("o1", "unknown_product"),
        ];

        let result = top_categories_by_month(&items, &orders, &products, 5);

        let may = &result[&YearMonth::new(2017, 5)];
        assert_eq!(may.len(), 1);
        assert_eq!(may[0].count, 1);
    }

    #[test]
    fn test_months_are_separated() {
        let orders = vec![order("o1", "2017-05-02"), order("o2", "2017-06-02")];
        let products = vec![product("p1", Some("toys"))];
        let items = vec![item("o1", "p1"), item("o2", "p1")];

        let result = top_categories_by_month(&items, &orders, &products, 5);

        assert_eq!(result.len(), 2);
        assert_eq!(result[&YearMonth::new(2017, 5)][0].count, 1);
        assert_eq!(result[&YearMonth::new(2017, 6)][0].count, 1);
    }
}
