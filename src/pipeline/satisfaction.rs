// file: src/pipeline/satisfaction.rs
// description: per-order review average joined with summed payment installments

use std::collections::{BTreeMap, HashMap};

use crate::models::{OrderSatisfaction, Payment, Review};

/// Averages duplicate review rows per order and left-joins the summed
/// payment installments. An order with no payment row keeps `None` for its
/// total, never zero. Output is sorted by order_id, so reruns over the same
/// inputs produce identical sequences.
pub fn satisfaction_vs_payment(reviews: &[Review], payments: &[Payment]) -> Vec<OrderSatisfaction> {
    let mut scores: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for review in reviews {
        let entry = scores.entry(review.order_id.as_str()).or_default();
        entry.0 += u64::from(review.review_score);
        entry.1 += 1;
    }

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for payment in payments {
        *totals.entry(payment.order_id.as_str()).or_default() += payment.payment_value;
    }

    scores
        .into_iter()
        .map(|(order_id, (sum, count))| OrderSatisfaction {
            order_id: order_id.to_string(),
            avg_review_score: sum as f64 / count as f64,
            total_payment: totals.get(order_id).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn review(order_id: &str, score: u8) -> Review {
        Review { order_id: order_id.into(), review_score: score }
    }

    fn payment(order_id: &str, value: f64) -> Payment {
        Payment { order_id: order_id.into(), payment_value: value }
    }

    #[test]
    fn test_duplicate_reviews_are_averaged() {
        let reviews = vec![review("1", 4), review("1", 2)];
        let payments = vec![payment("1", 100.0)];

        let rows = satisfaction_vs_payment(&reviews, &payments);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].order_id, "1");
        assert_eq!(rows[0].avg_review_score, 3.0);
        assert_eq!(rows[0].total_payment, Some(100.0));
    }

    #[test]
    fn test_installments_are_summed() {
        let reviews = vec![review("o1", 5)];
        let payments = vec![payment("o1", 30.0), payment("o1", 20.0), payment("o1", 50.0)];

        let rows = satisfaction_vs_payment(&reviews, &payments);
        assert_eq!(rows[0].total_payment, Some(100.0));
    }

    #[test]
    fn test_missing_payment_stays_none() {
        let reviews = vec![review("o1", 3)];

        let rows = satisfaction_vs_payment(&reviews, &[]);
        assert_eq!(rows[0].total_payment, None);
    }

    #[test]
    fn test_idempotent_over_unchanged_inputs() {
        let reviews = vec![review("b", 4), review("a", 1), review("b", 2), review("c", 5)];
        let payments = vec![payment("a", 10.0), payment("c", 7.5)];

        let first = satisfaction_vs_payment(&reviews, &payments);
        let second = satisfaction_vs_payment(&reviews, &payments);

        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_reviews_give_empty_result() {
        assert!(satisfaction_vs_payment(&[], &[payment("o1", 10.0)]).is_empty());
    }
}
