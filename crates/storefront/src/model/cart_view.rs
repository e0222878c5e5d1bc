//! The cart as a renderer sees it: its entries and their total.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Product;

/// A snapshot of the cart together with the total of that same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub items: Vec<Arc<Product>>,
    pub total: Decimal,
}

impl CartView {
    /// `None` when the total does not fit in a `Decimal`.
    pub fn new(items: Vec<Arc<Product>>) -> Option<Self> {
        let total = cart_total(&items)?;
        Some(Self { items, total })
    }
}

/// Exact sum of every entry's price. Zero for an empty cart, `None` on overflow.
pub fn cart_total(items: &[Arc<Product>]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, product| total.checked_add(product.price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn priced(cents: i64) -> Arc<Product> {
        Arc::new(Product::new(1, "Item", "SKU", Decimal::new(cents, 2), 1))
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), Some(Decimal::ZERO));
        assert!(CartView::new(vec![]).unwrap().items.is_empty());
    }

    #[test]
    fn test_total_has_no_float_drift() {
        let items = vec![priced(999), priced(2000)];
        let view = CartView::new(items).unwrap();
        assert_eq!(view.total, Decimal::new(2999, 2));
        assert_eq!(view.total.to_string(), "29.99");
    }

    #[test]
    fn test_ten_dimes_make_a_dollar() {
        let items: Vec<_> = (0..10).map(|_| priced(10)).collect();
        assert_eq!(cart_total(&items), Some(Decimal::ONE));
    }

    #[test]
    fn test_total_past_decimal_max_is_none() {
        let big = Arc::new(Product::new(1, "Big", "B", Decimal::MAX, 1));
        let items = vec![big.clone(), big];
        assert_eq!(cart_total(&items), None);
        assert!(CartView::new(items).is_none());

        // Offsetting entries keep every partial sum in range
        let items = vec![
            Arc::new(Product::new(1, "Big", "B", Decimal::MAX, 1)),
            Arc::new(Product::new(2, "Refund", "R", Decimal::NEGATIVE_ONE, 1)),
        ];
        assert_eq!(cart_total(&items), Some(Decimal::MAX - Decimal::ONE));
    }

    #[test]
    fn test_negative_prices_are_summed_as_given() {
        let items = vec![priced(500), priced(-150)];
        assert_eq!(cart_total(&items), Some(Decimal::new(350, 2)));
    }

    #[test]
    fn test_view_serializes_total_as_decimal_string() {
        let view = CartView::new(vec![priced(999), priced(2000)]).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["total"], "29.99");
        assert_eq!(json["items"][0]["price"], "9.99");
        assert_eq!(json["items"][1]["id"], 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the total is the exact integer sum of the cents.
        #[test]
        fn total_matches_sum_of_cents(cents in prop::collection::vec(0i64..10_000_000, 0..64)) {
            let items: Vec<_> = cents.iter().map(|c| priced(*c)).collect();
            let expected = Decimal::new(cents.iter().sum::<i64>(), 2);
            prop_assert_eq!(cart_total(&items), Some(expected));
        }

        /// Property: summation order does not matter.
        #[test]
        fn total_ignores_order(cents in prop::collection::vec(-10_000i64..10_000, 0..32)) {
            let items: Vec<_> = cents.iter().map(|c| priced(*c)).collect();
            let mut reversed = items.clone();
            reversed.reverse();
            prop_assert_eq!(cart_total(&items), cart_total(&reversed));
        }
    }
}
