//! Property tests for the pricing invariants of the checkout pipeline.

use checkout_core::{process_checkout, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};

fn coupon_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        Just(json!("SAVE10")),
        Just(json!("SAVE20")),
        Just(json!("VIP")),
    ]
}

fn items_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((1i64..100_000, 1i64..50), 1..20)
}

fn request(items: &[(i64, i64)], coupon: Value) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|(price, qty)| json!({"price": price, "qty": qty}))
        .collect();
    json!({"user_id": "prop-user", "items": items, "coupon": coupon})
}

fn floor_tax(amount: Decimal) -> Decimal {
    (amount * Decimal::from(21) / Decimal::from(100)).trunc()
}

proptest! {
    /// total = max(subtotal - discount, 0) + floor(max(subtotal - discount, 0) × 21%)
    #[test]
    fn prop_total_matches_formula(items in items_strategy(), coupon in coupon_strategy()) {
        let response = process_checkout(&request(&items, coupon)).unwrap();

        let after = (response.subtotal.amount() - response.discount.amount()).max(Decimal::ZERO);
        prop_assert_eq!(response.tax.amount(), floor_tax(after));
        prop_assert_eq!(response.total.amount(), after + floor_tax(after));
    }

    /// Discount and every derived amount stay non-negative.
    #[test]
    fn prop_amounts_never_negative(items in items_strategy(), coupon in coupon_strategy()) {
        let response = process_checkout(&request(&items, coupon)).unwrap();

        prop_assert!(!response.discount.is_negative());
        prop_assert!(!response.tax.is_negative());
        prop_assert!(!response.total.is_negative());
        prop_assert!(response.discount.is_whole());
        prop_assert!(response.tax.is_whole());
    }

    /// Subtotal is the exact sum of price × qty.
    #[test]
    fn prop_subtotal_is_sum_of_lines(items in items_strategy()) {
        let response = process_checkout(&request(&items, Value::Null)).unwrap();
        let expected: i64 = items.iter().map(|(price, qty)| price * qty).sum();
        prop_assert_eq!(response.subtotal, Money::from_minor(expected));
    }

    /// items_count always equals the number of submitted items.
    #[test]
    fn prop_items_count_matches_input(items in items_strategy(), coupon in coupon_strategy()) {
        let response = process_checkout(&request(&items, coupon)).unwrap();
        prop_assert_eq!(response.items_count, items.len());
        prop_assert_eq!(response.order_id, format!("prop-user-{}-X", items.len()));
    }

    /// Same request, same response.
    #[test]
    fn prop_checkout_is_idempotent(items in items_strategy(), coupon in coupon_strategy()) {
        let raw = request(&items, coupon);
        let first = process_checkout(&raw).unwrap();
        let second = process_checkout(&raw).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Fractional prices in hundredths are priced exactly.
    #[test]
    fn prop_fractional_prices_are_exact(hundredths in 1i64..1_000_000, qty in 1i64..20) {
        let price = hundredths as f64 / 100.0;
        let raw = json!({"user_id": "u", "items": [{"price": price, "qty": qty}]});
        let response = process_checkout(&raw).unwrap();

        let expected = Decimal::new(hundredths, 2) * Decimal::from(qty);
        prop_assert_eq!(response.subtotal.amount(), expected);
    }
}
