//! End-to-end checkout scenarios against the default pricing configuration.

use checkout_core::{process_checkout, CheckoutError, Money, OrderResponse};
use rstest::rstest;
use serde_json::{json, Value};

fn money(units: i64) -> Money {
    Money::from_minor(units)
}

fn checkout(request: Value) -> OrderResponse {
    process_checkout(&request).expect("request should be accepted")
}

#[test]
fn no_coupon_defaults_currency_and_taxes_subtotal() {
    let response = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}],
        "coupon": null,
        "currency": null
    }));

    assert_eq!(response.subtotal, money(200));
    assert_eq!(response.discount, money(0));
    assert_eq!(response.tax, money(42));
    assert_eq!(response.total, money(242));
    assert_eq!(response.currency, "USD");
    assert_eq!(response.order_id, "u1-1-X");
    assert_eq!(response.items_count, 1);
}

#[test]
fn save20_at_threshold_takes_full_rate() {
    let response = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}],
        "coupon": "SAVE20"
    }));

    assert_eq!(response.subtotal, money(200));
    assert_eq!(response.discount, money(40));
    assert_eq!(response.tax, money(33));
    assert_eq!(response.total, money(193));
}

#[test]
fn save20_below_threshold_takes_reduced_rate() {
    let response = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 1}],
        "coupon": "SAVE20"
    }));

    assert_eq!(response.subtotal, money(100));
    assert_eq!(response.discount, money(5));
    assert_eq!(response.tax, money(19));
    assert_eq!(response.total, money(114));
}

#[rstest]
#[case(100, 50, 10, 60)]
#[case(50, 10, 8, 48)]
fn vip_fixed_discount_by_threshold(
    #[case] subtotal: i64,
    #[case] discount: i64,
    #[case] tax: i64,
    #[case] total: i64,
) {
    let response = checkout(json!({
        "user_id": "vip-user",
        "items": [{"price": subtotal, "qty": 1}],
        "coupon": "VIP"
    }));

    assert_eq!(response.discount, money(discount));
    assert_eq!(response.tax, money(tax));
    assert_eq!(response.total, money(total));
}

#[test]
fn save10_truncates_discount() {
    let response = checkout(json!({
        "user_id": 9,
        "items": [{"price": 33, "qty": 3}, {"price": 20, "qty": 1}],
        "coupon": "SAVE10",
        "currency": "EUR"
    }));

    // 119 × 10% = 11.9 → 11; 108 × 21% = 22.68 → 22
    assert_eq!(response.subtotal, money(119));
    assert_eq!(response.discount, money(11));
    assert_eq!(response.tax, money(22));
    assert_eq!(response.total, money(130));
    assert_eq!(response.currency, "EUR");
    assert_eq!(response.order_id, "9-2-X");
}

#[test]
fn fractional_prices_keep_exact_subtotal() {
    let response = checkout(json!({
        "user_id": "u2",
        "items": [{"price": 10.25, "qty": 2}]
    }));

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["subtotal"], json!(20.5));
    // floor(20.5 × 21%) = floor(4.305) = 4
    assert_eq!(value["tax"], json!(4));
    assert_eq!(value["total"], json!(24.5));
}

#[test]
fn non_string_currency_is_echoed() {
    let value = serde_json::to_value(checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}],
        "currency": 840
    })))
    .unwrap();

    assert_eq!(value["currency"], json!(840));
    assert_eq!(value["total"], json!(242));
}

#[rstest]
#[case(json!(0))]
#[case(json!(false))]
#[case(json!([]))]
fn falsy_coupon_gives_no_discount(#[case] coupon: Value) {
    let response = checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}],
        "coupon": coupon
    }));

    assert_eq!(response.discount, money(0));
    assert_eq!(response.total, money(242));
}

#[test]
fn empty_items_are_rejected() {
    let err = process_checkout(&json!({"user_id": "u1", "items": []})).unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCollection { .. }));
}

#[test]
fn unknown_coupon_is_rejected() {
    let err = process_checkout(&json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}],
        "coupon": "UNKNOWN"
    }))
    .unwrap_err();
    assert_eq!(
        err,
        CheckoutError::UnknownCoupon {
            code: "UNKNOWN".to_string()
        }
    );
}

#[test]
fn negative_price_is_rejected() {
    let err = process_checkout(&json!({
        "user_id": "u1",
        "items": [{"price": -5, "qty": 1}]
    }))
    .unwrap_err();
    assert!(matches!(err, CheckoutError::NonPositiveValue { .. }));
}

#[rstest]
#[case(json!({"items": [{"price": 1, "qty": 1}]}), "MISSING_FIELD")]
#[case(json!({"user_id": "u1"}), "MISSING_FIELD")]
#[case(json!({"user_id": "u1", "items": "apple"}), "INVALID_SHAPE")]
#[case(json!({"user_id": "u1", "items": [{"price": 1}]}), "MISSING_FIELD")]
#[case(json!({"user_id": "u1", "items": [{"price": 1, "qty": 0}]}), "NON_POSITIVE_VALUE")]
#[case(json!({"user_id": "u1", "items": [{"price": "1", "qty": 1}]}), "INVALID_NUMBER")]
#[case(json!({"user_id": "u1", "items": [{"price": 1e-30, "qty": 1}]}), "OUT_OF_RANGE")]
#[case(json!({"user_id": "u1", "items": [{"price": 1e30, "qty": 1}]}), "OUT_OF_RANGE")]
#[case(json!({"user_id": "u1", "items": [{"price": 1, "qty": 1}], "coupon": "save10"}), "UNKNOWN_COUPON")]
fn rejected_requests_report_codes(#[case] request: Value, #[case] code: &str) {
    let err = process_checkout(&request).unwrap_err();
    assert_eq!(err.code(), code);
}

#[test]
fn response_uses_contract_field_names() {
    let value = serde_json::to_value(checkout(json!({
        "user_id": "u1",
        "items": [{"price": 100, "qty": 2}]
    })))
    .unwrap();

    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "currency",
            "discount",
            "items_count",
            "order_id",
            "subtotal",
            "tax",
            "total",
            "user_id"
        ]
    );
}
