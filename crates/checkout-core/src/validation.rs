//! # Validation Module
//!
//! Order-level and item-level validation for checkout requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Stages                                  │
//! │                                                                         │
//! │  Stage 1: validate_order_data                                          │
//! │  ├── user_id present (string or number)                                │
//! │  ├── items present                                                     │
//! │  └── currency: echoed, or the configured default                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stage 2: validate_items                                               │
//! │  ├── items is a non-empty array                                        │
//! │  └── per item, in order: price & qty present, numeric, > 0             │
//! │                                                                         │
//! │  Fail-fast: the first violation is returned, nothing is aggregated     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::validate_items;
//! use serde_json::json;
//!
//! let items = validate_items(&json!([{"price": 100, "qty": 2}])).unwrap();
//! assert_eq!(items.len(), 1);
//!
//! assert!(validate_items(&json!([])).is_err());
//! ```

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::{decimal_from_number, Money, Quantity};
use crate::request::{OrderRequest, ITEMS, USER_ID};
use crate::types::{Currency, ItemLine, UserId};

/// Item keys of the external request contract.
pub const PRICE: &str = "price";
pub const QTY: &str = "qty";

// =============================================================================
// Order Validator
// =============================================================================

/// The order-level fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder<'a> {
    pub user_id: UserId,
    /// Still untyped; [`validate_items`] checks its shape.
    pub items: &'a Value,
    pub currency: Currency,
}

/// Validates presence of the required order fields and resolves currency.
///
/// ## Rules
/// - `user_id` must be present and be a string or number
/// - `items` must be present (its shape is checked by [`validate_items`])
/// - `currency` is echoed unchanged, whatever its JSON kind; when absent,
///   `default_currency` is used
pub fn validate_order_data<'a>(
    request: &OrderRequest<'a>,
    default_currency: &str,
) -> CheckoutResult<ValidatedOrder<'a>> {
    let raw_user_id = request
        .user_id
        .ok_or_else(|| CheckoutError::missing(USER_ID))?;
    let items = request.items.ok_or_else(|| CheckoutError::missing(ITEMS))?;

    let user_id = UserId::from_json(raw_user_id)
        .ok_or_else(|| CheckoutError::shape(USER_ID, "a string or a number"))?;

    let currency = request
        .currency
        .map_or_else(|| Currency::from(default_currency), Currency::from_json);

    Ok(ValidatedOrder {
        user_id,
        items,
        currency,
    })
}

// =============================================================================
// Item Validator
// =============================================================================

/// Validates the item list and converts it into typed lines.
///
/// ## Rules
/// - `items` must be an array with at least one element
/// - every element must be an object holding `price` and `qty`
/// - both must be numbers greater than zero
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_items;
/// use checkout_core::CheckoutError;
/// use serde_json::json;
///
/// let err = validate_items(&json!([{"price": -5, "qty": 1}])).unwrap_err();
/// assert!(matches!(err, CheckoutError::NonPositiveValue { .. }));
/// ```
pub fn validate_items(items: &Value) -> CheckoutResult<Vec<ItemLine>> {
    let entries = items
        .as_array()
        .ok_or_else(|| CheckoutError::shape(ITEMS, "an array"))?;

    if entries.is_empty() {
        return Err(CheckoutError::EmptyCollection {
            field: ITEMS.to_string(),
        });
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_item(index, entry))
        .collect()
}

fn validate_item(index: usize, entry: &Value) -> CheckoutResult<ItemLine> {
    let item = entry
        .as_object()
        .ok_or_else(|| CheckoutError::shape(format!("{}[{}]", ITEMS, index), "an object"))?;

    let raw_price = item
        .get(PRICE)
        .ok_or_else(|| CheckoutError::missing(item_field(index, PRICE)))?;
    let raw_qty = item
        .get(QTY)
        .ok_or_else(|| CheckoutError::missing(item_field(index, QTY)))?;

    let price = Money::from_decimal(positive_number(index, PRICE, raw_price)?);
    let qty = Quantity::from_decimal(positive_number(index, QTY, raw_qty)?);

    Ok(ItemLine::new(price, qty))
}

/// Sign is judged on the JSON number itself; a positive number that has no
/// non-zero `Decimal` form (`1e30`, `1e-30`) is out of range.
fn positive_number(index: usize, key: &str, value: &Value) -> CheckoutResult<Decimal> {
    let Value::Number(number) = value else {
        return Err(CheckoutError::InvalidNumber {
            field: item_field(index, key),
        });
    };

    if !number.as_f64().is_some_and(|float| float > 0.0) {
        return Err(CheckoutError::NonPositiveValue {
            field: item_field(index, key),
        });
    }

    match decimal_from_number(number) {
        Some(exact) if exact > Decimal::ZERO => Ok(exact),
        _ => Err(CheckoutError::OutOfRange {
            field: item_field(index, key),
        }),
    }
}

fn item_field(index: usize, key: &str) -> String {
    format!("{}[{}].{}", ITEMS, index, key)
}

// =============================================================================
// Unit Tests
// =============================================================================
