//! # Response Builder
//!
//! Assembles the [`OrderResponse`] returned to the caller.

use crate::types::{Currency, OrderResponse, PricingResult, UserId};

/// Suffix appended to every order id.
pub const ORDER_ID_MARKER: &str = "X";

/// Derives the order id: `{user_id}-{items_count}-X`.
///
/// ## Known Limitation
/// The id is not unique: two calls with the same user and the same number of
/// items get the same id. Callers that persist orders must key them on
/// something else.
///
/// ## Example
/// ```rust
/// use checkout_core::response::generate_order_id;
/// use checkout_core::types::UserId;
///
/// assert_eq!(generate_order_id(&UserId::from("u1"), 3), "u1-3-X");
/// assert_eq!(generate_order_id(&UserId::from(42), 1), "42-1-X");
/// ```
pub fn generate_order_id(user_id: &UserId, items_count: usize) -> String {
    format!("{}-{}-{}", user_id, items_count, ORDER_ID_MARKER)
}

/// Builds the final order summary. Never fails.
pub fn build_order_response(
    user_id: UserId,
    currency: Currency,
    items_count: usize,
    pricing: &PricingResult,
) -> OrderResponse {
    OrderResponse {
        order_id: generate_order_id(&user_id, items_count),
        user_id,
        currency,
        subtotal: pricing.subtotal,
        discount: pricing.discount,
        tax: pricing.tax,
        total: pricing.total,
        items_count,
    }
}
