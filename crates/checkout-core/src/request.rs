//! # Request Parser
//!
//! Pulls the four logical fields out of an untyped order request.
//!
//! Parsing never fails. A missing key and an explicit `null` both come back
//! as `None`; deciding whether that is an error belongs to validation.

use serde_json::Value;

/// Field names of the external request contract.
pub const USER_ID: &str = "user_id";
pub const ITEMS: &str = "items";
pub const COUPON: &str = "coupon";
pub const CURRENCY: &str = "currency";

/// The request's fields, borrowed from the input record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderRequest<'a> {
    pub user_id: Option<&'a Value>,
    pub items: Option<&'a Value>,
    pub coupon: Option<&'a Value>,
    pub currency: Option<&'a Value>,
}

/// Extracts `user_id`, `items`, `coupon` and `currency` by key lookup.
///
/// ## Example
/// ```rust
/// use checkout_core::request::parse_request;
/// use serde_json::json;
///
/// let raw = json!({"user_id": "u1", "items": [], "coupon": null});
/// let request = parse_request(&raw);
/// assert!(request.user_id.is_some());
/// assert!(request.coupon.is_none());
/// assert!(request.currency.is_none());
/// ```
pub fn parse_request(request: &Value) -> OrderRequest<'_> {
    OrderRequest {
        user_id: field(request, USER_ID),
        items: field(request, ITEMS),
        coupon: field(request, COUPON),
        currency: field(request, CURRENCY),
    }
}

fn field<'a>(request: &'a Value, key: &str) -> Option<&'a Value> {
    request.get(key).filter(|value| !value.is_null())
}
