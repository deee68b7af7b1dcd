//! # Domain Types
//!
//! Core domain types used throughout the checkout pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     UserId      │   │    ItemLine     │   │  PricingResult  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Text(String)   │   │  price (Money)  │   │  subtotal       │       │
//! │  │  Number         │   │  qty (Quantity) │   │  discount, tax  │       │
//! │  └─────────────────┘   └─────────────────┘   │  total          │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────┐        │
//! │  │      Rate       │   │            OrderResponse             │        │
//! │  │  ─────────────  │   │  ──────────────────────────────────  │        │
//! │  │  bps (u32)      │   │  order_id, user_id, currency,        │        │
//! │  │  2100 = 21%     │   │  subtotal, discount, tax, total,     │        │
//! │  └─────────────────┘   │  items_count                         │        │
//! │                        └──────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;
use ts_rs::TS;

use crate::money::{Money, Quantity};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2100 bps = 21% (the default tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// User Id
// =============================================================================

/// Opaque identifier of the ordering user.
///
/// The id is echoed back with its original JSON kind: a string stays a
/// string, a number stays a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(Number),
}

impl UserId {
    /// Reads a user id from a JSON value.
    ///
    /// Returns `None` for every kind other than string or number.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(UserId::Text(text.clone())),
            Value::Number(number) => Some(UserId::Number(number.clone())),
            _ => None,
        }
    }
}

/// Formats the id as it appears inside an order id: `u1`, `42`, `1.5`.
impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Text(text) => f.write_str(text),
            UserId::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for UserId {
    fn from(text: &str) -> Self {
        UserId::Text(text.to_string())
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(Number::from(id))
    }
}

// =============================================================================
// Currency
// =============================================================================

/// The currency echoed back on the response.
///
/// Currency is never converted or checked, so whatever the request carried
/// is returned with its JSON kind intact: `"EUR"` stays a string, `840`
/// stays a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Currency {
    Code(String),
    Other(Value),
}

impl Currency {
    /// Wraps a request's currency value.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(code) => Currency::Code(code.clone()),
            other => Currency::Other(other.clone()),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Code(code) => f.write_str(code),
            Currency::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::Code(code.to_string())
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Currency::Code(code) if code == other)
    }
}

// =============================================================================
// Item Line
// =============================================================================

/// One validated line of the cart.
///
/// Only built by [`crate::validation::validate_items`], so both fields are
/// always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ItemLine {
    /// Unit price in minor currency units.
    #[ts(type = "number")]
    pub price: Money,

    /// Quantity bought.
    #[ts(type = "number")]
    pub qty: Quantity,
}

impl ItemLine {
    /// Creates an item line. Callers outside validation are trusted to pass
    /// positive values.
    pub fn new(price: Money, qty: Quantity) -> Self {
        ItemLine { price, qty }
    }

    /// Line total (`price × qty`), `None` on overflow.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.price.times(self.qty)
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// Output of the pricing engine, before the response is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    /// Σ price × qty, exact.
    pub subtotal: Money,

    /// Coupon discount, whole and never negative.
    pub discount: Money,

    /// `max(subtotal - discount, floor)`.
    pub total_after_discount: Money,

    /// Tax on `total_after_discount`, truncated to whole units.
    pub tax: Money,

    /// `total_after_discount + tax`.
    pub total: Money,
}

// =============================================================================
// Order Response
// =============================================================================

/// The final order summary returned to the caller.
///
/// Field names are part of the external contract.
///
/// ## Serialization
/// ```json
/// {
///   "order_id": "u1-1-X",
///   "user_id": "u1",
///   "currency": "USD",
///   "subtotal": 200,
///   "discount": 0,
///   "tax": 42,
///   "total": 242,
///   "items_count": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct OrderResponse {
    pub order_id: String,
    #[ts(type = "string | number")]
    pub user_id: UserId,
    #[ts(type = "unknown")]
    pub currency: Currency,
    #[ts(type = "number")]
    pub subtotal: Money,
    #[ts(type = "number")]
    pub discount: Money,
    #[ts(type = "number")]
    pub tax: Money,
    #[ts(type = "number")]
    pub total: Money,
    pub items_count: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================
