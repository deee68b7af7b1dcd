//! # checkout-core: Pure Checkout Pricing
//!
//! This crate turns an untyped checkout request into a priced order summary.
//! It is a pure function of the request and a [`PricingConfig`]: no I/O, no
//! shared state, no clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Pricing Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Caller (HTTP handler, checkout-cli, ...)              │   │
//! │  │    JSON request ──► process_checkout ──► JSON response          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ checkout-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  request ─► validation ─► pricing (coupon) ─► response          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`request`] - Extracts the request fields from an untyped record
//! - [`validation`] - Order and item validation
//! - [`coupon`] - Recognized coupon codes and their discount rules
//! - [`pricing`] - Subtotal, discount, floor and tax
//! - [`response`] - Order summary and order id
//! - [`money`] - Exact decimal money in minor units
//! - [`config`] - Pricing configuration
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same request + same config = same response
//! 2. **No I/O**: loading config and printing output belong to the caller
//! 3. **Exact Money**: decimal arithmetic, discounts and tax truncated toward zero
//! 4. **Explicit Errors**: every failure is a typed [`CheckoutError`]
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::process_checkout;
//! use serde_json::json;
//!
//! let response = process_checkout(&json!({
//!     "user_id": "u1",
//!     "items": [{"price": 100, "qty": 2}],
//!     "coupon": "SAVE20"
//! }))
//! .unwrap();
//!
//! // 200 - 40 = 160, tax floor(160 × 21%) = 33
//! assert_eq!(response.total.to_minor(), Some(193));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod config;
pub mod coupon;
pub mod error;
pub mod money;
pub mod pricing;
pub mod request;
pub mod response;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{process_checkout, Checkout};
pub use config::{PricingConfig, DEFAULT_CURRENCY};
pub use coupon::Coupon;
pub use error::{CheckoutError, CheckoutResult};
pub use money::{Money, Quantity};
pub use pricing::PricingEngine;
pub use types::*;
