//! # Checkout Pipeline
//!
//! Wires the stages together: parse → validate order → validate items →
//! price → build response. Strictly sequential; the first error aborts.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::PricingConfig;
use crate::coupon::Coupon;
use crate::error::CheckoutResult;
use crate::pricing::PricingEngine;
use crate::request::parse_request;
use crate::response::build_order_response;
use crate::types::OrderResponse;
use crate::validation::{validate_items, validate_order_data};

/// A configured checkout pipeline.
///
/// Holds no mutable state; one instance can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    engine: PricingEngine,
}

impl Checkout {
    /// Creates a pipeline with the given pricing configuration.
    pub fn new(config: PricingConfig) -> CheckoutResult<Self> {
        Ok(Checkout {
            engine: PricingEngine::new(config)?,
        })
    }

    /// Processes one order request.
    ///
    /// ## Errors
    /// Any [`crate::CheckoutError`] raised by a stage. No partial response is
    /// ever produced.
    pub fn process(&self, request: &Value) -> CheckoutResult<OrderResponse> {
        let result = self.run(request);
        if let Err(ref err) = result {
            warn!(code = err.code(), error = %err, "Checkout rejected");
        }
        result
    }

    fn run(&self, request: &Value) -> CheckoutResult<OrderResponse> {
        let request = parse_request(request);

        let order = validate_order_data(&request, &self.engine.config().default_currency)?;
        let items = validate_items(order.items)?;
        debug!(
            user_id = %order.user_id,
            currency = %order.currency,
            items = items.len(),
            "Order validated"
        );

        let coupon = Coupon::from_request(request.coupon)?;
        let pricing = self.engine.price(&items, coupon)?;

        Ok(build_order_response(
            order.user_id,
            order.currency,
            items.len(),
            &pricing,
        ))
    }
}

/// Processes one order request with the default pricing configuration.
///
/// ## Example
/// ```rust
/// use checkout_core::process_checkout;
/// use serde_json::json;
///
/// let response = process_checkout(&json!({
///     "user_id": "u1",
///     "items": [{"price": 100, "qty": 2}]
/// }))
/// .unwrap();
///
/// assert_eq!(response.order_id, "u1-1-X");
/// assert_eq!(response.currency, "USD");
/// assert_eq!(response.total.to_minor(), Some(242));
/// ```
pub fn process_checkout(request: &Value) -> CheckoutResult<OrderResponse> {
    Checkout::default().process(request)
}
