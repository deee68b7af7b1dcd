//! # Pricing Engine
//!
//! Deterministic arithmetic from validated item lines to a [`PricingResult`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Pipeline                                 │
//! │                                                                         │
//! │  items ──► calculate_subtotal   Σ price × qty (exact)                  │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  coupon ─► calculate_discount   coupon rule at this subtotal           │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            apply_discount       max(subtotal − discount, floor)        │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            calculate_tax        floor(total_after_discount × rate)     │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            total = total_after_discount + tax                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use checkout_core::coupon::Coupon;
//! use checkout_core::money::{Money, Quantity};
//! use checkout_core::pricing::PricingEngine;
//! use checkout_core::types::ItemLine;
//!
//! let engine = PricingEngine::default();
//! let items = [ItemLine::new(Money::from_minor(100), Quantity::from_whole(2))];
//!
//! let result = engine.price(&items, Some(Coupon::Save20)).unwrap();
//! assert_eq!(result.discount, Money::from_minor(40));
//! assert_eq!(result.tax, Money::from_minor(33));
//! assert_eq!(result.total, Money::from_minor(193));
//! ```

use tracing::debug;

use crate::config::PricingConfig;
use crate::coupon::Coupon;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::{ItemLine, PricingResult};

/// Prices validated carts with one immutable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Creates an engine after validating the configuration.
    pub fn new(config: PricingConfig) -> CheckoutResult<Self> {
        config.validate()?;
        Ok(PricingEngine { config })
    }

    /// Returns the configuration this engine prices with.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Sums `price × qty` over the items, in input order.
    pub fn calculate_subtotal(&self, items: &[ItemLine]) -> CheckoutResult<Money> {
        items.iter().try_fold(Money::zero(), |subtotal, item| {
            item.line_total()
                .and_then(|line| subtotal.checked_add(line))
                .ok_or(CheckoutError::AmountOverflow { stage: "subtotal" })
        })
    }

    /// Resolves the discount for a subtotal and an optional coupon.
    ///
    /// No coupon means no discount. The result is never negative.
    pub fn calculate_discount(
        &self,
        subtotal: Money,
        coupon: Option<Coupon>,
    ) -> CheckoutResult<Money> {
        let Some(coupon) = coupon else {
            return Ok(Money::zero());
        };

        let rule = coupon.rule(subtotal, &self.config);
        let discount = rule
            .discount(subtotal)
            .ok_or(CheckoutError::AmountOverflow { stage: "discount" })?;

        debug!(coupon = %coupon, ?rule, discount = %discount, "Coupon applied");
        Ok(discount)
    }

    /// Subtracts the discount, clamping at the configured floor (zero by
    /// default). A discount larger than the subtotal is allowed.
    pub fn apply_discount(&self, subtotal: Money, discount: Money) -> CheckoutResult<Money> {
        let reduced = subtotal
            .checked_sub(discount)
            .ok_or(CheckoutError::AmountOverflow { stage: "discount" })?;
        Ok(reduced.max(self.config.min_total_after_discount()))
    }

    /// Tax on an amount, truncated to whole minor units.
    pub fn calculate_tax(&self, amount: Money) -> CheckoutResult<Money> {
        amount
            .percentage_floor(self.config.tax_rate())
            .ok_or(CheckoutError::AmountOverflow { stage: "tax" })
    }

    /// Runs the whole pricing pipeline.
    pub fn price(
        &self,
        items: &[ItemLine],
        coupon: Option<Coupon>,
    ) -> CheckoutResult<PricingResult> {
        let subtotal = self.calculate_subtotal(items)?;
        let discount = self.calculate_discount(subtotal, coupon)?;
        let total_after_discount = self.apply_discount(subtotal, discount)?;
        let tax = self.calculate_tax(total_after_discount)?;
        let total = total_after_discount
            .checked_add(tax)
            .ok_or(CheckoutError::AmountOverflow { stage: "total" })?;

        debug!(
            subtotal = %subtotal,
            discount = %discount,
            tax = %tax,
            total = %total,
            "Order priced"
        );

        Ok(PricingResult {
            subtotal,
            discount,
            total_after_discount,
            tax,
            total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
