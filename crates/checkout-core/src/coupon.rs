//! # Coupons
//!
//! The closed set of recognized coupon codes and the discount rule each one
//! selects.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Code     Condition               Discount                              │
//! │  ───────  ──────────────────────  ────────────────────────────────────  │
//! │  (none)   -                       0                                     │
//! │  SAVE10   -                       floor(subtotal × 10%)                 │
//! │  SAVE20   subtotal ≥ 200          floor(subtotal × 20%)                 │
//! │           otherwise               floor(subtotal × 5%)                  │
//! │  VIP      subtotal ≥ 100          50                                    │
//! │           otherwise               10                                    │
//! │  other    -                       UnknownCoupon error                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Rates, thresholds and fixed amounts come from [`PricingConfig`]; the
//! table shows the defaults. Codes are case-sensitive.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::config::PricingConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::Rate;

/// A recognized coupon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coupon {
    /// Flat percentage off.
    Save10,
    /// Percentage off, larger above a subtotal threshold.
    Save20,
    /// Fixed amount off, larger above a subtotal threshold.
    Vip,
}

/// The concrete discount a coupon resolves to for one subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountRule {
    /// Percentage of the subtotal, truncated toward zero.
    Percentage(Rate),
    /// Exact fixed amount.
    Fixed(Money),
}

impl Coupon {
    pub const ALL: [Coupon; 3] = [Coupon::Save10, Coupon::Save20, Coupon::Vip];

    /// The code as written on the request.
    pub const fn code(&self) -> &'static str {
        match self {
            Coupon::Save10 => "SAVE10",
            Coupon::Save20 => "SAVE20",
            Coupon::Vip => "VIP",
        }
    }

    /// Reads the optional coupon field of a request.
    ///
    /// - absent or falsy (`null`, `false`, `0`, `""`, `[]`, `{}`) → `Ok(None)`
    /// - a recognized code → `Ok(Some(coupon))`
    /// - anything else → `Err(UnknownCoupon)`
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::coupon::Coupon;
    /// use serde_json::json;
    ///
    /// assert_eq!(Coupon::from_request(Some(&json!("VIP"))).unwrap(), Some(Coupon::Vip));
    /// assert_eq!(Coupon::from_request(Some(&json!(""))).unwrap(), None);
    /// assert!(Coupon::from_request(Some(&json!("vip"))).is_err());
    /// ```
    pub fn from_request(raw: Option<&Value>) -> CheckoutResult<Option<Coupon>> {
        match raw {
            None => Ok(None),
            Some(value) if is_falsy(value) => Ok(None),
            Some(Value::String(code)) => code.parse().map(Some),
            Some(other) => Err(CheckoutError::UnknownCoupon {
                code: other.to_string(),
            }),
        }
    }

    /// Picks the discount rule for this coupon at the given subtotal.
    pub fn rule(&self, subtotal: Money, config: &PricingConfig) -> DiscountRule {
        match self {
            Coupon::Save10 => DiscountRule::Percentage(config.save10_rate()),
            Coupon::Save20 if subtotal >= config.save20_threshold() => {
                DiscountRule::Percentage(config.save20_rate())
            }
            Coupon::Save20 => DiscountRule::Percentage(config.save20_reduced_rate()),
            Coupon::Vip if subtotal >= config.vip_threshold() => {
                DiscountRule::Fixed(config.vip_discount())
            }
            Coupon::Vip => DiscountRule::Fixed(config.vip_reduced_discount()),
        }
    }
}

/// Values that mean "no coupon" when sent in place of a code.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(code) => code.is_empty(),
        Value::Array(entries) => entries.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

impl FromStr for Coupon {
    type Err = CheckoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Coupon::ALL
            .into_iter()
            .find(|coupon| coupon.code() == code)
            .ok_or_else(|| CheckoutError::UnknownCoupon {
                code: code.to_string(),
            })
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl DiscountRule {
    /// Applies the rule to a subtotal. `None` on overflow.
    pub fn discount(&self, subtotal: Money) -> Option<Money> {
        match self {
            DiscountRule::Percentage(rate) => subtotal.percentage_floor(*rate),
            DiscountRule::Fixed(amount) => Some(*amount),
        }
    }
}
