//! # Pricing Configuration
//!
//! Every rate, threshold and fixed amount the pricing engine uses.
//!
//! The engine never reads globals: it is constructed with a `PricingConfig`
//! and is a pure function of that config and the request. Loading the config
//! from disk or the environment is the application's job.
//!
//! ## Defaults
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Setting                        Default     Meaning                     │
//! │  ─────────────────────────────  ─────────   ─────────────────────────   │
//! │  default_currency               "USD"       when request has none       │
//! │  tax_rate_bps                   2100        21% tax                     │
//! │  save10_rate_bps                1000        SAVE10: 10% off             │
//! │  save20_rate_bps                2000        SAVE20: 20% off ...         │
//! │  save20_threshold               200         ... when subtotal ≥ 200     │
//! │  save20_reduced_rate_bps        500         otherwise 5% off            │
//! │  vip_discount                   50          VIP: 50 off ...             │
//! │  vip_threshold                  100         ... when subtotal ≥ 100     │
//! │  vip_reduced_discount           10          otherwise 10 off            │
//! │  min_total_after_discount       0           discount floor              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## TOML Format
//! ```toml
//! default_currency = "EUR"
//! tax_rate_bps = 2000
//! ```
//! Missing keys fall back to the defaults above.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::Rate;

/// Currency used when the request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Upper bound for any rate (100%).
pub const MAX_RATE_BPS: u32 = 10_000;

/// Immutable pricing configuration.
///
/// Amounts are whole minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub default_currency: String,
    pub tax_rate_bps: u32,
    pub save10_rate_bps: u32,
    pub save20_rate_bps: u32,
    pub save20_reduced_rate_bps: u32,
    pub save20_threshold: i64,
    pub vip_discount: i64,
    pub vip_reduced_discount: i64,
    pub vip_threshold: i64,
    pub min_total_after_discount: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            default_currency: DEFAULT_CURRENCY.to_string(),
            tax_rate_bps: 2100,
            save10_rate_bps: 1000,
            save20_rate_bps: 2000,
            save20_reduced_rate_bps: 500,
            save20_threshold: 200,
            vip_discount: 50,
            vip_reduced_discount: 10,
            vip_threshold: 100,
            min_total_after_discount: 0,
        }
    }
}

impl PricingConfig {
    /// Validates the configuration.
    ///
    /// ## Rules
    /// - Every rate is within 0..=10000 bps
    /// - Every amount and threshold is non-negative
    /// - The default currency is not blank
    pub fn validate(&self) -> CheckoutResult<()> {
        let rates = [
            ("tax_rate_bps", self.tax_rate_bps),
            ("save10_rate_bps", self.save10_rate_bps),
            ("save20_rate_bps", self.save20_rate_bps),
            ("save20_reduced_rate_bps", self.save20_reduced_rate_bps),
        ];
        for (name, bps) in rates {
            if bps > MAX_RATE_BPS {
                return Err(CheckoutError::InvalidConfig {
                    reason: format!("{} must be at most {}, got {}", name, MAX_RATE_BPS, bps),
                });
            }
        }

        let amounts = [
            ("save20_threshold", self.save20_threshold),
            ("vip_discount", self.vip_discount),
            ("vip_reduced_discount", self.vip_reduced_discount),
            ("vip_threshold", self.vip_threshold),
            ("min_total_after_discount", self.min_total_after_discount),
        ];
        for (name, amount) in amounts {
            if amount < 0 {
                return Err(CheckoutError::InvalidConfig {
                    reason: format!("{} must not be negative, got {}", name, amount),
                });
            }
        }

        if self.default_currency.trim().is_empty() {
            return Err(CheckoutError::InvalidConfig {
                reason: "default_currency must not be empty".to_string(),
            });
        }

        Ok(())
    }

    // =========================================================================
    // Typed Accessors
    // =========================================================================

    pub fn tax_rate(&self) -> Rate {
        Rate::from_bps(self.tax_rate_bps)
    }

    pub fn save10_rate(&self) -> Rate {
        Rate::from_bps(self.save10_rate_bps)
    }

    pub fn save20_rate(&self) -> Rate {
        Rate::from_bps(self.save20_rate_bps)
    }

    pub fn save20_reduced_rate(&self) -> Rate {
        Rate::from_bps(self.save20_reduced_rate_bps)
    }

    pub fn save20_threshold(&self) -> Money {
        Money::from_minor(self.save20_threshold)
    }

    pub fn vip_discount(&self) -> Money {
        Money::from_minor(self.vip_discount)
    }

    pub fn vip_reduced_discount(&self) -> Money {
        Money::from_minor(self.vip_reduced_discount)
    }

    pub fn vip_threshold(&self) -> Money {
        Money::from_minor(self.vip_threshold)
    }

    pub fn min_total_after_discount(&self) -> Money {
        Money::from_minor(self.min_total_after_discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
