//! # Money Module
//!
//! Provides the `Money` and `Quantity` types for checkout arithmetic.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.29 * 100 = 28.999999999999996                                      │
//! │    truncate → 28  ❌ WRONG! (should be 29)                              │
//! │                                                                         │
//! │  OUR SOLUTION: Exact decimal minor units                                │
//! │    Decimal(0.29) * 100 = 29.00                                          │
//! │    truncate → 29  ✅                                                    │
//! │                                                                         │
//! │  Discounts and tax are always truncated toward zero to whole units.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::{Money, Quantity};
//! use checkout_core::types::Rate;
//!
//! let price = Money::from_minor(100);
//! let line = price.times(Quantity::from_whole(2)).unwrap();
//! assert_eq!(line, Money::from_minor(200));
//!
//! // 21% of 95 = 19.95 → truncated to 19
//! let tax = Money::from_minor(95).percentage_floor(Rate::from_bps(2100)).unwrap();
//! assert_eq!(tax, Money::from_minor(19));
//! ```

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::Number;
use std::fmt;

use crate::types::Rate;

/// Basis points in one whole (100% = 10000 bps).
const BPS_SCALE: i64 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units (cents for USD).
///
/// ## Design Decisions
/// - **Decimal, not i64**: item prices may arrive fractional; the subtotal
///   keeps that fraction exactly
/// - **Whole-unit results**: discounts and tax go through
///   [`Money::percentage_floor`] and are always whole
/// - **Checked arithmetic only**: a `Decimal` overflow would panic, so every
///   operation returns `Option`
///
/// ## Where Money is Used
/// ```text
/// ItemLine.price × qty ──► subtotal ──► − discount ──► floor at 0
///                                                         │
///                                 total ◄── + tax ◄───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from whole minor units.
    #[inline]
    pub fn from_minor(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Creates a Money value from an exact decimal amount of minor units.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact amount in minor units.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Checks if the value has no fractional minor units.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// Returns the value as whole minor units, if it is whole and fits.
    pub fn to_minor(&self) -> Option<i64> {
        if self.is_whole() {
            self.0.to_i64()
        } else {
            None
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::{Money, Quantity};
    ///
    /// let unit_price = Money::from_minor(299);
    /// let line_total = unit_price.times(Quantity::from_whole(3)).unwrap();
    /// assert_eq!(line_total, Money::from_minor(897));
    /// ```
    #[inline]
    pub fn times(self, qty: Quantity) -> Option<Money> {
        self.0.checked_mul(qty.value()).map(Money)
    }

    /// Takes a percentage of this amount and truncates toward zero.
    ///
    /// ## Truncation, not rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  amount × bps / 10000, fractional part dropped                      │
    /// │                                                                     │
    /// │    200 × 20%  = 40.00  → 40                                         │
    /// │    160 × 21%  = 33.60  → 33   (rounding would give 34)              │
    /// │     95 × 21%  = 19.95  → 19                                         │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    /// Percentage discounts and tax both use this, so a caller working in
    /// whole minor units never sees a fraction of a cent.
    pub fn percentage_floor(&self, rate: Rate) -> Option<Money> {
        let scaled = self.0.checked_mul(Decimal::from(rate.bps()))?;
        let share = scaled.checked_div(Decimal::from(BPS_SCALE))?;
        Some(Money(share.trunc()))
    }
}

/// Display shows the plain minor-unit amount, trailing zeros removed.
///
/// ## Note
/// Currency symbols are the caller's concern; currency is only echoed here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Money serializes as a JSON number.
///
/// Whole amounts become integers (`242`), fractional amounts become floats
/// (`20.5`). This keeps the response numeric for callers that never send
/// fractional prices.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimal(self.0, serializer)
    }
}

fn serialize_decimal<S: Serializer>(value: Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(serde::ser::Error::custom(format!(
            "amount {} is not representable as a number",
            value
        ))),
    }
}

// =============================================================================
// Quantity Type
// =============================================================================

/// How many units of an item are bought.
///
/// Quantities are exact decimals so weighed goods (`1.5` kg) price exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Creates a quantity from a whole count.
    #[inline]
    pub fn from_whole(count: i64) -> Self {
        Quantity(Decimal::from(count))
    }

    /// Creates a quantity from an exact decimal.
    #[inline]
    pub const fn from_decimal(value: Decimal) -> Self {
        Quantity(value)
    }

    /// Returns the quantity as a decimal.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Checks if the quantity is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_decimal(self.0, serializer)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// =============================================================================
// JSON Number Conversion
// =============================================================================

/// Reads a JSON number as an exact decimal.
///
/// Integers convert directly. Floats go through their shortest decimal text
/// (`0.1` stays `0.1`, not `0.1000000000000000055`). Returns `None` for
/// magnitudes a `Decimal` cannot hold; values below its smallest scale may
/// come back as zero.
pub(crate) fn decimal_from_number(number: &Number) -> Option<Decimal> {
    if let Some(int) = number.as_i64() {
        return Some(Decimal::from(int));
    }
    if let Some(uint) = number.as_u64() {
        return Some(Decimal::from(uint));
    }
    // Shortest float text first; exponent forms fall back to the f64 path.
    number
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| number.as_f64().and_then(Decimal::from_f64))
}

// =============================================================================
// Unit Tests
// =============================================================================
