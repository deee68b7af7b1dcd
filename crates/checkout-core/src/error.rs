//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Propagation                               │
//! │                                                                         │
//! │  Parser ──► Order Validator ──► Item Validator ──► Pricing Engine       │
//! │                  │                    │                  │              │
//! │                  ▼                    ▼                  ▼              │
//! │            MissingField        InvalidShape        UnknownCoupon        │
//! │            InvalidShape        EmptyCollection     AmountOverflow       │
//! │                                MissingField                             │
//! │                                InvalidNumber                            │
//! │                                NonPositiveValue                         │
//! │                                OutOfRange                               │
//! │                                                                         │
//! │  Every error aborts the pipeline. No partial response is returned.      │
//! │  The caller maps CheckoutError::code() onto its own error surface.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every message
//! 3. Errors are enum variants, never String
//! 4. All errors are deterministic functions of the input

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors raised by the checkout pipeline.
///
/// None of these are transient: retrying the same request yields the same
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A required field is absent or `null`.
    ///
    /// ## When This Occurs
    /// - `user_id` or `items` missing from the request
    /// - An item without a `price` or `qty` key
    #[error("{field} is required")]
    MissingField { field: String },

    /// A field has the wrong JSON kind.
    ///
    /// ## When This Occurs
    /// - `items` is not an array
    /// - An entry of `items` is not an object
    /// - `user_id` is neither a string nor a number
    #[error("{field} must be {expected}")]
    InvalidShape {
        field: String,
        expected: &'static str,
    },

    /// A collection that must have elements is empty.
    #[error("{field} must not be empty")]
    EmptyCollection { field: String },

    /// A numeric value is zero or negative.
    #[error("{field} must be positive")]
    NonPositiveValue { field: String },

    /// A numeric field holds something that is not a JSON number.
    #[error("{field} must be a number")]
    InvalidNumber { field: String },

    /// A positive number too large or too small to price exactly.
    ///
    /// ## When This Occurs
    /// - `price` or `qty` beyond ~7.9e28
    /// - `price` or `qty` below 1e-28
    #[error("{field} is out of range")]
    OutOfRange { field: String },

    /// Coupon code is not one of the recognized codes.
    ///
    /// Matching is case-sensitive: `save10` is unknown.
    #[error("unknown coupon: {code}")]
    UnknownCoupon { code: String },

    /// Decimal arithmetic overflowed while pricing.
    #[error("amount overflow while computing {stage}")]
    AmountOverflow { stage: &'static str },

    /// Pricing configuration failed validation.
    #[error("invalid pricing config: {reason}")]
    InvalidConfig { reason: String },
}

impl CheckoutError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        CheckoutError::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn shape(field: impl Into<String>, expected: &'static str) -> Self {
        CheckoutError::InvalidShape {
            field: field.into(),
            expected,
        }
    }

    /// Machine-readable code for the caller's error surface.
    ///
    /// These strings are stable; the HTTP layer may switch on them.
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutError::MissingField { .. } => "MISSING_FIELD",
            CheckoutError::InvalidShape { .. } => "INVALID_SHAPE",
            CheckoutError::EmptyCollection { .. } => "EMPTY_COLLECTION",
            CheckoutError::NonPositiveValue { .. } => "NON_POSITIVE_VALUE",
            CheckoutError::InvalidNumber { .. } => "INVALID_NUMBER",
            CheckoutError::OutOfRange { .. } => "OUT_OF_RANGE",
            CheckoutError::UnknownCoupon { .. } => "UNKNOWN_COUPON",
            CheckoutError::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
            CheckoutError::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }

    /// Returns true for errors caused by the request rather than by the
    /// engine's configuration.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CheckoutError::InvalidConfig { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CheckoutError::missing("user_id").to_string(),
            "user_id is required"
        );
        assert_eq!(
            CheckoutError::shape("items", "an array").to_string(),
            "items must be an array"
        );
        assert_eq!(
            CheckoutError::UnknownCoupon {
                code: "SAVE99".to_string()
            }
            .to_string(),
            "unknown coupon: SAVE99"
        );
    }

    #[test]
    fn test_error_codes() {
        let err = CheckoutError::EmptyCollection {
            field: "items".to_string(),
        };
        assert_eq!(err.code(), "EMPTY_COLLECTION");

        let err = CheckoutError::NonPositiveValue {
            field: "items[0].price".to_string(),
        };
        assert_eq!(err.code(), "NON_POSITIVE_VALUE");

        let err = CheckoutError::OutOfRange {
            field: "items[0].price".to_string(),
        };
        assert_eq!(err.code(), "OUT_OF_RANGE");
        assert_eq!(err.to_string(), "items[0].price is out of range");
    }

    #[test]
    fn test_config_error_is_not_client_error() {
        let err = CheckoutError::InvalidConfig {
            reason: "tax_rate_bps above 10000".to_string(),
        };
        assert!(!err.is_client_error());
        assert!(CheckoutError::missing("items").is_client_error());
    }
}
