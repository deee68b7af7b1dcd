//! # API Error Type
//!
//! The error body printed when a request is rejected.
//!
//! ## Serialization
//! ```json
//! {
//!   "code": "UNKNOWN_COUPON",
//!   "message": "unknown coupon: SAVE99"
//! }
//! ```
//! `code` is for programs, `message` is for people.

use checkout_core::CheckoutError;
use serde::Serialize;

/// Error returned to whoever invoked the checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for rejected checkouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required request field absent (400)
    MissingField,

    /// Field has the wrong JSON kind (400)
    InvalidShape,

    /// `items` is empty (400)
    EmptyCollection,

    /// Price or quantity is zero or negative (400)
    NonPositiveValue,

    /// Price or quantity is not a number (400)
    InvalidNumber,

    /// Price or quantity too large or too small to price exactly (400)
    OutOfRange,

    /// Coupon code not recognized (422)
    UnknownCoupon,

    /// Amounts too large to price (422)
    AmountOverflow,

    /// Misconfigured pricing (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

/// Converts pipeline errors to API errors.
impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        let code = match &err {
            CheckoutError::MissingField { .. } => ErrorCode::MissingField,
            CheckoutError::InvalidShape { .. } => ErrorCode::InvalidShape,
            CheckoutError::EmptyCollection { .. } => ErrorCode::EmptyCollection,
            CheckoutError::NonPositiveValue { .. } => ErrorCode::NonPositiveValue,
            CheckoutError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            CheckoutError::OutOfRange { .. } => ErrorCode::OutOfRange,
            CheckoutError::UnknownCoupon { .. } => ErrorCode::UnknownCoupon,
            CheckoutError::AmountOverflow { .. } => ErrorCode::AmountOverflow,
            CheckoutError::InvalidConfig { reason } => {
                // Config details are for operators, not for request senders
                tracing::error!("Pricing configuration rejected: {}", reason);
                return ApiError::new(ErrorCode::Internal, "Checkout is misconfigured");
            }
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::from(CheckoutError::UnknownCoupon {
            code: "SAVE99".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"code": "UNKNOWN_COUPON", "message": "unknown coupon: SAVE99"})
        );
    }

    #[test]
    fn test_codes_match_core_codes() {
        let errors = [
            CheckoutError::MissingField {
                field: "user_id".to_string(),
            },
            CheckoutError::EmptyCollection {
                field: "items".to_string(),
            },
            CheckoutError::NonPositiveValue {
                field: "items[0].qty".to_string(),
            },
            CheckoutError::OutOfRange {
                field: "items[0].price".to_string(),
            },
            CheckoutError::AmountOverflow { stage: "subtotal" },
        ];
        for err in errors {
            let core_code = err.code();
            let api = serde_json::to_value(ApiError::from(err)).unwrap();
            assert_eq!(api["code"], json!(core_code));
        }
    }

    #[test]
    fn test_config_errors_are_hidden() {
        let err = ApiError::from(CheckoutError::InvalidConfig {
            reason: "tax_rate_bps must be at most 10000, got 50000".to_string(),
        });
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains("tax_rate_bps"));
    }
}
