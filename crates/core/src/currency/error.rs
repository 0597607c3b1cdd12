//! Currency error types.

use farecard_shared::AppError;
use thiserror::Error;

use super::code::CurrencyCode;

/// Errors that can occur while building or combining currency values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Values in different currencies cannot be added.
    #[error("Currency codes must be the same: {left} != {right}")]
    CurrencyMismatch {
        /// Currency of the left-hand value.
        left: CurrencyCode,
        /// Currency of the right-hand value.
        right: CurrencyCode,
    },

    /// Divisor must be strictly positive.
    #[error("Divisor must be positive, got {0}")]
    InvalidDivisor(i32),

    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Result does not fit in the amount or divisor range.
    #[error("Arithmetic overflow while reconciling {0}")]
    Overflow(&'static str),
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::CurrencyMismatch { .. } => Self::BusinessRule(err.to_string()),
            CurrencyError::InvalidDivisor(_)
            | CurrencyError::InvalidCurrencyCode(_)
            | CurrencyError::Overflow(_) => Self::Validation(err.to_string()),
        }
    }
}
