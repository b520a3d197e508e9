//! Input errors for invoicing-core.
//!
//! Code generation and invoice computation never fail once they hold typed
//! input. These errors come from turning caller-supplied strings and numbers
//! into those types.

use rust_decimal::Decimal;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoicingError {
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Unknown entity prefix '{0}'")]
    UnknownEntityPrefix(String),

    #[error("Unknown tax mode '{0}'")]
    UnknownTaxMode(String),

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} is too large to compute")]
    AmountOverflow { field: &'static str },
}

impl From<InvoicingError> for AppError {
    fn from(err: InvoicingError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}
