//! Error type for decimal construction and arithmetic.

use std::convert::Infallible;

use thiserror::Error;

/// Error type for [`Decimal`](super::Decimal) construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The literal is not a decimal number.
    #[error("invalid decimal literal: {0:?}")]
    InvalidDecimalFormat(String),

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A float input or transcendental result was NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

impl From<Infallible> for DecimalError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
