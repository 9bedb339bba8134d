//! Error types for bond operations.

use fixedyield_core::{CoreError, Date};
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Invalid price.
    #[error("Invalid price: {reason}")]
    InvalidPrice {
        /// Description of what's invalid.
        reason: String,
    },

    /// A schedule date falls beyond the last date the calendar knows.
    #[error("No business day on or after {date}: calendar ends at {horizon_end}")]
    CalendarHorizonExceeded {
        /// The unadjusted date that could not be resolved.
        date: Date,
        /// Last date covered by the calendar.
        horizon_end: Date,
    },

    /// The bond has no cashflows left as of the valuation date.
    #[error("No future cashflows as of {as_of}: bond matured on {maturity}")]
    NoFutureCashflows {
        /// Valuation date.
        as_of: Date,
        /// Maturity date of the bond.
        maturity: Date,
    },

    /// Yield calculation failed to converge.
    #[error("Yield calculation failed to converge after {iterations} iterations: {reason}")]
    YieldConvergenceFailed {
        /// Iteration budget per solver run.
        iterations: u32,
        /// Last solver error.
        reason: String,
    },

    /// Pricing calculation failed.
    #[error("Pricing failed: {reason}")]
    PricingFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            reason: reason.into(),
        }
    }

    /// Creates a pricing failed error.
    #[must_use]
    pub fn pricing_failed(reason: impl Into<String>) -> Self {
        Self::PricingFailed {
            reason: reason.into(),
        }
    }
}
