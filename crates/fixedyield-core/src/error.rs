//! Error types for the fixedyield core crate.
//!
//! This module defines the error types shared by dates, day counts,
//! and calendars, providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Calendar construction or loading error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// Day count tag that has no implementation.
    #[error("Unsupported day count convention: '{tag}'")]
    UnsupportedDayCount {
        /// The tag as supplied by the caller.
        tag: String,
    },

    /// Currency code that is not recognised.
    #[error("Unsupported currency: '{code}'")]
    UnsupportedCurrency {
        /// The code as supplied by the caller.
        code: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported day count error.
    #[must_use]
    pub fn unsupported_day_count(tag: impl Into<String>) -> Self {
        Self::UnsupportedDayCount { tag: tag.into() }
    }
}
