//! Day count conventions for bond time fractions.
//!
//! A day count convention turns a pair of dates into a year fraction.
//! The engine discounts every cashflow with the year fraction from the
//! valuation date to the payment date, so the convention drives both the
//! cashflow table and the yield solve.
//!
//! # Supported Conventions
//!
//! - [`ActAct`]: Actual/Actual, split at calendar year boundaries
//!
//! Only ACT/ACT is implemented. Parsing any other tag fails with
//! [`CoreError::UnsupportedDayCount`] instead of silently applying the
//! ACT/ACT arithmetic to a different convention.
//!
//! # Usage
//!
//! ```rust
//! use fixedyield_core::daycounts::{year_fraction, DayCountConvention};
//! use fixedyield_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 1, 1).unwrap();
//! let convention: DayCountConvention = "ACT/ACT".parse().unwrap();
//!
//! assert_eq!(year_fraction(start, end, convention), rust_decimal::Decimal::ONE);
//! ```

mod actact;

pub use actact::ActAct;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so a convention can
/// be shared by bonds priced on different threads.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`; implementations log a warning in
    /// that case rather than failing.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/Actual
    #[default]
    #[serde(rename = "ACT/ACT")]
    ActAct,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::ActAct => Box::new(ActAct),
        }
    }

    /// Returns the tag of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActAct => "ACT/ACT",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::ActAct]
    }

    /// Year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        match self {
            DayCountConvention::ActAct => ActAct.year_fraction(start, end),
        }
    }
}

/// Year fraction between `start` and `end` under `convention`.
#[must_use]
pub fn year_fraction(start: Date, end: Date, convention: DayCountConvention) -> Decimal {
    convention.year_fraction(start, end)
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a day count tag, case-insensitively.
    ///
    /// Accepts "ACT/ACT", "ACT/ACT ISDA", "ACTUAL/ACTUAL" and "ACTACT".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTACT" => {
                Ok(DayCountConvention::ActAct)
            }
            _ => Err(CoreError::unsupported_day_count(s)),
        }
    }
}
