//! # fixedyield Core
//!
//! Core types and conventions for the fixedyield bond engine.
//!
//! - **Types**: `Date`, `Currency`, `Frequency`
//! - **Day Count Conventions**: ACT/ACT year fractions
//! - **Business Day Calendars**: finite trading calendars and the
//!   `on_or_after` / `next_business_day` resolver
//!
//! ## Example
//!
//! ```rust
//! use fixedyield_core::prelude::*;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2030, 12, 31).unwrap();
//! let cal = TradingCalendar::weekdays("Weekdays", start, end, &[]).unwrap();
//!
//! let payment = cal.on_or_after(Date::from_ymd(2025, 6, 15).unwrap()).unwrap();
//! assert_eq!(payment, Date::from_ymd(2025, 6, 16).unwrap());
//!
//! let tau = year_fraction(start, payment, DayCountConvention::ActAct);
//! assert!(tau > rust_decimal::Decimal::ZERO);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, TradingCalendar};
    pub use crate::daycounts::{year_fraction, ActAct, DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, Frequency};
