//! # fixedyield Bonds
//!
//! Annual coupon bonds on a finite trading calendar.
//!
//! This crate provides:
//!
//! - **Instruments**: [`AnnualCouponBond`](instruments::AnnualCouponBond) and its builder
//! - **Cash Flows**: business-day adjusted annual schedules and cashflow tables
//! - **Pricing**: yield-to-maturity and present value under a discount curve
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fixedyield_bonds::prelude::*;
//! use fixedyield_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let as_of = Date::from_ymd(2025, 6, 16).unwrap();
//! let calendar = TradingCalendar::weekdays(
//!     "Weekdays",
//!     as_of,
//!     Date::from_ymd(2100, 1, 1).unwrap(),
//!     &[],
//! )
//! .unwrap();
//!
//! let bond = AnnualCouponBond::builder()
//!     .description("BTP 4% 2030")
//!     .ticker("BTPS")
//!     .coupon_percent(dec!(4))
//!     .issue_date(Date::from_ymd(2020, 6, 15).unwrap())
//!     .maturity_date(Date::from_ymd(2030, 6, 15).unwrap())
//!     .price(dec!(101.25))
//!     .calendar(Arc::new(calendar))
//!     .build()
//!     .unwrap();
//!
//! let table = bond.cashflow_table(as_of).unwrap();
//! assert_eq!(table.len(), 5);
//!
//! let ytm = bond.yield_to_maturity(as_of).unwrap();
//! assert!(ytm.yield_value < 0.04);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_fields_in_debug)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod summary;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{AnnualSchedule, CashflowEntry, CashflowTable};
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{AnnualCouponBond, AnnualCouponBondBuilder};
    pub use crate::pricing::{
        present_value, DiscountCurve, FlatYieldCurve, UnitDiscountCurve, YieldResult, YieldSolver,
    };
    pub use crate::summary::BondSummary;
}

pub use error::{BondError, BondResult};
