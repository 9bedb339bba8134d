//! Annual coupon schedule generation.
//!
//! Coupons fall on the maturity's month and day in every year from the
//! first coupon on or after the valuation date through the maturity year.
//! Each date is rolled forward to the first trading day on or after it.
//!
//! # Example
//!
//! ```rust
//! use fixedyield_bonds::cashflows::AnnualSchedule;
//! use fixedyield_core::calendars::TradingCalendar;
//! use fixedyield_core::types::Date;
//!
//! let cal = TradingCalendar::weekdays(
//!     "Weekdays",
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//!     Date::from_ymd(2030, 12, 31).unwrap(),
//!     &[],
//! )
//! .unwrap();
//!
//! let maturity = Date::from_ymd(2027, 6, 15).unwrap();
//! let as_of = Date::from_ymd(2025, 6, 16).unwrap();
//! let schedule = AnnualSchedule::generate(&cal, maturity, as_of).unwrap();
//!
//! // 2026-06-15 is a Monday, 2027-06-15 a Tuesday
//! assert_eq!(schedule.len(), 2);
//! assert_eq!(schedule.redemption_date(), Date::from_ymd(2027, 6, 15).unwrap());
//! ```

use fixedyield_core::calendars::Calendar;
use fixedyield_core::types::Date;

use crate::error::{BondError, BondResult};

/// Business-day adjusted annual coupon dates for one valuation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualSchedule {
    unadjusted: Vec<Date>,
    adjusted: Vec<Date>,
}

impl AnnualSchedule {
    /// Generates the remaining coupon dates of a bond as of `as_of`.
    ///
    /// The first coupon year is `as_of.year()`, or the year after when
    /// `as_of` is strictly past this year's coupon date. A coupon date equal
    /// to `as_of` is still paid.
    ///
    /// # Errors
    ///
    /// - `BondError::NoFutureCashflows` if the bond has already matured.
    /// - `BondError::CalendarHorizonExceeded` if a coupon date lies past the
    ///   calendar's last trading date.
    pub fn generate(calendar: &dyn Calendar, maturity: Date, as_of: Date) -> BondResult<Self> {
        let this_year_coupon = maturity.with_year(as_of.year())?;
        let first_year = if as_of > this_year_coupon {
            as_of.year() + 1
        } else {
            as_of.year()
        };

        if first_year > maturity.year() {
            return Err(BondError::NoFutureCashflows { as_of, maturity });
        }

        let mut unadjusted = Vec::new();
        let mut adjusted = Vec::new();

        for year in first_year..=maturity.year() {
            let date = maturity.with_year(year)?;
            let payment = calendar
                .on_or_after(date)
                .ok_or_else(|| BondError::CalendarHorizonExceeded {
                    date,
                    horizon_end: calendar.horizon_end(),
                })?;

            unadjusted.push(date);
            adjusted.push(payment);
        }

        log::debug!(
            "generated {} annual coupon dates for maturity {} as of {} on calendar '{}'",
            adjusted.len(),
            maturity,
            as_of,
            calendar.name()
        );

        Ok(Self {
            unadjusted,
            adjusted,
        })
    }

    /// Business-day adjusted payment dates, ascending.
    pub fn dates(&self) -> &[Date] {
        &self.adjusted
    }

    /// Coupon dates before business-day adjustment.
    pub fn unadjusted_dates(&self) -> &[Date] {
        &self.unadjusted
    }

    /// Adjusted maturity date, where the face value is repaid.
    pub fn redemption_date(&self) -> Date {
        self.adjusted[self.adjusted.len() - 1]
    }

    /// Number of remaining payments.
    pub fn len(&self) -> usize {
        self.adjusted.len()
    }

    /// Always false; an empty schedule is reported as an error.
    pub fn is_empty(&self) -> bool {
        self.adjusted.is_empty()
    }

    /// Consumes the schedule, returning the adjusted dates.
    pub fn into_dates(self) -> Vec<Date> {
        self.adjusted
    }
}
