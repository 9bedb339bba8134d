//! Business day calendars and date resolution.
//!
//! This module provides:
//! - The [`Calendar`] trait, the seam for external calendar providers
//! - [`TradingCalendar`], a finite ordered list of trading dates
//! - The business-day resolver (`on_or_after`, `next_business_day`)
//!
//! Calendars are finite. A lookup that runs past the last known trading
//! date returns `None` rather than guessing.

mod trading;

pub use trading::{CalendarData, TradingCalendar};

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are trading days for a market. Every
/// calendar has a horizon: the last date it has knowledge of.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns the last date covered by the calendar.
    fn horizon_end(&self) -> Date;

    /// Returns `date` itself if it is a business day, otherwise the first
    /// business day after it.
    ///
    /// Returns `None` when no business day exists between `date` and the
    /// horizon.
    fn on_or_after(&self, date: Date) -> Option<Date> {
        let horizon = self.horizon_end();
        let mut current = date;
        while current <= horizon {
            if self.is_business_day(current) {
                return Some(current);
            }
            current = current.add_days(1);
        }
        None
    }

    /// Returns the business day strictly after the resolved `date`.
    ///
    /// `date` is first resolved with [`Calendar::on_or_after`], then the
    /// search restarts one calendar day later.
    fn next_business_day(&self, date: Date) -> Option<Date> {
        let resolved = self.on_or_after(date)?;
        self.on_or_after(resolved.add_days(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mon-Fri calendar with a fixed horizon, relying on the provided
    /// scanning resolver.
    struct WeekdaysUntil(Date);

    impl Calendar for WeekdaysUntil {
        fn name(&self) -> &str {
            "Weekdays"
        }

        fn is_business_day(&self, date: Date) -> bool {
            !date.is_weekend() && date <= self.0
        }

        fn horizon_end(&self) -> Date {
            self.0
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_provided_on_or_after() {
        let cal = WeekdaysUntil(date(2025, 12, 31));

        // Wednesday resolves to itself
        assert_eq!(cal.on_or_after(date(2025, 1, 8)), Some(date(2025, 1, 8)));
        // Saturday rolls to Monday
        assert_eq!(cal.on_or_after(date(2025, 1, 4)), Some(date(2025, 1, 6)));
        assert!(!cal.is_business_day(date(2025, 1, 5)));
    }

    #[test]
    fn test_provided_on_or_after_stops_at_horizon() {
        // 2025-12-27 is a Saturday, horizon is the Sunday after
        let cal = WeekdaysUntil(date(2025, 12, 28));
        assert_eq!(cal.on_or_after(date(2025, 12, 27)), None);
        assert_eq!(cal.on_or_after(date(2026, 3, 2)), None);
    }

    #[test]
    fn test_provided_next_business_day() {
        let cal = WeekdaysUntil(date(2025, 12, 31));

        // Friday -> Monday
        assert_eq!(cal.next_business_day(date(2025, 1, 3)), Some(date(2025, 1, 6)));
        // Saturday resolves to Monday first, then advances to Tuesday
        assert_eq!(cal.next_business_day(date(2025, 1, 4)), Some(date(2025, 1, 7)));
        // Last business day has no successor
        assert_eq!(cal.next_business_day(date(2025, 12, 31)), None);
    }
}
