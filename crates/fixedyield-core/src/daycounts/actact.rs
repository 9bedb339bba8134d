//! Actual/Actual day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::{days_in_year, Date};

/// Actual/Actual day count convention.
///
/// The period is split at calendar year boundaries: the stub in the
/// first year is divided by that year's length, the stub in the last
/// year by the last year's length, and every full year in between
/// counts as exactly one.
///
/// # Formula
///
/// $$\text{YF} = \frac{\text{Jan 1}_{y_1+1} - d_1}{D_{y_1}} + (y_2 - y_1 - 1) + \frac{d_2 - \text{Jan 1}_{y_2}}{D_{y_2}}$$
///
/// where $D_y$ is 366 in leap years and 365 otherwise. Dates in the same
/// year reduce to $(d_2 - d_1) / D_{y}$.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActAct;

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start > end {
            log::warn!(
                "year fraction requested with start {} after end {}; result will be negative",
                start,
                end
            );
        }

        let start_year = start.year();
        let end_year = end.year();

        if start_year == end_year {
            return Decimal::from(start.days_between(&end))
                / Decimal::from(days_in_year(start_year));
        }

        // Days from start up to (excluding) Jan 1 of the following year
        let start_year_days = days_in_year(start_year);
        let first = Decimal::from(start_year_days - start.day_of_year() + 1)
            / Decimal::from(start_year_days);

        let full_years = Decimal::from(i64::from(end_year) - i64::from(start_year) - 1);

        // Days from Jan 1 of the end year up to end
        let last = Decimal::from(end.day_of_year() - 1) / Decimal::from(days_in_year(end_year));

        first + full_years + last
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_same_date_is_zero() {
        let d = date(2025, 5, 7);
        assert_eq!(ActAct.year_fraction(d, d), Decimal::ZERO);
    }

    #[test]
    fn test_full_non_leap_year() {
        assert_eq!(ActAct.year_fraction(date(2025, 1, 1), date(2026, 1, 1)), dec!(1));
    }

    #[test]
    fn test_full_leap_year() {
        assert_eq!(ActAct.year_fraction(date(2024, 1, 1), date(2025, 1, 1)), dec!(1));
    }

    #[test]
    fn test_same_year_leap_denominator() {
        // 2024-01-01 to 2024-07-01 = 182 days in a 366 day year
        let yf = ActAct.year_fraction(date(2024, 1, 1), date(2024, 7, 1));
        assert_eq!(yf, dec!(182) / dec!(366));

        // 2025-01-01 to 2025-07-01 = 181 days in a 365 day year
        let yf = ActAct.year_fraction(date(2025, 1, 1), date(2025, 7, 1));
        assert_eq!(yf, dec!(181) / dec!(365));
    }

    #[test]
    fn test_cross_year() {
        // 2024-07-01 -> 2025-07-01: 184/366 in 2024, 181/365 in 2025
        let yf = ActAct.year_fraction(date(2024, 7, 1), date(2025, 7, 1));
        assert_eq!(yf, dec!(184) / dec!(366) + dec!(181) / dec!(365));
    }

    #[test]
    fn test_spans_leap_year_fully() {
        // 2023-07-01 -> 2025-07-01: 2024 is a full year in between
        let yf = ActAct.year_fraction(date(2023, 7, 1), date(2025, 7, 1));
        let expected = dec!(184) / dec!(365) + dec!(1) + dec!(181) / dec!(365);
        assert_eq!(yf, expected);

        // The 2024 stub alone uses the 366 day denominator
        let stub = ActAct.year_fraction(date(2024, 3, 1), date(2025, 1, 1));
        assert_eq!(stub, dec!(306) / dec!(366));
    }

    #[test]
    fn test_reversed_dates_are_negative() {
        let forward = ActAct.year_fraction(date(2025, 1, 1), date(2025, 7, 1));
        let backward = ActAct.year_fraction(date(2025, 7, 1), date(2025, 1, 1));
        assert_eq!(backward, -forward);
    }

    #[test]
    fn test_reversed_dates_log_a_warning() {
        let (forward, records) = capture::records_during(|| {
            ActAct.year_fraction(date(2025, 1, 1), date(2025, 7, 1))
        });
        assert!(records.is_empty());

        let (backward, records) = capture::records_during(|| {
            ActAct.year_fraction(date(2025, 7, 1), date(2025, 1, 1))
        });
        assert_eq!(backward, -forward);
        assert_eq!(records.len(), 1);
        let (level, message) = &records[0];
        assert_eq!(*level, log::Level::Warn);
        assert!(message.contains("start 2025-07-01 after end 2025-01-01"), "{message}");
    }

    #[test]
    fn test_day_count_is_actual() {
        assert_eq!(ActAct.day_count(date(2024, 2, 1), date(2024, 3, 1)), 29);
    }

    /// Logger that keeps records per thread so parallel tests do not see
    /// each other's output.
    mod capture {
        use std::cell::RefCell;
        use std::sync::Once;

        use log::{Level, LevelFilter, Log, Metadata, Record};

        thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
        }

        struct ThreadLogger;

        impl Log for ThreadLogger {
            fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &Record<'_>) {
                RECORDS.with(|records| {
                    records
                        .borrow_mut()
                        .push((record.level(), record.args().to_string()));
                });
            }

            fn flush(&self) {}
        }

        static LOGGER: ThreadLogger = ThreadLogger;
        static INSTALL: Once = Once::new();

        pub fn records_during<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
            INSTALL.call_once(|| {
                log::set_logger(&LOGGER).unwrap();
                log::set_max_level(LevelFilter::Trace);
            });
            RECORDS.with(|records| records.borrow_mut().clear());
            let value = f();
            let captured = RECORDS.with(|records| records.borrow_mut().drain(..).collect());
            (value, captured)
        }
    }
}
