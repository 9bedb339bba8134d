//! Trading calendar backed by an explicit list of open dates.
//!
//! # Example
//!
//! ```
//! use fixedyield_core::calendars::{Calendar, TradingCalendar};
//! use fixedyield_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 12, 31).unwrap();
//! let holidays = [start, Date::from_ymd(2025, 12, 25).unwrap()];
//! let cal = TradingCalendar::weekdays("Exchange", start, end, &holidays).unwrap();
//!
//! assert_eq!(cal.on_or_after(start), Some(Date::from_ymd(2025, 1, 2).unwrap()));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// A finite, ordered set of trading dates.
///
/// Dates are strictly increasing with no duplicates. Membership and the
/// `on_or_after` lookup are binary searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingCalendar {
    name: String,
    dates: Vec<Date>,
}

impl TradingCalendar {
    /// Creates a calendar from dates that are already strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CalendarError` if the list is empty, out of
    /// order, or contains duplicates.
    pub fn from_dates(
        name: impl Into<String>,
        dates: impl IntoIterator<Item = Date>,
    ) -> CoreResult<Self> {
        let name = name.into();
        let dates: Vec<Date> = dates.into_iter().collect();

        if dates.is_empty() {
            return Err(CoreError::calendar(format!(
                "calendar '{name}' has no trading dates"
            )));
        }

        if let Some(pair) = dates.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(CoreError::calendar(format!(
                "calendar '{name}' is not strictly increasing: {} followed by {}",
                pair[0], pair[1]
            )));
        }

        log::debug!(
            "loaded calendar '{}' with {} trading dates ({} to {})",
            name,
            dates.len(),
            dates[0],
            dates[dates.len() - 1]
        );

        Ok(Self { name, dates })
    }

    /// Creates a calendar from dates in any order, sorting and removing
    /// duplicates first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CalendarError` if the list is empty.
    pub fn from_unsorted(
        name: impl Into<String>,
        dates: impl IntoIterator<Item = Date>,
    ) -> CoreResult<Self> {
        let mut dates: Vec<Date> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        Self::from_dates(name, dates)
    }

    /// Creates a Monday-to-Friday calendar from `start` to `end` inclusive,
    /// skipping the given holidays.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CalendarError` if `start > end` or no weekday
    /// survives the holiday list.
    pub fn weekdays(
        name: impl Into<String>,
        start: Date,
        end: Date,
        holidays: &[Date],
    ) -> CoreResult<Self> {
        let name = name.into();
        if start > end {
            return Err(CoreError::calendar(format!(
                "calendar '{name}' starts at {start} after its end {end}"
            )));
        }

        let mut holidays = holidays.to_vec();
        holidays.sort_unstable();

        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            if !current.is_weekend() && holidays.binary_search(&current).is_err() {
                dates.push(current);
            }
            current = current.add_days(1);
        }

        Self::from_dates(name, dates)
    }

    /// Loads a calendar from JSON data.
    ///
    /// # JSON Format
    ///
    /// Either an explicit list of trading dates:
    ///
    /// ```json
    /// { "name": "EUREX", "dates": ["2025-01-02", "2025-01-03"] }
    /// ```
    ///
    /// or a weekday range with holidays removed:
    ///
    /// ```json
    /// {
    ///   "name": "EUREX",
    ///   "start": "2025-01-01",
    ///   "end": "2100-01-01",
    ///   "holidays": ["2025-01-01", "2025-12-25"]
    /// }
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let data: CalendarData = serde_json::from_str(json)
            .map_err(|e| CoreError::calendar(format!("Failed to parse JSON: {e}")))?;
        Self::from_calendar_data(data)
    }

    /// Loads a calendar from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::calendar(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Builds a calendar from already-parsed data.
    ///
    /// Explicit date lists must be strictly increasing.
    pub fn from_calendar_data(data: CalendarData) -> CoreResult<Self> {
        match data {
            CalendarData::Dates { name, dates } => Self::from_dates(name, dates),
            CalendarData::Weekdays {
                name,
                start,
                end,
                holidays,
            } => Self::weekdays(name, start, end, &holidays),
        }
    }

    /// First trading date.
    pub fn first_date(&self) -> Date {
        self.dates[0]
    }

    /// Trading dates in ascending order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of trading dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false; empty calendars are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl Calendar for TradingCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    fn horizon_end(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    fn on_or_after(&self, date: Date) -> Option<Date> {
        let idx = self.dates.partition_point(|d| *d < date);
        self.dates.get(idx).copied()
    }
}

/// Calendar data structure for JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalendarData {
    /// Explicit trading dates.
    Dates {
        /// Name of the calendar
        name: String,
        /// Trading dates in YYYY-MM-DD format, strictly increasing
        dates: Vec<Date>,
    },
    /// Weekdays between two dates minus holidays.
    Weekdays {
        /// Name of the calendar
        name: String,
        /// First date of the range
        start: Date,
        /// Last date of the range, inclusive
        end: Date,
        /// Non-trading weekdays
        #[serde(default)]
        holidays: Vec<Date>,
    },
}
