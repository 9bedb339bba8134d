//! Human-readable bond summaries.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fixedyield_core::daycounts::DayCountConvention;
use fixedyield_core::types::{Currency, Date, Frequency};

use crate::instruments::AnnualCouponBond;

const RULE_WIDTH: usize = 53;

/// Static terms of a bond, detached from its calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondSummary {
    /// Free-text description.
    pub description: String,
    /// Short identifier.
    pub ticker: String,
    /// Issue date.
    pub issue_date: Date,
    /// Unadjusted maturity date.
    pub maturity_date: Date,
    /// Coupon rate as a fraction.
    pub coupon_rate: Decimal,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Market price.
    pub price: Decimal,
    /// Face value.
    pub face_value: Decimal,
    /// Currency of price and face value.
    pub currency: Currency,
    /// Day count convention.
    pub day_count: DayCountConvention,
}

impl BondSummary {
    pub(crate) fn from_bond(bond: &AnnualCouponBond) -> Self {
        Self {
            description: bond.description().to_string(),
            ticker: bond.ticker().to_string(),
            issue_date: bond.issue_date(),
            maturity_date: bond.maturity_date(),
            coupon_rate: bond.coupon_rate(),
            frequency: bond.frequency(),
            price: bond.price(),
            face_value: bond.face_value(),
            currency: bond.currency(),
            day_count: bond.day_count(),
        }
    }

    /// Coupon rate in percent.
    pub fn coupon_percent(&self) -> Decimal {
        self.coupon_rate * Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for BondSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.description, self.ticker)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "{:<14}{}", "Issued:", self.issue_date)?;
        writeln!(f, "{:<14}{}", "Matures:", self.maturity_date)?;
        writeln!(f, "{:<14}{:.2}%", "Coupon:", self.coupon_percent())?;
        writeln!(
            f,
            "{:<14}{} ({} per year)",
            "Frequency:",
            self.frequency,
            self.frequency.periods_per_year()
        )?;
        writeln!(f, "{:<14}{} {}", "Price:", self.price, self.currency)?;
        writeln!(f, "{:<14}{} {}", "Face value:", self.face_value, self.currency)?;
        write!(f, "{:<14}{}", "Day count:", self.day_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use fixedyield_core::calendars::TradingCalendar;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn summary() -> BondSummary {
        let cal = TradingCalendar::weekdays("Weekdays", date(2025, 1, 1), date(2040, 1, 1), &[])
            .unwrap();
        AnnualCouponBond::builder()
            .description("OAT 3% 2034")
            .ticker("FRTR")
            .coupon_percent(dec!(3))
            .issue_date(date(2024, 5, 25))
            .maturity_date(date(2034, 5, 25))
            .price(dec!(99.10))
            .calendar(Arc::new(cal))
            .build()
            .unwrap()
            .summary()
    }

    #[test]
    fn test_summary_fields() {
        let s = summary();
        assert_eq!(s.ticker, "FRTR");
        assert_eq!(s.coupon_rate, dec!(0.03));
        assert_eq!(s.coupon_percent(), dec!(3.00));
        assert_eq!(s.face_value, dec!(100));
    }

    #[test]
    fn test_summary_display() {
        let text = summary().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "OAT 3% 2034 (FRTR)");
        assert_eq!(lines[1].len(), RULE_WIDTH);
        assert!(text.contains("Coupon:       3.00%"));
        assert!(text.contains("Frequency:    Annual (1 per year)"));
        assert!(text.contains("Price:        99.10 EUR"));
        assert!(text.contains("Day count:    ACT/ACT"));
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["ticker"], "FRTR");
        assert_eq!(json["maturity_date"], "2034-05-25");
    }
}
