//! Cash flow generation for annual coupon bonds.
//!
//! - [`AnnualSchedule`]: business-day adjusted coupon dates
//! - [`coupon_amounts`]: coupon per date plus face value at redemption
//! - [`CashflowTable`]: dates, amounts and year fractions from the valuation date

mod schedule;

pub use schedule::AnnualSchedule;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fixedyield_core::daycounts::DayCountConvention;
use fixedyield_core::types::Date;

use crate::error::{BondError, BondResult};

/// Amount paid on each date of `dates`.
///
/// Every date pays `coupon`; the date equal to `redemption_date` also repays
/// `face_value`.
pub fn coupon_amounts(
    dates: &[Date],
    coupon: Decimal,
    face_value: Decimal,
    redemption_date: Date,
) -> Vec<Decimal> {
    dates
        .iter()
        .map(|date| {
            if *date == redemption_date {
                coupon + face_value
            } else {
                coupon
            }
        })
        .collect()
}

/// One row of a bond's cashflow table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowEntry {
    /// Business-day adjusted payment date.
    pub payment_date: Date,
    /// Coupon, or coupon plus face value at redemption.
    pub amount: Decimal,
    /// Year fraction from the valuation date to the payment date.
    pub time_to_valuation: Decimal,
    /// Year fraction since the previous payment (or since valuation for the first).
    pub time_since_previous: Decimal,
}

/// Ordered cashflows of a bond as of one valuation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashflowTable {
    as_of: Date,
    entries: Vec<CashflowEntry>,
}

impl CashflowTable {
    /// Builds a table from parallel date and amount lists.
    ///
    /// # Errors
    ///
    /// Returns `BondError::PricingFailed` if the lists differ in length.
    pub fn build(
        as_of: Date,
        dates: &[Date],
        amounts: &[Decimal],
        day_count: DayCountConvention,
    ) -> BondResult<Self> {
        if dates.len() != amounts.len() {
            return Err(BondError::pricing_failed(format!(
                "{} payment dates but {} amounts",
                dates.len(),
                amounts.len()
            )));
        }

        let mut previous = Decimal::ZERO;
        let entries = dates
            .iter()
            .zip(amounts)
            .map(|(&payment_date, &amount)| {
                let time_to_valuation = day_count.year_fraction(as_of, payment_date);
                let time_since_previous = time_to_valuation - previous;
                previous = time_to_valuation;
                CashflowEntry {
                    payment_date,
                    amount,
                    time_to_valuation,
                    time_since_previous,
                }
            })
            .collect();

        Ok(Self { as_of, entries })
    }

    /// Valuation date the year fractions are measured from.
    pub fn as_of(&self) -> Date {
        self.as_of
    }

    /// Entries ordered by payment date.
    pub fn entries(&self) -> &[CashflowEntry] {
        &self.entries
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, CashflowEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all amounts, undiscounted.
    pub fn total_amount(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

impl<'a> IntoIterator for &'a CashflowTable {
    type Item = &'a CashflowEntry;
    type IntoIter = std::slice::Iter<'a, CashflowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
