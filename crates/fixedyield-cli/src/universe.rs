//! Bond universe loading from CSV.
//!
//! One bond per row:
//!
//! ```text
//! id,description,ticker,coupon,issue_date,maturity,price
//! 1,Bund 2.5% 2035,DBR,2.5,2025-06-15,2035-06-15,98.75
//! ```
//!
//! `coupon` is in percent. Optional `currency` and `face_value` columns
//! override the EUR / 100 defaults.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use fixedyield_bonds::instruments::AnnualCouponBond;
use fixedyield_core::calendars::Calendar;
use fixedyield_core::types::{Currency, Date};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
struct BondRecord {
    id: String,
    description: String,
    ticker: String,
    coupon: String,
    issue_date: String,
    maturity: String,
    price: String,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    face_value: Option<String>,
}

/// A bond and the id it was listed under.
#[derive(Debug, Clone)]
pub struct UniverseBond {
    /// Identifier from the `id` column.
    pub id: String,
    /// The bond.
    pub bond: AnnualCouponBond,
}

/// Loads every bond in `path`, ordered by maturity.
pub fn load(path: &Path, calendar: &Arc<dyn Calendar>) -> CliResult<Vec<UniverseBond>> {
    let file_error = |source| CliError::UniverseFile {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(file_error)?;

    let mut bonds = Vec::new();
    for (index, result) in reader.deserialize::<BondRecord>().enumerate() {
        let record_error = |reason: String| CliError::Universe {
            path: path.to_path_buf(),
            record: index + 1,
            reason,
        };

        let record = result.map_err(|e| record_error(e.to_string()))?;
        let id = record.id.clone();
        let bond = build_bond(record, calendar).map_err(record_error)?;
        bonds.push(UniverseBond { id, bond });
    }

    bonds.sort_by_key(|entry| entry.bond.maturity_date());

    tracing::info!(
        "loaded {} bonds from {} on calendar '{}'",
        bonds.len(),
        path.display(),
        calendar.name()
    );

    Ok(bonds)
}

fn build_bond(
    record: BondRecord,
    calendar: &Arc<dyn Calendar>,
) -> Result<AnnualCouponBond, String> {
    let mut builder = AnnualCouponBond::builder()
        .description(record.description)
        .ticker(record.ticker)
        .coupon_percent(parse_decimal("coupon", &record.coupon)?)
        .issue_date(parse_date("issue_date", &record.issue_date)?)
        .maturity_date(parse_date("maturity", &record.maturity)?)
        .price(parse_decimal("price", &record.price)?)
        .calendar(Arc::clone(calendar));

    if let Some(code) = record.currency.filter(|c| !c.is_empty()) {
        let currency = Currency::from_str(&code).map_err(|e| e.to_string())?;
        builder = builder.currency(currency);
    }
    if let Some(face) = record.face_value.filter(|f| !f.is_empty()) {
        builder = builder.face_value(parse_decimal("face_value", &face)?);
    }

    builder.build().map_err(|e| e.to_string())
}

fn parse_decimal(column: &str, value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value).map_err(|_| format!("{column} '{value}' is not a number"))
}

fn parse_date(column: &str, value: &str) -> Result<Date, String> {
    Date::parse(value).map_err(|_| format!("{column} '{value}' is not a YYYY-MM-DD date"))
}
