//! Present value command implementation.

use anyhow::Result;
use fixedyield_bonds::pricing::{DiscountCurve, FlatYieldCurve, UnitDiscountCurve};
use fixedyield_core::types::Date;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{OutputFormat, PvArgs};
use crate::commands::{skip_bond, Session};
use crate::output::{print_header, print_output};

/// Present value of one bond.
#[derive(Debug, Serialize, Tabled)]
pub struct PvRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Maturity")]
    pub maturity: Date,
    #[tabled(rename = "Price")]
    pub price: Decimal,
    #[tabled(rename = "Present Value")]
    pub present_value: Decimal,
}

/// Execute the pv command.
pub fn execute(session: &Session, args: &PvArgs, format: OutputFormat) -> Result<()> {
    let curve: Box<dyn DiscountCurve> = match args.flat_rate {
        Some(rate) => Box::new(FlatYieldCurve::new(rate)?),
        None => Box::new(UnitDiscountCurve),
    };
    let label = match args.flat_rate {
        Some(rate) => format!("flat {rate}"),
        None => "undiscounted".to_string(),
    };

    let mut rows = Vec::new();
    for entry in &session.bonds {
        match entry.bond.present_value_with(session.as_of, curve.as_ref()) {
            Ok(pv) => rows.push(PvRow {
                ticker: entry.bond.ticker().to_string(),
                maturity: entry.bond.maturity_date(),
                price: entry.bond.price(),
                present_value: pv.round_dp(6),
            }),
            Err(err) => skip_bond(entry, &err),
        }
    }

    if format == OutputFormat::Table {
        print_header(&format!("Present value as of {} ({label})", session.as_of));
    }
    print_output(&rows, format)?;

    Ok(())
}
