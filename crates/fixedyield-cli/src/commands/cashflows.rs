//! Cashflows command implementation.

use anyhow::Result;
use fixedyield_core::types::Date;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CashflowsArgs, OutputFormat};
use crate::commands::{skip_bond, Session};
use crate::error::CliError;
use crate::output::{print_header, print_output};

/// Year fractions are shown to this many decimal places.
const TIME_DP: u32 = 6;

/// One payment of one bond.
#[derive(Debug, Serialize, Tabled)]
pub struct CashflowRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Payment Date")]
    pub payment_date: Date,
    #[tabled(rename = "Amount")]
    pub amount: Decimal,
    #[tabled(rename = "Years from Valuation")]
    pub time_to_valuation: Decimal,
    #[tabled(rename = "Years since Previous")]
    pub time_since_previous: Decimal,
}

/// Execute the cashflows command.
pub fn execute(session: &Session, args: &CashflowsArgs, format: OutputFormat) -> Result<()> {
    let selected: Vec<_> = session
        .bonds
        .iter()
        .filter(|entry| match &args.ticker {
            Some(ticker) => entry.bond.ticker().eq_ignore_ascii_case(ticker),
            None => true,
        })
        .collect();

    if let (Some(ticker), true) = (&args.ticker, selected.is_empty()) {
        return Err(CliError::UnknownTicker(ticker.clone()).into());
    }

    let mut rows = Vec::new();
    for entry in selected {
        let table = match entry.bond.cashflow_table(session.as_of) {
            Ok(table) => table,
            Err(err) => {
                skip_bond(entry, &err);
                continue;
            }
        };

        rows.extend(table.iter().map(|cf| CashflowRow {
            ticker: entry.bond.ticker().to_string(),
            payment_date: cf.payment_date,
            amount: cf.amount,
            time_to_valuation: cf.time_to_valuation.round_dp(TIME_DP),
            time_since_previous: cf.time_since_previous.round_dp(TIME_DP),
        }));
    }

    if format == OutputFormat::Table {
        print_header(&format!(
            "Cashflows as of {} ({})",
            session.as_of,
            session.calendar.name()
        ));
    }
    print_output(&rows, format)?;

    Ok(())
}
