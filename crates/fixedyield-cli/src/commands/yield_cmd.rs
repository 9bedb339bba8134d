//! Yield command implementation.
//!
//! Solves each bond for its yield to maturity at the quoted price. A bond
//! that cannot be solved is reported in its row and does not stop the run.

use anyhow::Result;
use fixedyield_core::types::Date;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{OutputFormat, UniverseArgs};
use crate::commands::Session;
use crate::output::{print_header, print_output, print_warning};

/// Yield of one bond.
#[derive(Debug, Serialize, Tabled)]
pub struct YieldRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Maturity")]
    pub maturity: Date,
    #[tabled(rename = "Price")]
    pub price: Decimal,
    #[tabled(rename = "Yield (%)")]
    pub yield_percent: String,
    #[tabled(rename = "Iterations")]
    pub iterations: String,
    #[tabled(rename = "Error")]
    pub error: String,
}

/// Execute the yield command.
pub fn execute(session: &Session, _args: &UniverseArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<YieldRow> = session
        .bonds
        .iter()
        .map(|entry| {
            let bond = &entry.bond;
            let mut row = YieldRow {
                ticker: bond.ticker().to_string(),
                description: bond.description().to_string(),
                maturity: bond.maturity_date(),
                price: bond.price(),
                yield_percent: String::new(),
                iterations: String::new(),
                error: String::new(),
            };

            match bond.yield_to_maturity(session.as_of) {
                Ok(result) => {
                    tracing::debug!(
                        "{}: yield {:.10} in {} iterations",
                        bond.ticker(),
                        result.yield_value,
                        result.iterations
                    );
                    row.yield_percent = format!("{:.6}", result.percent());
                    row.iterations = result.iterations.to_string();
                }
                Err(err) => {
                    print_warning(&format!("{} ({}): {err}", bond.ticker(), entry.id));
                    row.error = err.to_string();
                }
            }
            row
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("Yield to maturity as of {}", session.as_of));
    }
    print_output(&rows, format)?;

    Ok(())
}
