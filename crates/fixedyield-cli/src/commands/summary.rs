//! Summary command implementation.
//!
//! Prints the static terms of every bond in the universe.

use anyhow::Result;
use fixedyield_bonds::summary::BondSummary;

use crate::cli::{OutputFormat, UniverseArgs};
use crate::commands::Session;
use crate::output::{print_csv, print_header, print_json};

/// Execute the summary command.
pub fn execute(session: &Session, _args: &UniverseArgs, format: OutputFormat) -> Result<()> {
    let summaries: Vec<BondSummary> = session
        .bonds
        .iter()
        .map(|entry| entry.bond.summary())
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!("{} bonds", summaries.len()));
            for summary in &summaries {
                println!("\n{summary}");
            }
        }
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Csv => print_csv(&summaries)?,
    }

    Ok(())
}
