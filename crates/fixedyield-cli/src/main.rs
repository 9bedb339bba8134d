//! fixedyield CLI - annual coupon bond cashflows and yields.
//!
//! # Usage
//!
//! ```bash
//! # Print the terms of every bond in a universe file
//! fixedyield summary --universe bonds.csv
//!
//! # Cashflow table of one bond, rolled on a custom calendar
//! fixedyield --calendar xetra.json --valuation-date 2025-06-16 \
//!     cashflows --universe bonds.csv --ticker DBR
//!
//! # Yield to maturity of every bond as JSON
//! fixedyield --format json yield --universe bonds.csv
//!
//! # Present value under a flat 3% curve
//! fixedyield pv --universe bonds.csv --flat-rate 0.03
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod universe;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so table, JSON and CSV output stay clean
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("fixedyield=debug,fixedyield_bonds=debug,fixedyield_core=debug")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let session = commands::Session::open(&cli)?;
    let format = cli.format;

    match cli.command {
        Commands::Summary(args) => commands::summary::execute(&session, &args, format)?,
        Commands::Cashflows(args) => commands::cashflows::execute(&session, &args, format)?,
        Commands::Yield(args) => commands::yield_cmd::execute(&session, &args, format)?,
        Commands::Pv(args) => commands::pv::execute(&session, &args, format)?,
    }

    Ok(())
}
