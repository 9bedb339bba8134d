//! CLI argument definitions.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use fixedyield_core::types::Date;
use rust_decimal::Decimal;

/// fixedyield - annual coupon bond cashflows, yields and present values
#[derive(Parser, Debug)]
#[command(name = "fixedyield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Trading calendar JSON file. Defaults to Mon-Fri from the valuation date to 2100-01-01.
    #[arg(short, long, global = true, env = "FIXEDYIELD_CALENDAR")]
    pub calendar: Option<PathBuf>,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true, env = "FIXEDYIELD_VALUATION_DATE")]
    pub valuation_date: Option<Date>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the terms of each bond
    Summary(UniverseArgs),

    /// Print the remaining cashflows of each bond
    Cashflows(CashflowsArgs),

    /// Solve for yield to maturity at the market price
    Yield(UniverseArgs),

    /// Present value of the remaining cashflows
    Pv(PvArgs),
}

impl Commands {
    /// Bond universe file the command reads.
    pub fn universe(&self) -> &Path {
        match self {
            Commands::Summary(args) | Commands::Yield(args) => &args.universe,
            Commands::Cashflows(args) => &args.bonds.universe,
            Commands::Pv(args) => &args.bonds.universe,
        }
    }
}

/// Bond universe input.
#[derive(Args, Debug)]
pub struct UniverseArgs {
    /// Bond terms CSV (id,description,ticker,coupon,issue_date,maturity,price)
    #[arg(short, long, env = "FIXEDYIELD_UNIVERSE")]
    pub universe: PathBuf,
}

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    #[command(flatten)]
    pub bonds: UniverseArgs,

    /// Only show the bond with this ticker
    #[arg(short, long)]
    pub ticker: Option<String>,
}

/// Arguments for the pv command.
#[derive(Args, Debug)]
pub struct PvArgs {
    #[command(flatten)]
    pub bonds: UniverseArgs,

    /// Discount at this flat annual rate (0.03 = 3%) instead of not discounting
    #[arg(long)]
    pub flat_rate: Option<Decimal>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
