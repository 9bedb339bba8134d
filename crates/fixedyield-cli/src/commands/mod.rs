//! CLI command implementations.

pub mod cashflows;
pub mod pv;
pub mod summary;
pub mod yield_cmd;

use std::sync::Arc;

use chrono::Local;
use fixedyield_core::calendars::{Calendar, TradingCalendar};
use fixedyield_core::types::Date;

use crate::cli::Cli;
use crate::error::CliResult;
use crate::output::print_warning;
use crate::universe::{self, UniverseBond};

/// Last date of the default weekday calendar.
const DEFAULT_HORIZON: (i32, u32, u32) = (2100, 1, 1);

/// Valuation date, calendar and bonds shared by every command.
pub struct Session {
    /// Date cashflows and yields are measured from.
    pub as_of: Date,
    /// Calendar the bonds roll their payment dates on.
    pub calendar: Arc<dyn Calendar>,
    /// Bonds ordered by maturity.
    pub bonds: Vec<UniverseBond>,
}

impl Session {
    /// Resolves the global options and loads the universe.
    pub fn open(cli: &Cli) -> CliResult<Self> {
        let as_of = match cli.valuation_date {
            Some(date) => date,
            None => Date::from(Local::now().date_naive()),
        };

        let calendar: Arc<dyn Calendar> = match &cli.calendar {
            Some(path) => Arc::new(TradingCalendar::from_json_file(path)?),
            None => {
                let (y, m, d) = DEFAULT_HORIZON;
                Arc::new(TradingCalendar::weekdays(
                    "Weekdays",
                    as_of,
                    Date::from_ymd(y, m, d)?,
                    &[],
                )?)
            }
        };

        tracing::debug!(
            "valuation date {as_of}, calendar '{}' ends {}",
            calendar.name(),
            calendar.horizon_end()
        );

        let bonds = universe::load(cli.command.universe(), &calendar)?;

        Ok(Self {
            as_of,
            calendar,
            bonds,
        })
    }
}

/// Reports a bond that a command had to skip.
pub(crate) fn skip_bond(entry: &UniverseBond, err: &dyn std::fmt::Display) {
    tracing::debug!("skipping {} ({}): {err}", entry.bond.ticker(), entry.id);
    print_warning(&format!("{}: {err}", entry.bond.ticker()));
}
