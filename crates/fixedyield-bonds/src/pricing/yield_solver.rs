//! Yield-to-maturity solver.
//!
//! Solves `price = Σ cf_i / (1 + y)^t_i` for `y`, with `t_i` the ACT/ACT
//! year fraction from the valuation date to each payment. Newton-Raphson
//! runs first from the initial guess; if it fails, Brent is tried on a
//! sequence of widening brackets reaching down to a yield of -0.99.
//!
//! # Example
//!
//! ```rust
//! use fixedyield_bonds::cashflows::CashflowTable;
//! use fixedyield_bonds::pricing::YieldSolver;
//! use fixedyield_core::daycounts::DayCountConvention;
//! use fixedyield_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let as_of = Date::from_ymd(2025, 1, 1).unwrap();
//! let table = CashflowTable::build(
//!     as_of,
//!     &[Date::from_ymd(2026, 1, 1).unwrap()],
//!     &[dec!(105)],
//!     DayCountConvention::ActAct,
//! )
//! .unwrap();
//!
//! let result = YieldSolver::new().solve(&table, dec!(100)).unwrap();
//! assert!((result.yield_value - 0.05).abs() < 1e-10);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fixedyield_math::solvers::{hybrid, SolverConfig};

use crate::cashflows::CashflowTable;
use crate::error::{BondError, BondResult};

/// Default starting point for the yield search.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.03;

/// Lowest yield the fallback brackets reach. Discount factors blow up as
/// the yield approaches -1.
const YIELD_FLOOR: f64 = -0.99;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations of the solver that converged.
    pub iterations: u32,
    /// Present value at the yield minus the price.
    pub residual: f64,
}

impl YieldResult {
    /// Yield in percent.
    pub fn percent(&self) -> f64 {
        self.yield_value * 100.0
    }
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    initial_guess: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default initial guess: 0.03
    /// Default tolerance: 1e-10
    /// Default max iterations: 100
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    /// Sets the initial guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Solver configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Initial guess in use.
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Solves for the yield that discounts `table` back to `price`.
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidPrice` if `price` is not positive.
    /// - `BondError::PricingFailed` if the table is empty or holds a value
    ///   that does not fit in an `f64`.
    /// - `BondError::YieldConvergenceFailed` if no solver converges.
    pub fn solve(&self, table: &CashflowTable, price: Decimal) -> BondResult<YieldResult> {
        if price <= Decimal::ZERO {
            return Err(BondError::invalid_price(format!(
                "price must be positive to solve for yield, got {price}"
            )));
        }

        if table.is_empty() {
            return Err(BondError::pricing_failed("no cashflows to discount"));
        }

        let target = to_f64(price, "price")?;
        let flows = discount_inputs(table)?;

        let objective = |y: f64| pv_at_yield(&flows, y) - target;
        let derivative = |y: f64| pv_derivative(&flows, y);

        let guess = self.initial_guess;
        let brackets = [
            (guess - 0.1, guess + 0.1),
            (-0.1, 0.5),
            (-0.2, 1.0),
            (-0.5, 2.0),
            (YIELD_FLOOR, -0.5),
        ];

        let result = hybrid(objective, derivative, guess, &brackets, &self.config).map_err(|e| {
            BondError::YieldConvergenceFailed {
                iterations: self.config.max_iterations,
                reason: e.to_string(),
            }
        })?;

        log::debug!(
            "yield {:.10} for price {} after {} iterations (residual {:.2e})",
            result.root,
            price,
            result.iterations,
            result.residual
        );

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }

    /// Present value of `table` at an annually compounded yield.
    ///
    /// # Errors
    ///
    /// Returns `BondError::PricingFailed` if a value does not fit in an `f64`.
    pub fn price_at_yield(&self, table: &CashflowTable, yield_rate: f64) -> BondResult<f64> {
        let flows = discount_inputs(table)?;
        Ok(pv_at_yield(&flows, yield_rate))
    }
}

/// (year fraction, amount) pairs, converted once.
fn discount_inputs(table: &CashflowTable) -> BondResult<Vec<(f64, f64)>> {
    table
        .iter()
        .map(|entry| {
            Ok((
                to_f64(entry.time_to_valuation, "year fraction")?,
                to_f64(entry.amount, "cashflow amount")?,
            ))
        })
        .collect()
}

fn to_f64(value: Decimal, what: &str) -> BondResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| BondError::pricing_failed(format!("{what} {value} is not representable")))
}

/// Σ amount × (1 + y)^-t
fn pv_at_yield(flows: &[(f64, f64)], yield_rate: f64) -> f64 {
    flows
        .iter()
        .map(|(years, amount)| amount * (1.0 + yield_rate).powf(-years))
        .sum()
}

/// d/dy of [`pv_at_yield`].
fn pv_derivative(flows: &[(f64, f64)], yield_rate: f64) -> f64 {
    flows
        .iter()
        .map(|(years, amount)| -years * amount * (1.0 + yield_rate).powf(-years - 1.0))
        .sum()
}
