//! Bond pricing calculations.
//!
//! This module provides:
//! - [`YieldSolver`]: yield-to-maturity from a cashflow table and a price
//! - [`DiscountCurve`]: discount factors by year fraction
//! - [`present_value`]: sum of discounted cashflows

mod yield_solver;

pub use yield_solver::{YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::cashflows::CashflowTable;
use crate::error::{BondError, BondResult};

/// Source of discount factors for present value calculations.
pub trait DiscountCurve: Send + Sync {
    /// Discount factor for a cashflow `time` years after valuation.
    fn discount_factor(&self, time: Decimal) -> BondResult<Decimal>;
}

/// Curve that does not discount: every factor is 1.
///
/// Present values under this curve are the undiscounted cashflow sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitDiscountCurve;

impl DiscountCurve for UnitDiscountCurve {
    fn discount_factor(&self, _time: Decimal) -> BondResult<Decimal> {
        Ok(Decimal::ONE)
    }
}

/// Flat annually compounded curve: `df(t) = (1 + rate)^-t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatYieldCurve {
    rate: Decimal,
}

impl FlatYieldCurve {
    /// Creates a flat curve.
    ///
    /// # Errors
    ///
    /// Returns `BondError::PricingFailed` if `rate <= -1`.
    pub fn new(rate: Decimal) -> BondResult<Self> {
        if rate <= -Decimal::ONE {
            return Err(BondError::pricing_failed(format!(
                "flat rate {rate} must be greater than -1"
            )));
        }
        Ok(Self { rate })
    }

    /// The flat rate.
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl DiscountCurve for FlatYieldCurve {
    fn discount_factor(&self, time: Decimal) -> BondResult<Decimal> {
        let (Some(rate), Some(t)) = (self.rate.to_f64(), time.to_f64()) else {
            return Err(BondError::pricing_failed(format!(
                "cannot discount at rate {} for {} years",
                self.rate, time
            )));
        };

        let df = (1.0 + rate).powf(-t);
        Decimal::from_f64(df).ok_or_else(|| {
            BondError::pricing_failed(format!("discount factor {df} is not representable"))
        })
    }
}

/// Present value of `table` under `curve`: `Σ amount × df(time_to_valuation)`.
pub fn present_value(table: &CashflowTable, curve: &dyn DiscountCurve) -> BondResult<Decimal> {
    table.iter().try_fold(Decimal::ZERO, |pv, entry| {
        Ok(pv + entry.amount * curve.discount_factor(entry.time_to_valuation)?)
    })
}
