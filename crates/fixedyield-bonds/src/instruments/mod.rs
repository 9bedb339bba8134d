//! Bond instrument types.
//!
//! - [`AnnualCouponBond`]: fixed coupon bond paying once a year

mod annual_coupon;

pub use annual_coupon::{AnnualCouponBond, AnnualCouponBondBuilder};
