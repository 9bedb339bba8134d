//! Domain types for bond analytics.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Currency`]: ISO currency codes
//! - [`Frequency`]: Coupon payment frequency

mod currency;
mod date;
mod frequency;

pub use currency::Currency;
pub use date::{days_in_year, is_leap_year, Date};
pub use frequency::Frequency;
