//! Fixed rate bond paying one coupon a year.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use fixedyield_core::calendars::Calendar;
use fixedyield_core::daycounts::DayCountConvention;
use fixedyield_core::types::{Currency, Date, Frequency};

use crate::cashflows::{coupon_amounts, AnnualSchedule, CashflowTable};
use crate::error::{BondError, BondResult};
use crate::pricing::{present_value, DiscountCurve, UnitDiscountCurve, YieldResult, YieldSolver};
use crate::summary::BondSummary;

/// A fixed coupon bond with annual payments on the maturity's month and day.
///
/// The bond holds its static terms, the observed market price and the
/// trading calendar used to roll payment dates. Everything else (payment
/// dates, cashflows, yield, present value) is derived per valuation date.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use fixedyield_bonds::instruments::AnnualCouponBond;
/// use fixedyield_core::calendars::TradingCalendar;
/// use fixedyield_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let as_of = Date::from_ymd(2025, 6, 16).unwrap();
/// let calendar = TradingCalendar::weekdays(
///     "Weekdays",
///     as_of,
///     Date::from_ymd(2100, 1, 1).unwrap(),
///     &[],
/// )
/// .unwrap();
///
/// let bond = AnnualCouponBond::builder()
///     .description("Bund 2.5% 2035")
///     .ticker("DBR")
///     .coupon_rate(dec!(0.025))
///     .issue_date(Date::from_ymd(2025, 6, 15).unwrap())
///     .maturity_date(Date::from_ymd(2035, 6, 15).unwrap())
///     .price(dec!(98.75))
///     .calendar(Arc::new(calendar))
///     .build()
///     .unwrap();
///
/// let ytm = bond.yield_to_maturity(as_of).unwrap();
/// assert!(ytm.yield_value > 0.025);
/// ```
#[derive(Clone)]
pub struct AnnualCouponBond {
    description: String,
    ticker: String,
    issue_date: Date,
    maturity_date: Date,
    coupon_rate: Decimal,
    frequency: Frequency,
    day_count: DayCountConvention,
    face_value: Decimal,
    currency: Currency,
    price: Decimal,
    calendar: Arc<dyn Calendar>,
}

impl fmt::Debug for AnnualCouponBond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnualCouponBond")
            .field("description", &self.description)
            .field("ticker", &self.ticker)
            .field("issue_date", &self.issue_date)
            .field("maturity_date", &self.maturity_date)
            .field("coupon_rate", &self.coupon_rate)
            .field("frequency", &self.frequency)
            .field("day_count", &self.day_count)
            .field("face_value", &self.face_value)
            .field("currency", &self.currency)
            .field("price", &self.price)
            .field("calendar", &self.calendar.name())
            .finish()
    }
}

impl AnnualCouponBond {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> AnnualCouponBondBuilder {
        AnnualCouponBondBuilder::new()
    }

    /// Free-text description, e.g. "Bund 2.5% 2035".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Short identifier.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Issue date.
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Maturity date, before business-day adjustment.
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Annual coupon rate as a fraction (0.05 = 5%).
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Coupon frequency. Always annual.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Day count convention for year fractions.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Face value.
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Currency of price and face value.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Observed market price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Calendar used to roll payment dates.
    pub fn calendar(&self) -> &dyn Calendar {
        self.calendar.as_ref()
    }

    /// Coupon amount paid each year.
    pub fn coupon_amount(&self) -> Decimal {
        self.coupon_rate * self.face_value
    }

    /// Remaining coupon schedule as of `as_of`.
    pub fn schedule(&self, as_of: Date) -> BondResult<AnnualSchedule> {
        AnnualSchedule::generate(self.calendar(), self.maturity_date, as_of)
    }

    /// Business-day adjusted payment dates remaining as of `as_of`.
    ///
    /// # Errors
    ///
    /// - `BondError::NoFutureCashflows` if the bond has matured.
    /// - `BondError::CalendarHorizonExceeded` if a date is past the calendar.
    pub fn payment_dates(&self, as_of: Date) -> BondResult<Vec<Date>> {
        Ok(self.schedule(as_of)?.into_dates())
    }

    /// Amount paid on each date of [`payment_dates`](Self::payment_dates).
    pub fn cashflows(&self, as_of: Date) -> BondResult<Vec<Decimal>> {
        let schedule = self.schedule(as_of)?;
        Ok(self.amounts_for(&schedule))
    }

    /// Dates, amounts and year fractions of the remaining cashflows.
    pub fn cashflow_table(&self, as_of: Date) -> BondResult<CashflowTable> {
        let schedule = self.schedule(as_of)?;
        let amounts = self.amounts_for(&schedule);
        CashflowTable::build(as_of, schedule.dates(), &amounts, self.day_count)
    }

    /// Yield to maturity at the bond's price, with the default solver.
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidPrice` if the price is not positive.
    /// - `BondError::YieldConvergenceFailed` if the solver does not converge.
    /// - Any schedule error from [`payment_dates`](Self::payment_dates).
    pub fn yield_to_maturity(&self, as_of: Date) -> BondResult<YieldResult> {
        self.yield_with(as_of, &YieldSolver::new())
    }

    /// Yield to maturity with a configured solver.
    pub fn yield_with(&self, as_of: Date, solver: &YieldSolver) -> BondResult<YieldResult> {
        if self.price <= Decimal::ZERO {
            return Err(BondError::invalid_price(format!(
                "{} has price {}; a positive price is required",
                self.ticker, self.price
            )));
        }
        let table = self.cashflow_table(as_of)?;
        solver.solve(&table, self.price)
    }

    /// Present value with every discount factor equal to 1.
    pub fn present_value(&self, as_of: Date) -> BondResult<Decimal> {
        self.present_value_with(as_of, &UnitDiscountCurve)
    }

    /// Present value under `curve`.
    pub fn present_value_with(
        &self,
        as_of: Date,
        curve: &dyn DiscountCurve,
    ) -> BondResult<Decimal> {
        let table = self.cashflow_table(as_of)?;
        present_value(&table, curve)
    }

    /// Static terms for display.
    pub fn summary(&self) -> BondSummary {
        BondSummary::from_bond(self)
    }

    fn amounts_for(&self, schedule: &AnnualSchedule) -> Vec<Decimal> {
        coupon_amounts(
            schedule.dates(),
            self.coupon_amount(),
            self.face_value,
            schedule.redemption_date(),
        )
    }
}

impl fmt::Display for AnnualCouponBond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Matures on {}, Coupon: {:.2}%",
            self.description,
            self.ticker,
            self.maturity_date,
            self.coupon_rate * Decimal::ONE_HUNDRED
        )
    }
}

/// Builder for [`AnnualCouponBond`].
#[derive(Default, Clone)]
pub struct AnnualCouponBondBuilder {
    description: Option<String>,
    ticker: Option<String>,
    issue_date: Option<Date>,
    maturity_date: Option<Date>,
    coupon_rate: Option<Decimal>,
    frequency: Option<Frequency>,
    day_count: Option<DayCountConvention>,
    face_value: Option<Decimal>,
    currency: Option<Currency>,
    price: Option<Decimal>,
    calendar: Option<Arc<dyn Calendar>>,
}

impl AnnualCouponBondBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the ticker.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the coupon rate as a fraction (0.05 = 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the coupon rate in percent (5 = 5%).
    #[must_use]
    pub fn coupon_percent(mut self, percent: Decimal) -> Self {
        self.coupon_rate = Some(percent / Decimal::ONE_HUNDRED);
        self
    }

    /// Sets the coupon frequency. Only annual bonds can be built.
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Sets the face value (default 100).
    #[must_use]
    pub fn face_value(mut self, face_value: Decimal) -> Self {
        self.face_value = Some(face_value);
        self
    }

    /// Sets the currency (default EUR).
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the market price.
    #[must_use]
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the trading calendar.
    #[must_use]
    pub fn calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// - `BondError::MissingField` if a required field is not set.
    /// - `BondError::InvalidSpec` if the terms are inconsistent.
    pub fn build(self) -> BondResult<AnnualCouponBond> {
        let description = self
            .description
            .ok_or_else(|| BondError::missing_field("description"))?;
        let ticker = self
            .ticker
            .ok_or_else(|| BondError::missing_field("ticker"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let maturity_date = self
            .maturity_date
            .ok_or_else(|| BondError::missing_field("maturity_date"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::missing_field("coupon_rate"))?;
        let price = self.price.ok_or_else(|| BondError::missing_field("price"))?;
        let calendar = self
            .calendar
            .ok_or_else(|| BondError::missing_field("calendar"))?;

        let frequency = self.frequency.unwrap_or(Frequency::Annual);
        let face_value = self.face_value.unwrap_or(Decimal::ONE_HUNDRED);

        // Validate
        if maturity_date <= issue_date {
            return Err(BondError::invalid_spec(format!(
                "maturity {maturity_date} must be after issue date {issue_date}"
            )));
        }
        if coupon_rate < Decimal::ZERO {
            return Err(BondError::invalid_spec("coupon_rate cannot be negative"));
        }
        if face_value <= Decimal::ZERO {
            return Err(BondError::invalid_spec("face_value must be positive"));
        }
        if price < Decimal::ZERO {
            return Err(BondError::invalid_spec("price cannot be negative"));
        }
        if frequency != Frequency::Annual {
            return Err(BondError::invalid_spec(format!(
                "only annual coupons are supported, got {frequency}"
            )));
        }

        Ok(AnnualCouponBond {
            description,
            ticker,
            issue_date,
            maturity_date,
            coupon_rate,
            frequency,
            day_count: self.day_count.unwrap_or_default(),
            face_value,
            currency: self.currency.unwrap_or_default(),
            price,
            calendar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fixedyield_core::calendars::TradingCalendar;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn calendar() -> Arc<dyn Calendar> {
        Arc::new(
            TradingCalendar::weekdays("Weekdays", date(2024, 1, 1), date(2100, 1, 1), &[])
                .unwrap(),
        )
    }

    fn bond(coupon: Decimal, maturity: Date, price: Decimal) -> AnnualCouponBond {
        AnnualCouponBond::builder()
            .description("Test Bond")
            .ticker("TEST")
            .coupon_rate(coupon)
            .issue_date(date(2020, 6, 15))
            .maturity_date(maturity)
            .price(price)
            .calendar(calendar())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let b = bond(dec!(0.05), date(2030, 6, 15), dec!(100));

        assert_eq!(b.face_value(), dec!(100));
        assert_eq!(b.currency(), Currency::EUR);
        assert_eq!(b.frequency(), Frequency::Annual);
        assert_eq!(b.day_count(), DayCountConvention::ActAct);
        assert_eq!(b.coupon_amount(), dec!(5));
        assert_eq!(b.calendar().name(), "Weekdays");
    }

    #[test]
    fn test_builder_requires_calendar() {
        let err = AnnualCouponBond::builder()
            .description("No calendar")
            .ticker("X")
            .coupon_rate(dec!(0.01))
            .issue_date(date(2020, 1, 1))
            .maturity_date(date(2030, 1, 1))
            .price(dec!(100))
            .build()
            .unwrap_err();

        assert_eq!(err, BondError::missing_field("calendar"));
    }

    #[test]
    fn test_builder_validation() {
        let base = || {
            AnnualCouponBond::builder()
                .description("B")
                .ticker("B")
                .coupon_rate(dec!(0.02))
                .issue_date(date(2020, 1, 1))
                .maturity_date(date(2030, 1, 1))
                .price(dec!(100))
                .calendar(calendar())
        };

        assert!(base().build().is_ok());
        assert!(base().maturity_date(date(2020, 1, 1)).build().is_err());
        assert!(base().coupon_rate(dec!(-0.01)).build().is_err());
        assert!(base().face_value(Decimal::ZERO).build().is_err());
        assert!(base().price(dec!(-1)).build().is_err());
        assert!(matches!(
            base().frequency(Frequency::SemiAnnual).build(),
            Err(BondError::InvalidSpec { .. })
        ));
        assert_eq!(
            base().coupon_percent(dec!(2.5)).build().unwrap().coupon_rate(),
            dec!(0.025)
        );
    }

    #[test]
    fn test_payment_dates_day_after_coupon() {
        let b = bond(dec!(0.05), date(2030, 6, 15), dec!(100));
        let dates = b.payment_dates(date(2025, 6, 16)).unwrap();

        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], date(2026, 6, 15));
        // 2030-06-15 is a Saturday
        assert_eq!(dates[4], b.calendar().on_or_after(date(2030, 6, 15)).unwrap());
    }

    #[test]
    fn test_cashflow_sum() {
        let b = bond(dec!(0.05), date(2030, 6, 15), dec!(100));
        let flows = b.cashflows(date(2025, 6, 16)).unwrap();

        let total: Decimal = flows.iter().sum();
        assert_eq!(total, dec!(100) * (Decimal::ONE + dec!(0.05) * Decimal::from(5)));
        assert_eq!(flows.last().copied(), Some(dec!(105)));
    }

    #[test]
    fn test_cashflow_table_ordering() {
        let b = bond(dec!(0.03), date(2034, 2, 28), dec!(97));
        let table = b.cashflow_table(date(2025, 3, 10)).unwrap();

        let mut previous = Decimal::ZERO;
        for entry in &table {
            assert!(entry.time_to_valuation > previous);
            assert!(entry.time_since_previous > Decimal::ZERO);
            previous = entry.time_to_valuation;
        }
    }

    #[test]
    fn test_par_bond_one_year() {
        // 2026-06-13 is a Saturday, so the only payment is exactly one
        // year after valuation
        let b = bond(dec!(0.05), date(2026, 6, 13), dec!(100));
        let as_of = date(2025, 6, 15);
        assert_eq!(b.payment_dates(as_of).unwrap(), vec![date(2026, 6, 15)]);

        let ytm = b.yield_to_maturity(as_of).unwrap();

        assert_relative_eq!(ytm.yield_value, 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_premium_and_discount() {
        // Valued after the 2025 coupon so only the five full coupons remain
        let as_of = date(2025, 6, 18);
        let premium = bond(dec!(0.05), date(2030, 6, 17), dec!(104));
        let discount = bond(dec!(0.05), date(2030, 6, 17), dec!(96));

        assert!(premium.yield_to_maturity(as_of).unwrap().yield_value < 0.05);
        assert!(discount.yield_to_maturity(as_of).unwrap().yield_value > 0.05);
    }

    #[test]
    fn test_zero_price_is_rejected_for_yield() {
        let b = bond(dec!(0.05), date(2030, 6, 15), Decimal::ZERO);
        assert!(matches!(
            b.yield_to_maturity(date(2025, 6, 16)),
            Err(BondError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_present_value() {
        let b = bond(dec!(0.04), date(2028, 6, 15), dec!(101));
        let as_of = date(2025, 6, 16);

        // Unit curve returns the undiscounted total
        assert_eq!(b.present_value(as_of).unwrap(), dec!(112));

        // Discounting at the yield recovers the price
        let ytm = b.yield_to_maturity(as_of).unwrap();
        let curve = crate::pricing::FlatYieldCurve::new(
            Decimal::try_from(ytm.yield_value).unwrap(),
        )
        .unwrap();
        let pv = b.present_value_with(as_of, &curve).unwrap();
        assert_relative_eq!(pv.to_f64().unwrap(), 101.0, epsilon = 1e-6);
    }

    #[test]
    fn test_display() {
        let b = bond(dec!(0.025), date(2035, 6, 15), dec!(100));
        assert_eq!(
            b.to_string(),
            "Test Bond (TEST) - Matures on 2035-06-15, Coupon: 2.50%"
        );
    }

    #[test]
    fn test_matured_bond() {
        let b = bond(dec!(0.05), date(2025, 6, 15), dec!(100));
        assert!(matches!(
            b.cashflow_table(date(2025, 6, 16)),
            Err(BondError::NoFutureCashflows { .. })
        ));
    }
}
