//! End-to-end checks of annual coupon bonds against a weekday calendar.

use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use fixedyield_bonds::prelude::*;
use fixedyield_core::prelude::*;
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn weekday_calendar(end: Date) -> Arc<dyn Calendar> {
    Arc::new(TradingCalendar::weekdays("Weekdays", date(2020, 1, 1), end, &[]).unwrap())
}

fn bond_on(
    calendar: Arc<dyn Calendar>,
    coupon: Decimal,
    maturity: Date,
    price: Decimal,
) -> AnnualCouponBond {
    AnnualCouponBond::builder()
        .description(format!("{}% {}", coupon * dec!(100), maturity.year()))
        .ticker("TST")
        .coupon_rate(coupon)
        .issue_date(date(2019, 1, 2))
        .maturity_date(maturity)
        .price(price)
        .calendar(calendar)
        .build()
        .unwrap()
}

#[test]
fn test_bund_valued_day_after_coupon() {
    let cal = weekday_calendar(date(2100, 1, 1));
    let bond = bond_on(cal, dec!(0.025), date(2035, 6, 15), dec!(98.75));
    let as_of = date(2025, 6, 16);

    let dates = bond.payment_dates(as_of).unwrap();
    assert_eq!(dates.len(), 10);
    assert_eq!(dates[0], date(2026, 6, 15));
    // 2030-06-15 is a Saturday
    assert!(dates.contains(&date(2030, 6, 17)));
    // 2035-06-15 is a Friday
    assert_eq!(dates[9], date(2035, 6, 15));

    let flows = bond.cashflows(as_of).unwrap();
    assert_eq!(flows[..9], [dec!(2.5); 9]);
    assert_eq!(flows[9], dec!(102.5));

    let ytm = bond.yield_to_maturity(as_of).unwrap();
    assert!(ytm.yield_value > 0.025);
    assert!(ytm.yield_value < 0.03);
}

#[test]
fn test_holiday_rolls_payment() {
    // 2026-06-15 declared a holiday
    let cal = TradingCalendar::weekdays(
        "Weekdays ex 2026-06-15",
        date(2025, 1, 1),
        date(2030, 12, 31),
        &[date(2026, 6, 15)],
    )
    .unwrap();
    let bond = bond_on(Arc::new(cal), dec!(0.05), date(2027, 6, 15), dec!(100));

    let dates = bond.payment_dates(date(2025, 6, 16)).unwrap();
    assert_eq!(dates, vec![date(2026, 6, 16), date(2027, 6, 15)]);
}

#[test]
fn test_calendar_from_json() {
    let json = r#"{
        "name": "Desk",
        "start": "2025-01-01",
        "end": "2031-01-01",
        "holidays": ["2028-12-25"]
    }"#;
    let cal = TradingCalendar::from_json(json).unwrap();
    // 2028-12-25 is a Monday
    let bond = bond_on(Arc::new(cal), dec!(0.03), date(2028, 12, 25), dec!(99));

    let table = bond.cashflow_table(date(2025, 12, 26)).unwrap();
    let last = table.entries().last().copied().unwrap();
    assert_eq!(last.payment_date, date(2028, 12, 26));
    assert_eq!(last.amount, dec!(103));
}

#[test]
fn test_horizon_exceeded_is_reported() {
    let cal = weekday_calendar(date(2029, 12, 31));
    let bond = bond_on(cal, dec!(0.05), date(2032, 3, 1), dec!(100));

    let err = bond.yield_to_maturity(date(2025, 6, 16)).unwrap_err();
    assert_eq!(
        err,
        BondError::CalendarHorizonExceeded {
            date: date(2030, 3, 1),
            horizon_end: date(2029, 12, 31),
        }
    );
    assert!(err.to_string().contains("2029-12-31"));
}

#[test]
fn test_present_value_at_yield_recovers_price() {
    let cal = weekday_calendar(date(2100, 1, 1));
    let as_of = date(2025, 3, 10);

    for (coupon, price) in [
        (dec!(0.01), dec!(88.4)),
        (dec!(0.045), dec!(103.2)),
        (dec!(0.0), dec!(71)),
    ] {
        let bond = bond_on(cal.clone(), coupon, date(2036, 11, 30), price);
        let ytm = bond.yield_to_maturity(as_of).unwrap();

        let curve = FlatYieldCurve::new(Decimal::try_from(ytm.yield_value).unwrap()).unwrap();
        let pv = bond.present_value_with(as_of, &curve).unwrap();

        assert_relative_eq!(pv.to_f64().unwrap(), price.to_f64().unwrap(), epsilon = 1e-6);
    }
}

#[test]
fn test_custom_solver() {
    let cal = weekday_calendar(date(2100, 1, 1));
    let bond = bond_on(cal, dec!(0.06), date(2040, 9, 1), dec!(140));
    let as_of = date(2025, 6, 16);

    let solver = YieldSolver::new().with_initial_guess(-0.05).with_tolerance(1e-12);
    let custom = bond.yield_with(as_of, &solver).unwrap();
    let default = bond.yield_to_maturity(as_of).unwrap();

    assert!(custom.yield_value < 0.06);
    assert_relative_eq!(custom.yield_value, default.yield_value, epsilon = 1e-8);
}

#[test]
fn test_bond_shared_across_threads() {
    let cal = weekday_calendar(date(2100, 1, 1));
    let bond = Arc::new(bond_on(cal, dec!(0.035), date(2033, 4, 20), dec!(97.5)));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let bond = Arc::clone(&bond);
            thread::spawn(move || {
                let as_of = date(2025, 1, 6).add_days(i * 30);
                bond.yield_to_maturity(as_of).unwrap().yield_value
            })
        })
        .collect();

    for handle in handles {
        let y = handle.join().unwrap();
        assert!(y > 0.035 && y < 0.05);
    }
}

proptest! {
    #[test]
    fn prop_cashflows_sum_to_face_plus_coupons(
        coupon_bp in 0u32..1500,
        maturity_year in 2026i32..2060,
        month in 1u32..=12,
        day in 1u32..=28,
        offset in 0i64..365,
    ) {
        let cal = weekday_calendar(date(2100, 1, 1));
        let coupon = Decimal::from(coupon_bp) / dec!(10000);
        let bond = bond_on(cal, coupon, date(maturity_year, month, day), dec!(100));
        let as_of = date(2025, 1, 1).add_days(offset);

        let flows = bond.cashflows(as_of).unwrap();
        let n = Decimal::from(flows.len() as u64);
        let total: Decimal = flows.iter().sum();
        prop_assert_eq!(total, dec!(100) * (Decimal::ONE + coupon * n));

        let table = bond.cashflow_table(as_of).unwrap();
        let mut previous = Decimal::ZERO;
        for (i, entry) in table.iter().enumerate() {
            prop_assert!(bond.calendar().is_business_day(entry.payment_date));
            prop_assert!(entry.payment_date >= as_of);
            if i > 0 {
                prop_assert!(entry.time_to_valuation > previous);
                prop_assert!(entry.time_since_previous > Decimal::ZERO);
            }
            previous = entry.time_to_valuation;
        }
    }

    #[test]
    fn prop_yield_moves_against_price(
        coupon_bp in 100u32..800,
        maturity_year in 2028i32..2045,
        price_cents in 8000i64..12000,
    ) {
        let cal = weekday_calendar(date(2100, 1, 1));
        let coupon = Decimal::from(coupon_bp) / dec!(10000);
        let maturity = date(maturity_year, 7, 1);
        let as_of = date(2025, 7, 2);

        let price = Decimal::new(price_cents, 2);
        let cheap = bond_on(cal.clone(), coupon, maturity, price);
        let rich = bond_on(cal, coupon, maturity, price + dec!(1));

        let y_cheap = cheap.yield_to_maturity(as_of).unwrap().yield_value;
        let y_rich = rich.yield_to_maturity(as_of).unwrap().yield_value;
        prop_assert!(y_rich < y_cheap);
    }
}
