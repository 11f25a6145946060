//! Core pricing calculation functions.
//!
//! Pure functions for pricing math and derived booking state - no catalog
//! access, no I/O. Everything here except the confirmation code generator
//! returns the same output for the same input.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{PriceTier, ReturnSchedule, ServiceType, UsageAdvice};
use super::errors::PricingError;

/// Bike rental rate per hour
pub const HOURLY_RATE: Decimal = dec!(750);

/// Range per watt-hour of remaining capacity
const RANGE_KM_PER_WH: Decimal = dec!(5);

const MILES_PER_KM: Decimal = dec!(0.621);

/// Share of the estimated range suggested for limited-use batteries
const SHORT_TRIP_FACTOR: Decimal = dec!(0.7);

/// Rated charge cycles used when a battery has no explicit rating
pub const DEFAULT_MAX_CHARGE_CYCLES: u32 = 1000;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ecoswap_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Round to a whole unit, halves away from zero.
fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole `i32`, or `None` when the rounded value does not fit
fn to_whole_i32(value: Decimal) -> Option<i32> {
    round_half_up(value).to_i32()
}

/// Whole `i32`, clamped to the `i32` range
fn saturating_whole_i32(value: Decimal) -> i32 {
    to_whole_i32(value).unwrap_or(if value.is_sign_negative() {
        i32::MIN
    } else {
        i32::MAX
    })
}

/// Swap price for a battery with the given health.
///
/// Tiered on inclusive lower bounds: 90 and above is premium, 70-89 standard,
/// everything below economy. Values outside 0-100 are not rejected here and
/// simply land in the nearest tier.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ecoswap_web::pricing::battery_price;
///
/// assert_eq!(battery_price(92), dec!(2625));
/// assert_eq!(battery_price(70), dec!(1875));
/// assert_eq!(battery_price(69), dec!(1125));
/// ```
pub fn battery_price(health_percentage: i32) -> Decimal {
    price_tier(health_percentage).price()
}

pub fn price_tier(health_percentage: i32) -> PriceTier {
    PriceTier::for_health(health_percentage)
}

/// Rental fare: `hours * HOURLY_RATE` rounded to a whole currency unit.
///
/// Any duration is accepted, including fractions and negatives; the booking
/// flow is responsible for keeping it within 1-24 hours. Durations whose fare
/// exceeds the `Decimal` range saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn rental_fare(hours: Decimal) -> Decimal {
    round_half_up(hours.saturating_mul(HOURLY_RATE))
}

/// Flat price for a service name, or zero when the name is not on the menu.
///
/// Use [`lookup_service_price`] when an unknown name must be told apart from
/// a free service.
pub fn service_price(service_type: &str) -> Decimal {
    lookup_service_price(service_type).unwrap_or(Decimal::ZERO)
}

pub fn lookup_service_price(service_type: &str) -> Option<Decimal> {
    service_type
        .parse::<ServiceType>()
        .ok()
        .map(ServiceType::price)
}

/// Add a whole number of hours to a pickup instant.
///
/// Plain wall-clock arithmetic, no timezone or DST adjustment. Returns `None`
/// if the result does not fit the calendar.
pub fn return_instant(pickup: NaiveDateTime, duration_hours: i64) -> Option<NaiveDateTime> {
    let seconds = duration_hours.checked_mul(3600)?;
    pickup.checked_add_signed(Duration::try_seconds(seconds)?)
}

pub fn parse_date(value: &str) -> Result<NaiveDate, PricingError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| PricingError::InvalidDateTime {
        value: value.to_string(),
        expected: "YYYY-MM-DD",
    })
}

pub fn parse_time(value: &str) -> Result<NaiveTime, PricingError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| PricingError::InvalidDateTime {
        value: value.to_string(),
        expected: "HH:MM",
    })
}

/// Return date and time for a rental picked up at `pickup_date` `pickup_time`
/// and kept for `duration_hours`.
///
/// Midnight and year boundaries roll over through ordinary date arithmetic.
///
/// # Examples
/// ```
/// use ecoswap_web::pricing::derived_return_time;
///
/// let schedule = derived_return_time("2023-12-05", "23:30", 2).unwrap();
/// assert_eq!(schedule.return_date, "2023-12-06");
/// assert_eq!(schedule.return_time, "01:30");
/// ```
pub fn derived_return_time(
    pickup_date: &str,
    pickup_time: &str,
    duration_hours: i64,
) -> Result<ReturnSchedule, PricingError> {
    let pickup = parse_date(pickup_date)?.and_time(parse_time(pickup_time)?);
    let returned = return_instant(pickup, duration_hours).ok_or(PricingError::DateOutOfRange)?;

    Ok(ReturnSchedule {
        return_date: returned.format(DATE_FORMAT).to_string(),
        return_time: returned.format(TIME_FORMAT).to_string(),
    })
}

/// Whole hours between a pickup and a chosen return, rounded up, at least 1.
pub fn rental_hours_between(pickup: NaiveDateTime, returned: NaiveDateTime) -> i64 {
    const HOUR_MS: i64 = 3_600_000;

    let diff = (returned - pickup).num_milliseconds();
    let mut hours = diff / HOUR_MS;
    if diff % HOUR_MS > 0 {
        hours += 1;
    }
    hours.max(1)
}

/// Six-digit collection PIN, uniform over 100000-999999.
///
/// No uniqueness is tracked; the code is only a display token.
pub fn random_confirmation_code<R: Rng>(rng: &mut R) -> String {
    rng.gen_range(100_000u32..=999_999).to_string()
}

/// [`random_confirmation_code`] drawn from the thread-local RNG
pub fn generate_pin() -> String {
    random_confirmation_code(&mut rand::thread_rng())
}

/// Health as the share of original capacity still available, in whole percent.
///
/// `None` when either capacity is zero or the ratio does not fit an `i32`.
pub fn health_from_capacity(capacity_wh: Decimal, current_capacity_wh: Decimal) -> Option<i32> {
    if capacity_wh.is_zero() || current_capacity_wh.is_zero() {
        return None;
    }
    let percent = current_capacity_wh
        .checked_div(capacity_wh)?
        .checked_mul(dec!(100))?;
    to_whole_i32(percent)
}

/// Estimated range: 5 km per remaining Wh, scaled by health.
///
/// `None` when the range does not fit an `i32`.
pub fn estimated_range_km(current_capacity_wh: Decimal, health_percentage: i32) -> Option<i32> {
    let health_factor = Decimal::from(health_percentage) / dec!(100);
    let range = current_capacity_wh
        .checked_mul(RANGE_KM_PER_WH)?
        .checked_mul(health_factor)?;
    to_whole_i32(range)
}

pub fn usage_advice(health_percentage: i32) -> UsageAdvice {
    UsageAdvice::for_health(health_percentage)
}

/// Longest trip recommended for a limited-use battery
pub fn short_trip_limit_km(estimated_range_km: i32) -> i32 {
    saturating_whole_i32(Decimal::from(estimated_range_km) * SHORT_TRIP_FACTOR)
}

pub fn km_to_miles(km: i32) -> i32 {
    saturating_whole_i32(Decimal::from(km) * MILES_PER_KM)
}

/// Share of rated charge cycles used, for progress bars.
///
/// Clamped to 0-100 and rounded to one decimal place. A zero rating counts as
/// fully worn.
pub fn cycle_wear_percent(charge_cycles: u32, max_charge_cycles: u32) -> Decimal {
    if max_charge_cycles == 0 {
        return dec!(100);
    }
    let percent = Decimal::from(charge_cycles) / Decimal::from(max_charge_cycles) * dec!(100);
    round_money(percent.min(dec!(100)), 1)
}

/// Shortened battery id for display: first three characters, four
/// asterisks, last two characters (`BAT-101` becomes `BAT****01`).
pub fn mask_battery_id(battery_id: &str) -> String {
    let chars: Vec<char> = battery_id.chars().collect();
    let head: String = chars.iter().take(3).collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    format!("{}****{}", head, tail)
}

/// Consecutive calendar dates starting with `today`
pub fn next_available_dates(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    today.iter_days().take(days).collect()
}
