//! Booking services.
//!
//! These functions look up catalog entries, validate what the UI sends and
//! combine the calculators into quotes and confirmations for the three
//! booking flows: battery swap, bike rental and service booking.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::{Battery, Bike};

use super::calculators::{
    self, estimated_range_km, health_from_capacity, km_to_miles, mask_battery_id, parse_date,
    parse_time, price_tier, rental_fare, rental_hours_between, short_trip_limit_km,
    usage_advice, HOURLY_RATE,
};
use super::errors::PricingError;
use super::models::{PriceTier, ServiceType, UsageAdvice};
use super::responses::MoneyResponse;

/// Longest rental the booking flow accepts, in hours
pub const MAX_RENTAL_HOURS: i64 = 24;

/// Health percentages outside 0-100 are rejected
pub fn validate_health(health_percentage: i32) -> Result<(), PricingError> {
    if (0..=100).contains(&health_percentage) {
        Ok(())
    } else {
        Err(PricingError::InvalidHealth(health_percentage))
    }
}

/// Rentals run from 1 to 24 whole hours
pub fn validate_rental_hours(hours: i64) -> Result<(), PricingError> {
    if (1..=MAX_RENTAL_HOURS).contains(&hours) {
        Ok(())
    } else {
        Err(PricingError::InvalidDuration(hours))
    }
}

pub(crate) fn money(amount: Decimal, currency: &str) -> MoneyResponse {
    MoneyResponse {
        amount,
        currency: currency.to_string(),
    }
}

/// Quote for swapping in a specific battery
#[derive(Debug, Clone, Serialize)]
pub struct BatterySwapQuote {
    pub warehouse_id: u32,
    pub warehouse_name: String,
    pub battery: Battery,
    pub masked_battery_id: String,
    pub tier: PriceTier,
    pub price: MoneyResponse,
    pub usage_advice: UsageAdvice,
    pub estimated_range_miles: i32,
    /// Only set for limited-use batteries
    pub short_trip_limit_km: Option<i32>,
}

/// Health and price derived from a battery's measured capacity
#[derive(Debug, Clone, Serialize)]
pub struct BatteryAssessment {
    pub health_percentage: i32,
    pub estimated_range_km: i32,
    pub estimated_range_miles: i32,
    pub tier: PriceTier,
    pub price: MoneyResponse,
    pub usage_advice: UsageAdvice,
    /// Only set for limited-use batteries
    pub short_trip_limit_km: Option<i32>,
}

/// Quote for renting a bike
#[derive(Debug, Clone, Serialize)]
pub struct BikeRentalQuote {
    pub station_id: u32,
    pub station_name: String,
    pub bike: Bike,
    pub pickup_date: String,
    pub pickup_time: String,
    pub hours: i64,
    pub hourly_rate: MoneyResponse,
    pub fare: MoneyResponse,
    pub return_date: String,
    pub return_time: String,
}

/// Fare for a rental billed up to a chosen return time
#[derive(Debug, Clone, Serialize)]
pub struct ReturnFareQuote {
    pub hours: i64,
    pub hourly_rate: MoneyResponse,
    pub fare: MoneyResponse,
}

/// Quote for a service appointment
#[derive(Debug, Clone, Serialize)]
pub struct ServiceBookingQuote {
    pub center_id: u32,
    pub center_name: String,
    pub service: ServiceType,
    pub date: String,
    pub time: String,
    pub price: MoneyResponse,
}

/// What a confirmation was issued for
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingDetails {
    BatterySwap(BatterySwapQuote),
    BikeRental(BikeRentalQuote),
    ServiceBooking(ServiceBookingQuote),
}

impl BookingDetails {
    /// Amount charged for the booking
    pub fn amount(&self) -> &MoneyResponse {
        match self {
            BookingDetails::BatterySwap(quote) => &quote.price,
            BookingDetails::BikeRental(quote) => &quote.fare,
            BookingDetails::ServiceBooking(quote) => &quote.price,
        }
    }
}

/// Completed booking with its collection PIN
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub id: Uuid,
    pub pin: String,
    pub amount: MoneyResponse,
    pub issued_at: DateTime<Utc>,
    pub details: BookingDetails,
}

/// Price a battery swap for one battery in one warehouse.
///
/// The battery is copied into the quote so the price stays tied to the
/// snapshot it was computed from.
pub fn quote_battery_swap(
    catalog: &dyn Catalog,
    warehouse_id: u32,
    battery_id: &str,
    currency: &str,
) -> Result<BatterySwapQuote, PricingError> {
    let warehouse = catalog
        .warehouse(warehouse_id)
        .ok_or(PricingError::UnknownWarehouse(warehouse_id))?;

    let battery = warehouse
        .battery(battery_id)
        .cloned()
        .ok_or_else(|| PricingError::UnknownBattery {
            warehouse_id,
            battery_id: battery_id.to_string(),
        })?;

    validate_health(battery.health_percentage)?;

    let tier = price_tier(battery.health_percentage);
    let advice = usage_advice(battery.health_percentage);
    let short_trip = short_trip_for(advice, battery.estimated_range_km);

    tracing::debug!(
        "Quoted battery {} at warehouse {}: {:?} tier",
        battery.id,
        warehouse_id,
        tier
    );

    Ok(BatterySwapQuote {
        warehouse_id,
        warehouse_name: warehouse.name.clone(),
        masked_battery_id: mask_battery_id(&battery.id),
        tier,
        price: money(tier.price(), currency),
        usage_advice: advice,
        estimated_range_miles: km_to_miles(battery.estimated_range_km),
        short_trip_limit_km: short_trip,
        battery,
    })
}

/// Price a bike rental and work out when the bike is due back.
pub fn quote_bike_rental(
    catalog: &dyn Catalog,
    station_id: u32,
    bike_id: u32,
    pickup_date: &str,
    pickup_time: &str,
    hours: i64,
    currency: &str,
) -> Result<BikeRentalQuote, PricingError> {
    validate_rental_hours(hours)?;

    let station = catalog
        .station(station_id)
        .ok_or(PricingError::UnknownStation(station_id))?;

    let bike = station
        .bike(bike_id)
        .cloned()
        .ok_or(PricingError::UnknownBike { station_id, bike_id })?;

    let schedule = calculators::derived_return_time(pickup_date, pickup_time, hours)?;
    let fare = rental_fare(Decimal::from(hours));

    tracing::debug!(
        "Quoted bike {} at station {} for {}h: {}",
        bike_id,
        station_id,
        hours,
        fare
    );

    Ok(BikeRentalQuote {
        station_id,
        station_name: station.name.clone(),
        bike,
        pickup_date: pickup_date.to_string(),
        pickup_time: pickup_time.to_string(),
        hours,
        hourly_rate: money(HOURLY_RATE, currency),
        fare: money(fare, currency),
        return_date: schedule.return_date,
        return_time: schedule.return_time,
    })
}

/// Bill a rental up to a chosen return date and time.
///
/// Partial hours round up and a return at or before pickup bills one hour.
/// The billed length must still fall within 1-24 hours.
pub fn quote_return_fare(
    pickup_date: &str,
    pickup_time: &str,
    return_date: &str,
    return_time: &str,
    currency: &str,
) -> Result<ReturnFareQuote, PricingError> {
    let pickup = parse_date(pickup_date)?.and_time(parse_time(pickup_time)?);
    let returned = parse_date(return_date)?.and_time(parse_time(return_time)?);

    let hours = rental_hours_between(pickup, returned);
    validate_rental_hours(hours)?;

    Ok(ReturnFareQuote {
        hours,
        hourly_rate: money(HOURLY_RATE, currency),
        fare: money(rental_fare(Decimal::from(hours)), currency),
    })
}

/// Derive health, range and swap price from rated and current capacity.
pub fn assess_battery(
    capacity_wh: Decimal,
    current_capacity_wh: Decimal,
    currency: &str,
) -> Result<BatteryAssessment, PricingError> {
    let invalid = || PricingError::InvalidCapacity {
        capacity_wh,
        current_capacity_wh,
    };
    if capacity_wh.is_sign_negative() || current_capacity_wh.is_sign_negative() {
        return Err(invalid());
    }

    let health = health_from_capacity(capacity_wh, current_capacity_wh).ok_or_else(invalid)?;
    validate_health(health)?;
    let range_km = estimated_range_km(current_capacity_wh, health).ok_or_else(invalid)?;

    let tier = price_tier(health);
    let advice = usage_advice(health);

    Ok(BatteryAssessment {
        health_percentage: health,
        estimated_range_km: range_km,
        estimated_range_miles: km_to_miles(range_km),
        tier,
        price: money(tier.price(), currency),
        usage_advice: advice,
        short_trip_limit_km: short_trip_for(advice, range_km),
    })
}

fn short_trip_for(advice: UsageAdvice, estimated_range_km: i32) -> Option<i32> {
    match advice {
        UsageAdvice::LimitedUse => Some(short_trip_limit_km(estimated_range_km)),
        _ => None,
    }
}

/// Price a service appointment in one of the center's offered slots.
pub fn quote_service_booking(
    catalog: &dyn Catalog,
    center_id: u32,
    service_type: &str,
    date: &str,
    time: &str,
    currency: &str,
) -> Result<ServiceBookingQuote, PricingError> {
    let center = catalog
        .service_center(center_id)
        .ok_or(PricingError::UnknownServiceCenter(center_id))?;

    let service: ServiceType = service_type.parse()?;
    if !center.offers(service) {
        return Err(PricingError::ServiceNotOffered { center_id, service });
    }

    let day = parse_date(date)?;
    parse_time(time)?;
    if !center.slots_on(day).iter().any(|slot| slot == time) {
        return Err(PricingError::SlotUnavailable {
            center_id,
            date: date.to_string(),
            time: time.to_string(),
        });
    }

    Ok(ServiceBookingQuote {
        center_id,
        center_name: center.name.clone(),
        service,
        date: date.to_string(),
        time: time.to_string(),
        price: money(service.price(), currency),
    })
}

/// Issue a confirmation with a fresh PIN for a quoted booking.
pub fn checkout<R: Rng>(details: BookingDetails, rng: &mut R) -> Confirmation {
    let confirmation = Confirmation {
        id: Uuid::new_v4(),
        pin: calculators::random_confirmation_code(rng),
        amount: details.amount().clone(),
        issued_at: Utc::now(),
        details,
    };

    tracing::info!(
        "Issued confirmation {} for {} {}",
        confirmation.id,
        confirmation.amount.amount,
        confirmation.amount.currency
    );

    confirmation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    fn catalog() -> StaticCatalog {
        StaticCatalog::fixtures()
    }

    #[test]
    fn test_validation_bounds() {
        assert!(validate_health(0).is_ok());
        assert!(validate_health(100).is_ok());
        assert_eq!(validate_health(-1), Err(PricingError::InvalidHealth(-1)));
        assert!(validate_rental_hours(1).is_ok());
        assert!(validate_rental_hours(MAX_RENTAL_HOURS).is_ok());
        assert_eq!(validate_rental_hours(-3), Err(PricingError::InvalidDuration(-3)));
    }

    // ==================== battery swap ====================

    #[test]
    fn test_quote_battery_swap_premium() {
        let quote = quote_battery_swap(&catalog(), 1, "BAT-101", "INR").unwrap();
        assert_eq!(quote.tier, PriceTier::Premium);
        assert_eq!(quote.price.amount, dec!(2625));
        assert_eq!(quote.price.currency, "INR");
        assert_eq!(quote.masked_battery_id, "BAT****01");
        assert_eq!(quote.usage_advice, UsageAdvice::Unrestricted);
        assert_eq!(quote.estimated_range_miles, 152);
        assert_eq!(quote.short_trip_limit_km, None);
        assert_eq!(quote.warehouse_name, "EcoSwap Central");
    }

    #[test]
    fn test_quote_battery_swap_limited_use() {
        let quote = quote_battery_swap(&catalog(), 1, "BAT-104", "INR").unwrap();
        assert_eq!(quote.tier, PriceTier::Economy);
        assert_eq!(quote.price.amount, dec!(1125));
        assert_eq!(quote.usage_advice, UsageAdvice::LimitedUse);
        assert_eq!(quote.short_trip_limit_km, Some(170));
    }

    #[test]
    fn test_quote_battery_swap_retire_advice() {
        let quote = quote_battery_swap(&catalog(), 2, "BAT-203", "INR").unwrap();
        assert_eq!(quote.usage_advice, UsageAdvice::Retire);
        assert_eq!(quote.short_trip_limit_km, None);
    }

    #[test]
    fn test_quote_battery_swap_boundary_health() {
        // BAT-202 sits exactly on the premium threshold
        let quote = quote_battery_swap(&catalog(), 2, "BAT-202", "INR").unwrap();
        assert_eq!(quote.tier, PriceTier::Premium);
    }

    #[test]
    fn test_quote_battery_swap_unknown_ids() {
        assert_eq!(
            quote_battery_swap(&catalog(), 99, "BAT-101", "INR").unwrap_err(),
            PricingError::UnknownWarehouse(99)
        );
        // Battery exists, but in another warehouse
        assert!(matches!(
            quote_battery_swap(&catalog(), 2, "BAT-101", "INR"),
            Err(PricingError::UnknownBattery { warehouse_id: 2, .. })
        ));
    }

    #[test]
    fn test_quote_battery_swap_rejects_bad_health() {
        let mut catalog = catalog();
        catalog.warehouses[0].batteries[0].health_percentage = 130;
        assert_eq!(
            quote_battery_swap(&catalog, 1, "BAT-101", "INR").unwrap_err(),
            PricingError::InvalidHealth(130)
        );
    }

    // ==================== bike rental ====================

    #[test]
    fn test_quote_bike_rental() {
        let quote =
            quote_bike_rental(&catalog(), 1, 101, "2023-12-05", "23:30", 2, "INR").unwrap();
        assert_eq!(quote.fare.amount, dec!(1500));
        assert_eq!(quote.hourly_rate.amount, dec!(750));
        assert_eq!(quote.return_date, "2023-12-06");
        assert_eq!(quote.return_time, "01:30");
        assert_eq!(quote.bike.model, "Urban Cruiser");
    }

    #[test]
    fn test_quote_bike_rental_duration_bounds() {
        let c = catalog();
        assert!(quote_bike_rental(&c, 1, 101, "2023-10-15", "10:00", 1, "INR").is_ok());
        assert!(quote_bike_rental(&c, 1, 101, "2023-10-15", "10:00", 24, "INR").is_ok());
        assert_eq!(
            quote_bike_rental(&c, 1, 101, "2023-10-15", "10:00", 0, "INR").unwrap_err(),
            PricingError::InvalidDuration(0)
        );
        assert_eq!(
            quote_bike_rental(&c, 1, 101, "2023-10-15", "10:00", 25, "INR").unwrap_err(),
            PricingError::InvalidDuration(25)
        );
    }

    #[test]
    fn test_quote_bike_rental_unknown_bike() {
        assert_eq!(
            quote_bike_rental(&catalog(), 2, 101, "2023-10-15", "10:00", 2, "INR").unwrap_err(),
            PricingError::UnknownBike {
                station_id: 2,
                bike_id: 101
            }
        );
        assert_eq!(
            quote_bike_rental(&catalog(), 7, 101, "2023-10-15", "10:00", 2, "INR").unwrap_err(),
            PricingError::UnknownStation(7)
        );
    }

    #[test]
    fn test_quote_bike_rental_bad_time() {
        assert!(matches!(
            quote_bike_rental(&catalog(), 1, 101, "2023-10-15", "noon", 2, "INR"),
            Err(PricingError::InvalidDateTime { .. })
        ));
    }

    // ==================== service booking ====================

    #[test]
    fn test_quote_service_booking() {
        let quote =
            quote_service_booking(&catalog(), 1, "General Service", "2023-10-15", "11:30", "INR")
                .unwrap();
        assert_eq!(quote.service, ServiceType::GeneralService);
        assert_eq!(quote.price.amount, dec!(1500));
        assert_eq!(quote.center_name, "EcoBike Service Hub");
    }

    #[test]
    fn test_quote_service_booking_rejects_unknown_service() {
        assert_eq!(
            quote_service_booking(&catalog(), 1, "unknown-xyz", "2023-10-15", "11:30", "INR")
                .unwrap_err(),
            PricingError::UnknownServiceType("unknown-xyz".to_string())
        );
    }

    #[test]
    fn test_quote_service_booking_service_not_offered() {
        assert_eq!(
            quote_service_booking(&catalog(), 3, "General Service", "2023-10-15", "09:30", "INR")
                .unwrap_err(),
            PricingError::ServiceNotOffered {
                center_id: 3,
                service: ServiceType::GeneralService
            }
        );
    }

    #[test]
    fn test_quote_service_booking_slot_unavailable() {
        assert!(matches!(
            quote_service_booking(&catalog(), 1, "General Service", "2023-10-15", "10:00", "INR"),
            Err(PricingError::SlotUnavailable { center_id: 1, .. })
        ));
        // No slots at all on this date
        assert!(matches!(
            quote_service_booking(&catalog(), 1, "General Service", "2023-11-01", "09:00", "INR"),
            Err(PricingError::SlotUnavailable { .. })
        ));
    }

    // ==================== checkout ====================

    #[test]
    fn test_quote_return_fare_rounds_partial_hours_up() {
        let quote = quote_return_fare("2023-10-15", "10:00", "2023-10-15", "12:10", "INR").unwrap();
        assert_eq!(quote.hours, 3);
        assert_eq!(quote.fare.amount, dec!(2250));
        assert_eq!(quote.hourly_rate.amount, dec!(750));
    }

    #[test]
    fn test_quote_return_fare_across_midnight() {
        let quote = quote_return_fare("2023-12-31", "22:30", "2024-01-01", "01:30", "INR").unwrap();
        assert_eq!(quote.hours, 3);
    }

    #[test]
    fn test_quote_return_fare_early_return_bills_one_hour() {
        let quote = quote_return_fare("2023-10-15", "10:00", "2023-10-15", "09:00", "INR").unwrap();
        assert_eq!(quote.hours, 1);
        assert_eq!(quote.fare.amount, dec!(750));
    }

    #[test]
    fn test_quote_return_fare_limits() {
        assert_eq!(
            quote_return_fare("2023-10-15", "10:00", "2023-10-16", "10:01", "INR").unwrap_err(),
            PricingError::InvalidDuration(25)
        );
        assert!(matches!(
            quote_return_fare("2023-10-15", "10:00", "tomorrow", "10:00", "INR"),
            Err(PricingError::InvalidDateTime { .. })
        ));
    }

    #[test]
    fn test_assess_battery() {
        let assessment = assess_battery(dec!(5000), dec!(4600), "INR").unwrap();
        assert_eq!(assessment.health_percentage, 92);
        assert_eq!(assessment.estimated_range_km, 21160);
        assert_eq!(assessment.tier, PriceTier::Premium);
        assert_eq!(assessment.price.amount, dec!(2625));
        assert_eq!(assessment.short_trip_limit_km, None);
    }

    #[test]
    fn test_assess_battery_limited_use() {
        let assessment = assess_battery(dec!(100), dec!(60), "INR").unwrap();
        assert_eq!(assessment.health_percentage, 60);
        assert_eq!(assessment.estimated_range_km, 180);
        assert_eq!(assessment.usage_advice, UsageAdvice::LimitedUse);
        assert_eq!(assessment.short_trip_limit_km, Some(126));
        assert_eq!(assessment.estimated_range_miles, 112);
    }

    #[test]
    fn test_assess_battery_rejects_bad_capacity() {
        assert!(matches!(
            assess_battery(dec!(0), dec!(60), "INR"),
            Err(PricingError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            assess_battery(dec!(-100), dec!(-60), "INR"),
            Err(PricingError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            assess_battery(dec!(0.0001), Decimal::MAX, "INR"),
            Err(PricingError::InvalidCapacity { .. })
        ));
        assert_eq!(
            assess_battery(dec!(100), dec!(150), "INR").unwrap_err(),
            PricingError::InvalidHealth(150)
        );
    }

    #[test]
    fn test_checkout_carries_amount_and_pin() {
        let quote = quote_battery_swap(&catalog(), 3, "BAT-304", "INR").unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let confirmation = checkout(BookingDetails::BatterySwap(quote), &mut rng);

        assert_eq!(confirmation.amount.amount, dec!(1875));
        assert_eq!(confirmation.pin.len(), 6);
        assert!(matches!(confirmation.details, BookingDetails::BatterySwap(_)));
    }

    #[test]
    fn test_checkout_issues_distinct_ids() {
        let quote =
            quote_service_booking(&catalog(), 4, "Diagnostic Check", "2023-10-16", "12:00", "INR")
                .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let first = checkout(BookingDetails::ServiceBooking(quote.clone()), &mut rng);
        let second = checkout(BookingDetails::ServiceBooking(quote), &mut rng);

        assert_ne!(first.id, second.id);
        assert_eq!(first.amount.amount, dec!(750));
    }

    #[test]
    fn test_booking_details_serialize_tagged() {
        let quote =
            quote_bike_rental(&catalog(), 3, 304, "2023-10-15", "08:00", 3, "INR").unwrap();
        let json = serde_json::to_value(BookingDetails::BikeRental(quote)).unwrap();
        assert_eq!(json["type"], "bike_rental");
        assert_eq!(json["fare"]["amount"], "2250");
        assert_eq!(json["return_time"], "11:00");
    }
}
