//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Query for a battery price lookup
#[derive(Debug, Deserialize)]
pub struct BatteryPriceQuery {
    pub health: i32,
}

/// Query for a rental fare lookup
#[derive(Debug, Deserialize)]
pub struct RentalFareQuery {
    pub hours: i64,
}

/// Query for a service price lookup
#[derive(Debug, Deserialize)]
pub struct ServicePriceQuery {
    pub service_type: String,
}

/// Query for the derived return time of a rental
#[derive(Debug, Deserialize)]
pub struct ReturnTimeQuery {
    pub pickup_date: String,
    pub pickup_time: String,
    pub hours: i64,
}

/// Query for billing a rental up to a chosen return
#[derive(Debug, Deserialize)]
pub struct ReturnFareQuery {
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
}

/// Capacity readings for a battery assessment, in watt-hours
#[derive(Debug, Deserialize)]
pub struct BatteryAssessmentQuery {
    #[serde(with = "rust_decimal::serde::str")]
    pub capacity_wh: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub current_capacity_wh: Decimal,
}

/// Query for a service center's slots on one day
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

/// Query for upcoming booking dates
#[derive(Debug, Deserialize)]
pub struct ServiceDatesQuery {
    #[serde(default = "default_days")]
    pub days: usize,
}

fn default_days() -> usize {
    7
}

/// Request to book a battery swap
#[derive(Debug, Deserialize)]
pub struct BatterySwapRequest {
    pub warehouse_id: u32,
    pub battery_id: String,
}

/// Request to book a bike rental
#[derive(Debug, Deserialize)]
pub struct BikeRentalRequest {
    pub station_id: u32,
    pub bike_id: u32,
    pub pickup_date: String,
    pub pickup_time: String,
    pub hours: i64,
}

/// Request to book a service appointment
#[derive(Debug, Deserialize)]
pub struct ServiceBookingRequest {
    pub center_id: u32,
    pub service_type: String,
    pub date: String,
    pub time: String,
}
