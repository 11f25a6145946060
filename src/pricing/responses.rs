//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Battery;

use super::models::{PriceTier, ServiceType, UsageAdvice};
use super::services::Confirmation;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Response for a battery price lookup
#[derive(Debug, Serialize)]
pub struct BatteryPriceResponse {
    pub health_percentage: i32,
    pub tier: PriceTier,
    pub price: MoneyResponse,
    pub usage_advice: UsageAdvice,
}

/// Response for a rental fare lookup
#[derive(Debug, Serialize)]
pub struct RentalFareResponse {
    pub hours: i64,
    pub hourly_rate: MoneyResponse,
    pub fare: MoneyResponse,
}

/// Response for a service price lookup
#[derive(Debug, Serialize)]
pub struct ServicePriceResponse {
    pub service_type: String,
    /// False when the name is not on the service menu (price is then 0)
    pub known: bool,
    pub price: MoneyResponse,
}

/// A battery as listed in a warehouse, with its swap price
#[derive(Debug, Serialize)]
pub struct BatteryListing {
    #[serde(flatten)]
    pub battery: Battery,
    pub masked_id: String,
    pub tier: PriceTier,
    pub price: MoneyResponse,
    pub usage_advice: UsageAdvice,
    #[serde(with = "rust_decimal::serde::str")]
    pub cycle_wear_percent: Decimal,
}

/// Slots offered by a service center on one day
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub center_id: u32,
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

/// Upcoming dates the booking form offers
#[derive(Debug, Serialize)]
pub struct ServiceDatesResponse {
    pub dates: Vec<NaiveDate>,
}

/// Choices for the filter panels
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub battery_models: Vec<String>,
    pub bike_models: Vec<String>,
    pub service_types: Vec<ServiceType>,
}

/// Issued confirmation with its PIN rendered as a QR code
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    #[serde(flatten)]
    pub confirmation: Confirmation,
    /// `data:image/png;base64,...`
    pub qr_code: String,
}

/// Liveness probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache: CacheStats,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
