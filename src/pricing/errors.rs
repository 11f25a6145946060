//! Errors raised while pricing and booking.

use rust_decimal::Decimal;

use super::models::ServiceType;

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Warehouse {0} not found")]
    UnknownWarehouse(u32),

    #[error("Battery {battery_id} not found at warehouse {warehouse_id}")]
    UnknownBattery { warehouse_id: u32, battery_id: String },

    #[error("Charging station {0} not found")]
    UnknownStation(u32),

    #[error("Bike {bike_id} not found at station {station_id}")]
    UnknownBike { station_id: u32, bike_id: u32 },

    #[error("Service center {0} not found")]
    UnknownServiceCenter(u32),

    #[error("Unknown service type '{0}'")]
    UnknownServiceType(String),

    #[error("{service} is not offered at service center {center_id}")]
    ServiceNotOffered { center_id: u32, service: ServiceType },

    #[error("Slot {date} {time} is not available at service center {center_id}")]
    SlotUnavailable {
        center_id: u32,
        date: String,
        time: String,
    },

    #[error("Health percentage {0} is outside 0-100")]
    InvalidHealth(i32),

    #[error("Rental duration of {0} hours is outside 1-24")]
    InvalidDuration(i64),

    #[error("Cannot assess {current_capacity_wh} Wh remaining of {capacity_wh} Wh")]
    InvalidCapacity {
        capacity_wh: Decimal,
        current_capacity_wh: Decimal,
    },

    #[error("Invalid date/time '{value}', expected {expected}")]
    InvalidDateTime { value: String, expected: &'static str },

    #[error("Return time is out of calendar range")]
    DateOutOfRange,
}

impl PricingError {
    /// Stable machine-readable identifier for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::UnknownWarehouse(_) => "unknown_warehouse",
            PricingError::UnknownBattery { .. } => "unknown_battery",
            PricingError::UnknownStation(_) => "unknown_station",
            PricingError::UnknownBike { .. } => "unknown_bike",
            PricingError::UnknownServiceCenter(_) => "unknown_service_center",
            PricingError::UnknownServiceType(_) => "unknown_service_type",
            PricingError::ServiceNotOffered { .. } => "service_not_offered",
            PricingError::SlotUnavailable { .. } => "slot_unavailable",
            PricingError::InvalidHealth(_) => "invalid_health",
            PricingError::InvalidDuration(_) => "invalid_duration",
            PricingError::InvalidCapacity { .. } => "invalid_capacity",
            PricingError::InvalidDateTime { .. } => "invalid_date_time",
            PricingError::DateOutOfRange => "date_out_of_range",
        }
    }

    /// Whether the error names a catalog entry that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PricingError::UnknownWarehouse(_)
                | PricingError::UnknownBattery { .. }
                | PricingError::UnknownStation(_)
                | PricingError::UnknownBike { .. }
                | PricingError::UnknownServiceCenter(_)
        )
    }
}
