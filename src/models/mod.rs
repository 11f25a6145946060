//! Catalog entities: battery warehouses, bike stations and service centers

mod battery;
mod service_center;
mod station;

pub use battery::{Battery, Warehouse};
pub use service_center::{DaySlots, ServiceCenter};
pub use station::{Bike, ChargingStation};

use serde::{Deserialize, Serialize};

/// Map position of a site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
