//! E-bike charging stations

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Rentable e-bike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    pub id: u32,
    pub model: String,
    /// State of charge, 0-100
    pub battery_level: u8,
}

/// Charging station holding rentable bikes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargingStation {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub distance_miles: f64,
    pub coordinates: Coordinates,
    pub available_bikes: Vec<Bike>,
}

impl ChargingStation {
    pub fn bike(&self, bike_id: u32) -> Option<&Bike> {
        self.available_bikes.iter().find(|b| b.id == bike_id)
    }
}
