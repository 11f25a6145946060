//! Swappable batteries and the warehouses that stock them

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A battery available for swapping.
///
/// Batteries are handed to the pricing code by value, so a quote keeps the
/// snapshot it was priced from even if the catalog entry changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
    pub id: String,
    pub model: String,
    pub health_percentage: i32,
    pub estimated_range_km: i32,
    pub charge_cycles: u32,
}

impl Battery {
    pub fn new(
        id: &str,
        model: &str,
        health_percentage: i32,
        estimated_range_km: i32,
        charge_cycles: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            model: model.to_string(),
            health_percentage,
            estimated_range_km,
            charge_cycles,
        }
    }
}

/// Battery warehouse (swap location)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: u32,
    pub name: String,
    pub address: String,
    /// Distance from the user in miles
    pub distance_miles: f64,
    pub coordinates: Coordinates,
    pub batteries: Vec<Battery>,
}

impl Warehouse {
    pub fn battery(&self, battery_id: &str) -> Option<&Battery> {
        self.batteries.iter().find(|b| b.id == battery_id)
    }
}
