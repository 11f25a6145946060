//! Service centers and their bookable slots

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::pricing::models::ServiceType;

/// Slots offered on one calendar day, as `HH:MM` strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

/// Service center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCenter {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub distance_miles: f64,
    pub rating: f64,
    pub reviews: u32,
    pub services: Vec<ServiceType>,
    pub available_slots: Vec<DaySlots>,
    pub coordinates: Coordinates,
}

impl ServiceCenter {
    pub fn offers(&self, service: ServiceType) -> bool {
        self.services.contains(&service)
    }

    /// Slots offered on `date`; empty when the center has none that day
    pub fn slots_on(&self, date: NaiveDate) -> &[String] {
        self.available_slots
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.slots.as_slice())
            .unwrap_or(&[])
    }
}
