//! List filters applied to catalog entries.
//!
//! Each filter borrows from the catalog and returns the matching subset in
//! catalog order. An unset bound or an empty list matches everything.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::models::{Battery, Bike, ChargingStation, ServiceCenter, Warehouse};
use crate::pricing::models::ServiceType;

/// Accepts `a,b,c` in a query string as a list; blanks are dropped
fn comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

/// Distance filter shared by warehouses and bike stations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteFilter {
    /// Miles
    pub max_distance: Option<f64>,
}

impl SiteFilter {
    fn accepts(&self, distance_miles: f64) -> bool {
        self.max_distance.map_or(true, |max| distance_miles <= max)
    }

    pub fn warehouses<'a>(&self, warehouses: &'a [Warehouse]) -> Vec<&'a Warehouse> {
        warehouses
            .iter()
            .filter(|w| self.accepts(w.distance_miles))
            .collect()
    }

    pub fn stations<'a>(&self, stations: &'a [ChargingStation]) -> Vec<&'a ChargingStation> {
        stations
            .iter()
            .filter(|s| self.accepts(s.distance_miles))
            .collect()
    }
}

/// Battery filter for one warehouse
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatteryFilter {
    pub min_health: Option<i32>,
    pub min_range_km: Option<i32>,
    #[serde(default, deserialize_with = "comma_separated")]
    pub models: Vec<String>,
}

impl BatteryFilter {
    pub fn matches(&self, battery: &Battery) -> bool {
        let health_match = self
            .min_health
            .map_or(true, |min| battery.health_percentage >= min);
        let range_match = self
            .min_range_km
            .map_or(true, |min| battery.estimated_range_km >= min);
        let model_match = self.models.is_empty() || self.models.contains(&battery.model);
        health_match && range_match && model_match
    }

    pub fn apply<'a>(&self, batteries: &'a [Battery]) -> Vec<&'a Battery> {
        batteries.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Bike filter for one station
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BikeFilter {
    pub min_battery_level: Option<u8>,
    #[serde(default, deserialize_with = "comma_separated")]
    pub models: Vec<String>,
}

impl BikeFilter {
    pub fn matches(&self, bike: &Bike) -> bool {
        let level_match = self
            .min_battery_level
            .map_or(true, |min| bike.battery_level >= min);
        let model_match = self.models.is_empty() || self.models.contains(&bike.model);
        level_match && model_match
    }

    pub fn apply<'a>(&self, bikes: &'a [Bike]) -> Vec<&'a Bike> {
        bikes.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Service center filter.
///
/// A center matches the service list when it offers at least one of the
/// requested services.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceCenterFilter {
    pub max_distance: Option<f64>,
    pub min_rating: Option<f64>,
    #[serde(default, deserialize_with = "comma_separated")]
    pub services: Vec<String>,
}

impl ServiceCenterFilter {
    pub fn matches(&self, center: &ServiceCenter) -> bool {
        let distance_match = self
            .max_distance
            .map_or(true, |max| center.distance_miles <= max);
        let rating_match = self.min_rating.map_or(true, |min| center.rating >= min);
        let service_match = self.services.is_empty()
            || center
                .services
                .iter()
                .any(|offered| self.services.iter().any(|s| s == offered.name()));
        distance_match && rating_match && service_match
    }

    pub fn apply<'a>(&self, centers: &'a [ServiceCenter]) -> Vec<&'a ServiceCenter> {
        centers.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Slots a center offers on `date`
pub fn available_slots(center: &ServiceCenter, date: NaiveDate) -> Vec<String> {
    center.slots_on(date).to_vec()
}

/// Sorted, de-duplicated battery models across all warehouses
pub fn battery_models(warehouses: &[Warehouse]) -> Vec<String> {
    warehouses
        .iter()
        .flat_map(|w| w.batteries.iter().map(|b| b.model.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn bike_models(stations: &[ChargingStation]) -> Vec<String> {
    stations
        .iter()
        .flat_map(|s| s.available_bikes.iter().map(|b| b.model.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Services offered anywhere, sorted by name
pub fn service_types(centers: &[ServiceCenter]) -> Vec<ServiceType> {
    let mut services: Vec<ServiceType> = centers
        .iter()
        .flat_map(|c| c.services.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    services.sort_by_key(|s| s.name());
    services
}
