//! Catalog of swap warehouses, bike stations and service centers.
//!
//! The catalog is read-only. Callers receive it through the [`Catalog`]
//! trait so a database-backed source can replace the fixtures without
//! touching the pricing code.

pub mod filters;
mod fixtures;

pub use filters::{
    available_slots, battery_models, bike_models, service_types, BatteryFilter, BikeFilter,
    ServiceCenterFilter, SiteFilter,
};

use crate::models::{ChargingStation, ServiceCenter, Warehouse};

/// Read access to catalog entries
pub trait Catalog: Send + Sync {
    fn warehouses(&self) -> &[Warehouse];

    fn stations(&self) -> &[ChargingStation];

    fn service_centers(&self) -> &[ServiceCenter];

    fn warehouse(&self, id: u32) -> Option<&Warehouse> {
        self.warehouses().iter().find(|w| w.id == id)
    }

    fn station(&self, id: u32) -> Option<&ChargingStation> {
        self.stations().iter().find(|s| s.id == id)
    }

    fn service_center(&self, id: u32) -> Option<&ServiceCenter> {
        self.service_centers().iter().find(|c| c.id == id)
    }
}

/// In-memory catalog built once at start-up
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    pub warehouses: Vec<Warehouse>,
    pub stations: Vec<ChargingStation>,
    pub service_centers: Vec<ServiceCenter>,
}

impl StaticCatalog {
    /// The EcoSwap launch network
    pub fn fixtures() -> Self {
        Self {
            warehouses: fixtures::warehouses(),
            stations: fixtures::stations(),
            service_centers: fixtures::service_centers(),
        }
    }
}

impl Catalog for StaticCatalog {
    fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    fn stations(&self) -> &[ChargingStation] {
        &self.stations
    }

    fn service_centers(&self) -> &[ServiceCenter] {
        &self.service_centers
    }
}
