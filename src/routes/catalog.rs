//! Catalog listing route handlers

use axum::{extract::State, Json};
use chrono::Utc;

use crate::catalog::{self, BatteryFilter, BikeFilter, ServiceCenterFilter, SiteFilter};
use crate::error::{AppError, Result};
use crate::extract::{ApiPath, ApiQuery};
use crate::models::{Bike, ChargingStation, ServiceCenter, Warehouse};
use crate::pricing::calculators::{
    cycle_wear_percent, mask_battery_id, next_available_dates, parse_date,
    DEFAULT_MAX_CHARGE_CYCLES,
};
use crate::pricing::models::{PriceTier, UsageAdvice};
use crate::pricing::requests::{ServiceDatesQuery, SlotsQuery};
use crate::pricing::responses::{
    BatteryListing, FilterOptionsResponse, ServiceDatesResponse, SlotsResponse,
};
use crate::pricing::services::money;
use crate::AppState;

/// Longest date list the booking form may ask for
const MAX_SERVICE_DAYS: usize = 60;

/// Warehouses within the requested distance
pub async fn warehouses(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<SiteFilter>,
) -> Json<Vec<Warehouse>> {
    let matched = filter.warehouses(state.catalog.warehouses());
    Json(matched.into_iter().cloned().collect())
}

/// Batteries in one warehouse, priced
pub async fn batteries(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(filter): ApiQuery<BatteryFilter>,
) -> Result<Json<Vec<BatteryListing>>> {
    let warehouse = state
        .catalog
        .warehouse(id)
        .ok_or_else(|| AppError::NotFound(format!("Warehouse {}", id)))?;

    let listings = filter
        .apply(&warehouse.batteries)
        .into_iter()
        .map(|battery| {
            let tier = PriceTier::for_health(battery.health_percentage);
            BatteryListing {
                masked_id: mask_battery_id(&battery.id),
                tier,
                price: money(tier.price(), &state.config.currency),
                usage_advice: UsageAdvice::for_health(battery.health_percentage),
                cycle_wear_percent: cycle_wear_percent(
                    battery.charge_cycles,
                    DEFAULT_MAX_CHARGE_CYCLES,
                ),
                battery: battery.clone(),
            }
        })
        .collect();

    Ok(Json(listings))
}

pub async fn stations(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<SiteFilter>,
) -> Json<Vec<ChargingStation>> {
    let matched = filter.stations(state.catalog.stations());
    Json(matched.into_iter().cloned().collect())
}

pub async fn bikes(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(filter): ApiQuery<BikeFilter>,
) -> Result<Json<Vec<Bike>>> {
    let station = state
        .catalog
        .station(id)
        .ok_or_else(|| AppError::NotFound(format!("Charging station {}", id)))?;

    Ok(Json(
        filter
            .apply(&station.available_bikes)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

pub async fn service_centers(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ServiceCenterFilter>,
) -> Json<Vec<ServiceCenter>> {
    let matched = filter.apply(state.catalog.service_centers());
    Json(matched.into_iter().cloned().collect())
}

/// Slots a service center offers on one day
pub async fn slots(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(query): ApiQuery<SlotsQuery>,
) -> Result<Json<SlotsResponse>> {
    let center = state
        .catalog
        .service_center(id)
        .ok_or_else(|| AppError::NotFound(format!("Service center {}", id)))?;
    let date = parse_date(&query.date)?;

    Ok(Json(SlotsResponse {
        center_id: id,
        date,
        slots: catalog::available_slots(center, date),
    }))
}

/// Upcoming dates, starting today
pub async fn service_dates(
    ApiQuery(query): ApiQuery<ServiceDatesQuery>,
) -> Json<ServiceDatesResponse> {
    let today = Utc::now().date_naive();
    Json(ServiceDatesResponse {
        dates: next_available_dates(today, query.days.min(MAX_SERVICE_DAYS)),
    })
}

/// Model and service choices for the filter panels
pub async fn filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    Json(FilterOptionsResponse {
        battery_models: catalog::battery_models(state.catalog.warehouses()),
        bike_models: catalog::bike_models(state.catalog.stations()),
        service_types: catalog::service_types(state.catalog.service_centers()),
    })
}
