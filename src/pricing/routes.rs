//! Pricing and booking route handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::qr::qr_data_uri;
use crate::AppState;

use super::calculators::{self, HOURLY_RATE};
use super::models::{PriceTier, ReturnSchedule, UsageAdvice};
use super::requests::{
    BatteryAssessmentQuery, BatteryPriceQuery, BatterySwapRequest, BikeRentalRequest,
    RentalFareQuery, ReturnFareQuery, ReturnTimeQuery, ServiceBookingRequest, ServicePriceQuery,
};
use super::responses::{
    BatteryPriceResponse, ConfirmationResponse, RentalFareResponse, ServicePriceResponse,
};
use super::services::{
    self, money, BatteryAssessment, BookingDetails, Confirmation, ReturnFareQuote,
};

/// Pricing lookups, bookings and confirmations
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/battery", get(battery_price))
        .route("/api/pricing/rental", get(rental_fare))
        .route("/api/pricing/service", get(service_price))
        .route("/api/pricing/return-time", get(return_time))
        .route("/api/pricing/return-fare", get(return_fare))
        .route("/api/pricing/battery-assessment", get(battery_assessment))
        .route("/api/bookings/battery-swap", post(book_battery_swap))
        .route("/api/bookings/bike-rental", post(book_bike_rental))
        .route("/api/bookings/service", post(book_service))
        .route("/api/confirmations/:id", get(confirmation))
}

async fn battery_price(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BatteryPriceQuery>,
) -> Result<Json<BatteryPriceResponse>> {
    services::validate_health(query.health)?;

    Ok(Json(BatteryPriceResponse {
        health_percentage: query.health,
        tier: PriceTier::for_health(query.health),
        price: money(calculators::battery_price(query.health), &state.config.currency),
        usage_advice: UsageAdvice::for_health(query.health),
    }))
}

async fn rental_fare(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RentalFareQuery>,
) -> Result<Json<RentalFareResponse>> {
    services::validate_rental_hours(query.hours)?;

    let fare = calculators::rental_fare(Decimal::from(query.hours));
    Ok(Json(RentalFareResponse {
        hours: query.hours,
        hourly_rate: money(HOURLY_RATE, &state.config.currency),
        fare: money(fare, &state.config.currency),
    }))
}

/// Unknown service names price at zero and are flagged, not rejected
async fn service_price(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ServicePriceQuery>,
) -> Json<ServicePriceResponse> {
    let known = calculators::lookup_service_price(&query.service_type).is_some();
    let price = calculators::service_price(&query.service_type);

    Json(ServicePriceResponse {
        service_type: query.service_type,
        known,
        price: money(price, &state.config.currency),
    })
}

async fn return_time(
    ApiQuery(query): ApiQuery<ReturnTimeQuery>,
) -> Result<Json<ReturnSchedule>> {
    services::validate_rental_hours(query.hours)?;

    let schedule =
        calculators::derived_return_time(&query.pickup_date, &query.pickup_time, query.hours)?;
    Ok(Json(schedule))
}

/// Fare when the user picks a return time instead of a duration
async fn return_fare(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ReturnFareQuery>,
) -> Result<Json<ReturnFareQuote>> {
    let quote = services::quote_return_fare(
        &query.pickup_date,
        &query.pickup_time,
        &query.return_date,
        &query.return_time,
        &state.config.currency,
    )?;
    Ok(Json(quote))
}

async fn battery_assessment(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BatteryAssessmentQuery>,
) -> Result<Json<BatteryAssessment>> {
    let assessment = services::assess_battery(
        query.capacity_wh,
        query.current_capacity_wh,
        &state.config.currency,
    )?;
    Ok(Json(assessment))
}

async fn book_battery_swap(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BatterySwapRequest>,
) -> Result<(StatusCode, Json<ConfirmationResponse>)> {
    let quote = services::quote_battery_swap(
        state.catalog.as_ref(),
        request.warehouse_id,
        &request.battery_id,
        &state.config.currency,
    )?;

    confirm(&state, BookingDetails::BatterySwap(quote)).await
}

async fn book_bike_rental(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BikeRentalRequest>,
) -> Result<(StatusCode, Json<ConfirmationResponse>)> {
    let quote = services::quote_bike_rental(
        state.catalog.as_ref(),
        request.station_id,
        request.bike_id,
        &request.pickup_date,
        &request.pickup_time,
        request.hours,
        &state.config.currency,
    )?;

    confirm(&state, BookingDetails::BikeRental(quote)).await
}

async fn book_service(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ServiceBookingRequest>,
) -> Result<(StatusCode, Json<ConfirmationResponse>)> {
    let quote = services::quote_service_booking(
        state.catalog.as_ref(),
        request.center_id,
        &request.service_type,
        &request.date,
        &request.time,
        &state.config.currency,
    )?;

    confirm(&state, BookingDetails::ServiceBooking(quote)).await
}

async fn confirmation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ConfirmationResponse>> {
    let confirmation = state
        .cache
        .confirmation(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Confirmation {}", id)))?;

    Ok(Json(confirmation_response((*confirmation).clone())?))
}

/// Issue, cache and render a confirmation for a quoted booking
async fn confirm(
    state: &AppState,
    details: BookingDetails,
) -> Result<(StatusCode, Json<ConfirmationResponse>)> {
    let confirmation = {
        let mut rng = rand::thread_rng();
        services::checkout(details, &mut rng)
    };
    let stored = state.cache.store_confirmation(confirmation).await;

    Ok((
        StatusCode::CREATED,
        Json(confirmation_response((*stored).clone())?),
    ))
}

fn confirmation_response(confirmation: Confirmation) -> Result<ConfirmationResponse> {
    let qr_code = qr_data_uri(&confirmation.pin)?;
    Ok(ConfirmationResponse {
        confirmation,
        qr_code,
    })
}
