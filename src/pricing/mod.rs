//! Pricing engine module for EcoSwap.
//!
//! Prices battery swaps, bike rentals and service bookings, and derives the
//! booking state the pages display (return times, PINs, battery advice).

pub mod calculators;
pub mod errors;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    battery_price, derived_return_time, generate_pin, random_confirmation_code, rental_fare,
    round_money, service_price,
};
pub use routes::router;
pub use errors::PricingError;
pub use services::{BookingDetails, Confirmation};
