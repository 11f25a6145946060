//! Request extractors that reject with the API's JSON error body.
//!
//! Thin wrappers over axum's `Query`, `Path` and `Json` so malformed input
//! comes back as `{error_type, message}` like every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Query string extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// JSON body extractor
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
