//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    /// Query string, path or body that could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Pricing(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Pricing(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::NotFound(what) => PricingErrorResponse {
                error_type: "not_found".to_string(),
                message: format!("{} not found", what),
            },
            AppError::BadRequest(reason) => {
                tracing::debug!("Rejected request: {}", reason);
                PricingErrorResponse {
                    error_type: "bad_request".to_string(),
                    message: reason.clone(),
                }
            }
            AppError::Pricing(e) => {
                tracing::debug!("Rejected booking input: {}", e);
                PricingErrorResponse {
                    error_type: e.error_type().to_string(),
                    message: e.to_string(),
                }
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                PricingErrorResponse {
                    error_type: "internal".to_string(),
                    message: "Internal error".to_string(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("Confirmation".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(PricingError::UnknownWarehouse(9)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(PricingError::InvalidDuration(0)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("missing field".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_response_status() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
