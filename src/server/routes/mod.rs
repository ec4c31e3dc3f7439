//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod ai;
pub mod health;

use crate::core::router::RouterError;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP status for a routing failure
pub fn router_error_status(error: &RouterError) -> StatusCode {
    match error {
        RouterError::Validation(_) => StatusCode::BAD_REQUEST,
        RouterError::Exhausted { .. } => StatusCode::BAD_GATEWAY,
        RouterError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Error envelope for a routing failure
pub fn router_error_response(error: &RouterError) -> HttpResponse {
    HttpResponse::build(router_error_status(error)).json(ApiResponse::<()>::error(error.to_string()))
}
