//! Health check endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Liveness status
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: &'static str,
}

/// Per-model health
#[derive(Debug, Serialize)]
pub struct ModelHealthStatus {
    pub status: &'static str,
    pub healthy: usize,
    pub total: usize,
    pub models: HashMap<String, bool>,
}

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(health_check))
            .route("/models", web::get().to(model_health)),
    );
}

/// Basic health check endpoint
///
/// Reports that the service is up; does not contact any model.
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(ApiResponse::success(HealthStatus {
        status: "healthy",
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })))
}

/// Check every registered model once
async fn model_health(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Model health check requested");

    let models = state.router.health_check().await;
    let healthy = models.values().filter(|ok| **ok).count();
    let total = models.len();

    let status = match healthy {
        0 => "unhealthy",
        n if n == total => "healthy",
        _ => "degraded",
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(ModelHealthStatus {
        status,
        healthy,
        total,
        models,
    })))
}
