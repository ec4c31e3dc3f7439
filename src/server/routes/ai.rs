//! Routing API endpoints

use crate::core::types::RouteContext;
use crate::server::AppState;
use crate::server::routes::{ApiResponse, router_error_response};
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Body of `POST /v1/route`
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Prompt to execute
    pub prompt: String,
    /// Optional selection signals
    #[serde(default)]
    pub context: RouteContext,
}

/// Configure routing API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .route("/route", web::post().to(route))
            .route("/models", web::get().to(list_models))
            .route("/models/{model_id}", web::get().to(get_model))
            .route("/cache", web::delete().to(clear_cache))
            .route("/cache/stats", web::get().to(cache_stats)),
    );
}

/// Route a prompt to a model
async fn route(
    state: web::Data<AppState>,
    request: web::Json<RouteRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    match state.router.route(&request.prompt, &request.context).await {
        Ok(response) => {
            debug!(
                "Routed request served by {} (cached: {})",
                response.model, response.cached
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
        }
        Err(e) => {
            warn!("Routing failed: {}", e);
            Ok(router_error_response(&e))
        }
    }
}

/// List registered models
async fn list_models(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.router.available_models())))
}

/// Get one model's configuration
async fn get_model(
    state: web::Data<AppState>,
    model_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    debug!("Getting model info for: {}", model_id);

    match state.router.model_config(&model_id) {
        Some(model) => Ok(HttpResponse::Ok().json(ApiResponse::success(model))),
        None => Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("Model not found: {}", model_id)))),
    }
}

/// Drop all cached and in-flight entries
async fn clear_cache(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    state.router.clear_cache();
    info!("Cache cleared via API");
    Ok(HttpResponse::Ok().json(ApiResponse::success("cache cleared")))
}

/// Cache counters
async fn cache_stats(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.router.cache_stats())))
}
