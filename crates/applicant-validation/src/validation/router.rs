use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::request::{BatchValidationRequest, ValidationRequest};
use super::service::ValidationService;

/// Router builder exposing the validation, catalog and liveness endpoints.
pub fn validation_router(service: Arc<ValidationService>) -> Router {
    Router::new()
        .route("/api/validate", post(validate_handler))
        .route("/api/validate/batch", post(batch_handler))
        .route("/api/rules/info", get(rules_info_handler))
        .route("/api/health", get(health_handler))
        .with_state(service)
}

pub(crate) async fn validate_handler(
    State(service): State<Arc<ValidationService>>,
    axum::Json(request): axum::Json<ValidationRequest>,
) -> Response {
    match service.validate(request) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) => bad_request(error),
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<ValidationService>>,
    axum::Json(request): axum::Json<BatchValidationRequest>,
) -> Response {
    match service.validate_batch(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => bad_request(error),
    }
}

pub(crate) async fn rules_info_handler(State(service): State<Arc<ValidationService>>) -> Response {
    (StatusCode::OK, axum::Json(service.catalog())).into_response()
}

pub(crate) async fn health_handler(State(service): State<Arc<ValidationService>>) -> Response {
    (StatusCode::OK, axum::Json(service.health())).into_response()
}

fn bad_request(error: impl std::fmt::Display) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
