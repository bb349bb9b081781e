//! Health and OpenAPI handlers.

use crate::api::{ApiDoc, AppState};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use utoipa::OpenApi;

/// GET /health - Health check
///
/// Verifies the store is reachable; a failing store means the service cannot
/// ingest or serve thumbnails.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Store unreachable")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.processor.db.count_documents().await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({"status": "ok", "documents": count})),
        ),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unavailable"})),
            )
        }
    }
}

/// GET /openapi.json - OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI 3.1 specification document")
    )
)]
pub async fn openapi_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
