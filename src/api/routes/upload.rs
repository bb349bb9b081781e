//! PDF url submission handler.

use super::UploadRequest;
use crate::api::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

/// POST /1/pdf/upload - Submit a PDF url for asynchronous processing
///
/// Always responds `200 {}` as soon as the pipeline has been scheduled; the
/// caller never waits on fetch/render/persist latency and learns the true
/// outcome only through the optional hook or by polling the thumbnails
/// endpoint.
#[utoipa::path(
    post,
    path = "/1/pdf/upload",
    tag = "pdf",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Submission accepted and scheduled"),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn upload_pdf(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> impl IntoResponse {
    tracing::debug!(url = %request.url, hook = ?request.hook, "scheduling submission");

    state.processor.spawn_process(request.url, request.hook);

    (StatusCode::OK, Json(json!({})))
}
