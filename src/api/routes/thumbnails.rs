//! Stored thumbnail read handlers.

use super::ThumbnailsQuery;
use crate::api::AppState;
use crate::error::ApiError;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

/// GET /1/pdf/thumbnails - Read stored thumbnails (with pagination)
///
/// Returns a JSON array of documents ordered newest-first. `size = 0` (the
/// default) returns the entire collection; offsets past the end yield an
/// empty array.
#[utoipa::path(
    get,
    path = "/1/pdf/thumbnails",
    tag = "pdf",
    params(
        ("from" = Option<i64>, Query, description = "Zero-based offset (default 0)"),
        ("size" = Option<i64>, Query, description = "Page size; 0 returns everything (default 0)")
    ),
    responses(
        (status = 200, description = "Stored documents, newest first", body = Vec<crate::types::Document>),
        (status = 422, description = "Negative pagination parameters"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_thumbnails(
    State(state): State<AppState>,
    Query(query): Query<ThumbnailsQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let size = query.size.unwrap_or(0);

    // Reject negatives here; the store assumes non-negative inputs
    if from < 0 || size < 0 {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::validation("from and size must be non-negative")),
        )
            .into_response();
    }

    let from = u32::try_from(from).unwrap_or(u32::MAX);
    let size = u32::try_from(size).unwrap_or(u32::MAX);

    match state.processor.db.fetch_page(from, size).await {
        Ok(documents) => (StatusCode::OK, Json(documents)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to query thumbnails");
            e.into_response()
        }
    }
}
