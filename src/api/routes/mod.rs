//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`upload`] — PDF url submission
//! - [`thumbnails`] — Stored thumbnail reads
//! - [`system`] — Health and OpenAPI spec

use serde::{Deserialize, Serialize};

mod system;
mod thumbnails;
mod upload;

// Re-export all handlers so `routes::function_name` continues to work
pub use system::*;
pub use thumbnails::*;
pub use upload::*;

// ============================================================================
// Query/Request Types (shared across handlers)
// ============================================================================

/// Request body for POST /1/pdf/upload
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UploadRequest {
    /// The url of the PDF to process. Not validated here; a malformed url
    /// simply fails at the fetch step and is reported via the hook.
    pub url: String,
    /// Optional webhook endpoint notified of the outcome
    #[serde(default)]
    pub hook: Option<String>,
}

/// Query parameters for GET /1/pdf/thumbnails
///
/// Both values default to 0. Signed types on purpose: negative input must be
/// rejected with 422 at this boundary rather than silently clamped or left
/// to wrap at the store.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ThumbnailsQuery {
    /// Zero-based offset into the newest-first collection (default: 0)
    pub from: Option<i64>,
    /// Maximum number of items to return; 0 returns everything (default: 0)
    pub size: Option<i64>,
}
