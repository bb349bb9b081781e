//! OpenAPI documentation and schema generation
//!
//! This module defines the OpenAPI specification for the pdf-thumbnailer
//! REST API using utoipa for compile-time spec generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the pdf-thumbnailer REST API
///
/// The spec can be accessed via:
/// - `/openapi.json` - JSON format OpenAPI specification
/// - `/swagger-ui` - Interactive Swagger UI documentation (if enabled)
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pdf-thumbnailer REST API",
        version = "0.1.0",
        description = "Submit PDF urls for asynchronous thumbnail extraction and read back stored thumbnails",
        license(name = "MIT OR Apache-2.0")
    ),
    paths(
        crate::api::routes::upload_pdf,
        crate::api::routes::get_thumbnails,
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        crate::api::routes::UploadRequest,
        crate::api::routes::ThumbnailsQuery,
        crate::types::Document,
        crate::types::DocumentId,
        crate::types::HookPayload,
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "pdf", description = "PDF submission and thumbnail retrieval"),
        (name = "system", description = "Health and API metadata")
    )
)]
pub struct ApiDoc;
