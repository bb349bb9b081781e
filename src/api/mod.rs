//! REST API server module
//!
//! Provides the HTTP ingress for submitting PDF urls and reading back stored
//! thumbnails. The handlers are thin transport over [`PdfProcessor`] and its
//! store; all processing happens in detached pipeline tasks.

use crate::{Config, PdfProcessor, Result};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod error_response;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::AppState;

/// Create the API router with all route definitions
///
/// # Routes
///
/// ## Ingestion
/// - `POST /1/pdf/upload` - Submit a PDF url for asynchronous processing
///
/// ## Thumbnails
/// - `GET /1/pdf/thumbnails` - Read stored thumbnails (with pagination)
///
/// ## System
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI specification
/// - `GET /swagger-ui` - Interactive Swagger UI documentation (if enabled)
pub fn create_router(processor: Arc<PdfProcessor>, config: Arc<Config>) -> Router {
    let state = AppState::new(processor, config.clone());

    let router = Router::new()
        // Ingestion
        .route("/1/pdf/upload", post(routes::upload_pdf))
        // Thumbnails
        .route("/1/pdf/thumbnails", get(routes::get_thumbnails))
        // System
        .route("/health", get(routes::health_check))
        .route("/openapi.json", get(routes::openapi_spec));

    // Merge Swagger UI routes if enabled in config (before applying state)
    let router = if config.server.swagger_ui {
        router.merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
    } else {
        router
    };

    let router = router.with_state(state);

    // Apply CORS middleware if enabled in config
    if config.server.cors_enabled {
        let cors = build_cors_layer(&config.server.cors_origins);
        router.layer(cors)
    } else {
        router
    }
}

/// Build a CORS layer based on configured origins
///
/// Supports "*" (or an empty list) for any origin, otherwise the explicit
/// origin list.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any || origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server on the configured bind address.
///
/// Binds a TCP listener and serves the router until the server stops, either
/// due to an error or graceful shutdown.
///
/// # Example
///
/// ```no_run
/// use pdf_thumbnailer::{Config, PdfProcessor};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Arc::new(Config::default());
/// let processor = Arc::new(PdfProcessor::new((*config).clone()).await?);
///
/// // Start API server (blocks until shutdown)
/// pdf_thumbnailer::api::start_api_server(processor, config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_api_server(processor: Arc<PdfProcessor>, config: Arc<Config>) -> Result<()> {
    let bind_address = config.server.bind_address;

    tracing::info!(address = %bind_address, "Starting API server");

    let app = create_router(processor, config);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(crate::error::Error::Io)?;

    tracing::info!(address = %bind_address, "API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::ApiServerError(e.to_string()))?;

    tracing::info!("API server stopped");
    Ok(())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
