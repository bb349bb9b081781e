use std::sync::Arc;

use crate::api::create_router;
use crate::config::Config;
use crate::processor::PdfProcessor;
use crate::processor::test_helpers::{StubFetcher, StubRenderer};

mod upload;

/// Build a router over in-memory storage with canned converter doubles
async fn test_app() -> (axum::Router, Arc<PdfProcessor>) {
    test_app_with(
        Arc::new(StubFetcher::ok(b"%PDF-1.4 body")),
        Arc::new(StubRenderer::producing(b"jpeg bytes")),
    )
    .await
}

async fn test_app_with(
    fetcher: Arc<StubFetcher>,
    renderer: Arc<StubRenderer>,
) -> (axum::Router, Arc<PdfProcessor>) {
    let config = Config::default();
    let processor = Arc::new(
        PdfProcessor::with_converter(config.clone(), fetcher, renderer)
            .await
            .unwrap(),
    );
    let app = create_router(Arc::clone(&processor), Arc::new(config));
    (app, processor)
}
