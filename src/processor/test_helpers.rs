//! Shared fixtures for processor tests: counting converter doubles.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::Config;
use crate::converter::{PdfFetcher, ThumbnailRenderer};
use crate::error::ConvertError;

use super::PdfProcessor;

/// Fetcher double that counts calls and serves canned responses
pub(crate) struct StubFetcher {
    pub(crate) calls: AtomicUsize,
    response: Result<Vec<u8>, String>,
}

impl StubFetcher {
    pub(crate) fn ok(bytes: &[u8]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Ok(bytes.to_vec()),
        }
    }

    pub(crate) fn failing(reason: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Err(reason.to_string()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PdfFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> crate::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(bytes) => Ok(bytes.clone()),
            Err(reason) => Err(ConvertError::HttpStatus {
                url: url.to_string(),
                status: reason.clone(),
            }
            .into()),
        }
    }
}

/// Renderer double that counts calls and returns a fixed image
pub(crate) struct StubRenderer {
    pub(crate) calls: AtomicUsize,
    output: Vec<u8>,
}

impl StubRenderer {
    pub(crate) fn producing(bytes: &[u8]) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            output: bytes.to_vec(),
        }
    }

    /// Renders a zero-length image, the content-invalid failure case
    pub(crate) fn empty() -> Self {
        Self::producing(b"")
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThumbnailRenderer for StubRenderer {
    async fn render(&self, _pdf: &[u8]) -> crate::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }
}

/// Build a processor over in-memory storage with the given doubles
pub(crate) async fn test_processor(
    fetcher: Arc<StubFetcher>,
    renderer: Arc<StubRenderer>,
) -> PdfProcessor {
    test_processor_with_config(Config::default(), fetcher, renderer).await
}

/// Same as [`test_processor`] with an explicit configuration
pub(crate) async fn test_processor_with_config(
    config: Config,
    fetcher: Arc<StubFetcher>,
    renderer: Arc<StubRenderer>,
) -> PdfProcessor {
    PdfProcessor::with_converter(config, fetcher, renderer)
        .await
        .unwrap()
}
