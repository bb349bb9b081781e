//! Core processing pipeline split into focused submodules.
//!
//! The `PdfProcessor` struct and its methods are organized by domain:
//! - [`process`] - The dedup → fetch → render → persist pipeline
//! - [`webhooks`] - Outcome notification delivery

mod process;
mod webhooks;

pub use process::ProcessOutcome;

use std::sync::Arc;

use crate::config::Config;
use crate::converter::{CliThumbnailRenderer, HttpPdfFetcher, PdfFetcher, ThumbnailRenderer};
use crate::db::Database;
use crate::error::{ConvertError, Error, Result};
use crate::types::Event;

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Main processor instance (cloneable - all fields are Arc-wrapped)
///
/// Owns the store and the conversion capabilities and drives submitted urls
/// through the pipeline. Pipelines run as detached tasks; the processor
/// itself holds no per-submission state.
#[derive(Clone)]
pub struct PdfProcessor {
    /// Database instance for persistence (wrapped in Arc for sharing across tasks)
    /// Public for integration tests to query stored documents
    pub db: Arc<Database>,
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: Arc<Config>,
    /// PDF retrieval capability
    pub(crate) fetcher: Arc<dyn PdfFetcher>,
    /// Thumbnail rendering capability
    pub(crate) renderer: Arc<dyn ThumbnailRenderer>,
    /// HTTP client used for webhook delivery
    pub(crate) hook_client: reqwest::Client,
    /// Event broadcast channel sender (multiple subscribers supported)
    pub(crate) event_tx: tokio::sync::broadcast::Sender<Event>,
}

impl PdfProcessor {
    /// Create a processor with the default converter implementations
    ///
    /// Uses [`HttpPdfFetcher`] for retrieval and [`CliThumbnailRenderer`]
    /// for rendering; fails if no ghostscript binary is configured or found
    /// in PATH.
    pub async fn new(config: Config) -> Result<Self> {
        let converter = &config.converter;

        let renderer = match &converter.ghostscript_path {
            Some(path) => CliThumbnailRenderer::new(
                path.clone(),
                converter.jpeg_quality,
                converter.render_dpi,
            ),
            None => CliThumbnailRenderer::from_path(converter.jpeg_quality, converter.render_dpi)
                .ok_or_else(|| {
                    Error::Convert(ConvertError::RendererUnavailable(
                        "ghostscript (gs) not found in PATH".to_string(),
                    ))
                })?,
        };

        let fetcher = HttpPdfFetcher::new(converter.fetch_timeout)?;

        Self::with_converter(config, Arc::new(fetcher), Arc::new(renderer)).await
    }

    /// Create a processor with caller-supplied converter implementations
    ///
    /// This is the seam for embedders (and tests) that bring their own fetch
    /// or render capability.
    pub async fn with_converter(
        config: Config,
        fetcher: Arc<dyn PdfFetcher>,
        renderer: Arc<dyn ThumbnailRenderer>,
    ) -> Result<Self> {
        let db = match &config.storage.database_path {
            Some(path) => Database::new(path).await?,
            None => Database::in_memory().await?,
        };

        let hook_client = reqwest::Client::builder()
            .timeout(config.notifications.webhook_timeout)
            .build()?;

        let (event_tx, _) = tokio::sync::broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            db: Arc::new(db),
            config: Arc::new(config),
            fetcher,
            renderer,
            hook_client,
            event_tx,
        })
    }

    /// Subscribe to pipeline events
    ///
    /// Each receiver gets every event emitted after the call. Events are
    /// observational only; missing some (slow receiver) never affects
    /// processing.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// Flush and close the backing store
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down processor");
        self.db.close().await;
        Ok(())
    }

    pub(crate) fn emit(&self, event: Event) {
        // Errors just mean nobody is listening
        self.event_tx.send(event).ok();
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
