//! # pdf-thumbnailer
//!
//! Backend library for asynchronous PDF thumbnail ingestion.
//!
//! Submitted urls are driven through a dedup-aware pipeline (fetch the PDF,
//! render a first-page thumbnail, persist the pair) as detached tasks, and
//! the outcome is optionally reported to a caller-supplied webhook. Stored
//! thumbnails are read back newest-first with offset/limit pagination.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Convergent ingestion** - Duplicate submissions are absorbed by the
//!   store's uniqueness guarantee, never surfaced as errors
//! - **Fire-and-forget transport** - The HTTP ingress schedules work and
//!   returns; outcomes travel through webhooks and events
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_thumbnailer::{Config, PdfProcessor};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let processor = Arc::new(PdfProcessor::new(config.clone()).await?);
//!
//!     // Subscribe to pipeline events
//!     let mut events = processor.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {:?}", event);
//!         }
//!     });
//!
//!     // Serve the REST API (blocks until shutdown)
//!     pdf_thumbnailer::api::start_api_server(processor, Arc::new(config)).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// PDF fetching and thumbnail rendering capabilities
pub mod converter;
/// Database persistence layer
pub mod db;
/// Error types
pub mod error;
/// Core processing pipeline
pub mod processor;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use converter::{CliThumbnailRenderer, HttpPdfFetcher, PdfFetcher, ThumbnailRenderer};
pub use db::{Database, InsertOutcome, NewDocument};
pub use error::{ApiError, ConvertError, DatabaseError, Error, ErrorDetail, Result, ToHttpStatus};
pub use processor::{PdfProcessor, ProcessOutcome};
pub use types::{Document, DocumentId, Event, HookPayload};

/// Helper function to run the processor with graceful signal handling.
///
/// Waits for a termination signal (SIGTERM/SIGINT on Unix, Ctrl+C elsewhere)
/// and then calls the processor's `shutdown()` method.
///
/// # Example
///
/// ```no_run
/// use pdf_thumbnailer::{Config, PdfProcessor, run_with_shutdown};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let processor = PdfProcessor::new(Config::default()).await?;
///
///     // Run with automatic signal handling
///     run_with_shutdown(processor).await?;
///
///     Ok(())
/// }
/// ```
pub async fn run_with_shutdown(processor: PdfProcessor) -> Result<()> {
    wait_for_signal().await;
    processor.shutdown().await
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => tracing::info!("Received SIGTERM signal"),
                _ = sigint.recv() => tracing::info!("Received SIGINT signal (Ctrl+C)"),
            }
        }
        _ => {
            // Restricted environments (containers, tests) may refuse signal
            // registration; fall back to the portable handler
            tracing::warn!("Could not register unix signal handlers, using ctrl_c fallback");
            tokio::signal::ctrl_c().await.ok();
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C signal"),
    }
}
