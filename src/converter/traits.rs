//! Capability traits for the conversion pipeline

use async_trait::async_trait;

/// Retrieves PDF bytes from a url
///
/// Implementations must treat a non-success response as an error; the
/// pipeline never inspects response metadata itself. Implementations should
/// bound the fetch with a timeout to avoid unbounded suspension of a
/// pipeline run.
#[async_trait]
pub trait PdfFetcher: Send + Sync {
    /// Fetch the document at `url`, returning its raw bytes
    async fn fetch(&self, url: &str) -> crate::Result<Vec<u8>>;
}

/// Renders the first page of a PDF to a compressed raster image
#[async_trait]
pub trait ThumbnailRenderer: Send + Sync {
    /// Render `pdf` to thumbnail image bytes
    ///
    /// Returning an empty buffer is allowed here; the pipeline treats it as
    /// the "failed to extract thumbnail" failure rather than a degenerate
    /// success.
    async fn render(&self, pdf: &[u8]) -> crate::Result<Vec<u8>>;
}
