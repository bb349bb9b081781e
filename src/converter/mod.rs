//! PDF fetching and thumbnail rendering.
//!
//! The processing pipeline only depends on the [`PdfFetcher`] and
//! [`ThumbnailRenderer`] traits; the shipped implementations are
//! [`HttpPdfFetcher`] (reqwest) and [`CliThumbnailRenderer`] (external
//! ghostscript binary). Embedders can substitute their own implementations
//! when constructing a processor.

mod fetch;
mod render;
mod traits;

pub use fetch::HttpPdfFetcher;
pub use render::CliThumbnailRenderer;
pub use traits::{PdfFetcher, ThumbnailRenderer};
