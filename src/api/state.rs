//! Application state for the API server

use crate::{Config, PdfProcessor};
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the processor instance and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The main PdfProcessor instance
    pub processor: Arc<PdfProcessor>,

    /// Configuration (read access)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(processor: Arc<PdfProcessor>, config: Arc<Config>) -> Self {
        Self { processor, config }
    }
}
