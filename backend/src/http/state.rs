//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::LaunchDataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The launch dataset, loaded once at startup and read-only after.
    pub dataset: Arc<LaunchDataset>,
}

impl AppState {
    /// Create a new application state around the loaded dataset.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self { dataset }
    }
}
