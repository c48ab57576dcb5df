//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::{DropdownCatalog, ScorerDataset};

/// Shared application state passed to all handlers.
///
/// Both sources are loaded once at startup and never mutated, so handlers
/// may read them concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    /// The historical scorer table
    pub dataset: Arc<ScorerDataset>,
    /// The player dropdown catalog
    pub dropdown: Arc<DropdownCatalog>,
}

impl AppState {
    /// Create a new application state from the loaded data sources.
    pub fn new(dataset: Arc<ScorerDataset>, dropdown: Arc<DropdownCatalog>) -> Self {
        Self { dataset, dropdown }
    }
}
