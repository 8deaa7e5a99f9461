/// Shared application state
use crate::config::QuerySettings;
use songscope_core::SongCatalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn SongCatalog>,
    pub query: QuerySettings,
}

impl AppState {
    pub fn new(catalog: Arc<dyn SongCatalog>, query: QuerySettings) -> Self {
        Self { catalog, query }
    }
}
