//! Application state shared across handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::CatalogService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    /// Present for the Postgres backend only; the health probe pings it.
    pub database: Option<Database>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>, database: Option<Database>) -> Self {
        Self { catalog, database }
    }
}
