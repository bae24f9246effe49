//! Service layer for catalog business logic.

mod catalog_service;

pub use catalog_service::{CatalogManager, CatalogService};
