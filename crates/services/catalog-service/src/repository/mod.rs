//! Repository layer for catalog data access.

pub mod entities;
mod catalog_repository;
mod memory;

pub use catalog_repository::{CatalogRepository, CatalogStore};
pub use memory::MemoryCatalogStore;

#[cfg(any(test, feature = "test-utils"))]
pub use catalog_repository::MockCatalogRepository;

use thiserror::Error;

/// Low-level storage errors.
///
/// Deliberately coarse: the service layer is the only consumer and translates
/// `RowNotFound` into a domain `NotFound` with entity context, everything else
/// into an opaque internal error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed row does not exist.
    #[error("row not found")]
    RowNotFound,

    /// Backend failure (connection, constraint, serialization).
    #[error("storage backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(_) => StoreError::RowNotFound,
            other => StoreError::Backend(Box::new(other)),
        }
    }
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
