//! Domain-level errors.
//!
//! These errors represent precondition failures and storage faults as the
//! service layer reports them. They are independent of transport concerns;
//! handlers only inspect the variant to pick a status code.

use thiserror::Error;
use uuid::Uuid;

/// Entity kinds, used to contextualize not-found and conflict errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Field,
    FieldType,
    FieldTypeDiscriminator,
    CategoryField,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Category => "category",
            EntityKind::Field => "field",
            EntityKind::FieldType => "field type",
            EntityKind::FieldTypeDiscriminator => "field type discriminator",
            EntityKind::CategoryField => "category field",
        };
        f.write_str(name)
    }
}

/// Catalog domain errors.
///
/// The service layer is the single place where storage-level signals are
/// translated into these kinds; the original cause of an `Internal` error is
/// kept as `source` for logging and never shown to callers verbatim.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required input is missing or malformed.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The entity, or an entity it references, does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: Uuid },

    /// Reserved for duplicate-unique-name style violations.
    #[error("{entity} already exists")]
    Conflict { entity: EntityKind },

    /// Storage or serialization failure.
    #[error("storage operation failed")]
    Internal {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CatalogError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: EntityKind, id: Uuid) -> Self {
        CatalogError::NotFound { entity, id }
    }

    pub fn conflict(entity: EntityKind) -> Self {
        CatalogError::Conflict { entity }
    }

    pub fn internal(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        CatalogError::Internal {
            source: source.into(),
        }
    }

    /// True for the `NotFound` kind, regardless of entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
