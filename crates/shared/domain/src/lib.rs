//! Domain layer - Core catalog entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared between the service, repository and web layers.

pub mod catalog;
pub mod error;

pub use catalog::{
    AssignFieldParams, Category, CategoryField, CategoryFieldEntry, CreateCategoryParams,
    CreateDiscriminatorParams, CreateFieldParams, CreateFieldTypeParams, Field, FieldType,
    FieldTypeDiscriminator, JsonMap, UpdateCategoryParams, UpdateDiscriminatorParams,
    UpdateFieldParams, UpdateFieldTypeParams,
};
pub use error::{CatalogError, CatalogResult, EntityKind};
