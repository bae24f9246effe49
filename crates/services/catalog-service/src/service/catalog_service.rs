//! Catalog service - validation, referential integrity, error translation.
//!
//! Every operation is a single-shot transform over storage. The existence
//! checks here (parent on category create, both sides on assignment) are
//! read-then-write sequences with no transaction around them; a concurrent
//! delete between the check and the write can slip through. Known gap,
//! acceptable at this scale.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use domain::{
    AssignFieldParams, CatalogError, CatalogResult, Category, CategoryFieldEntry,
    CreateCategoryParams, CreateDiscriminatorParams, CreateFieldParams, CreateFieldTypeParams,
    EntityKind, Field, FieldType, FieldTypeDiscriminator, UpdateCategoryParams,
    UpdateDiscriminatorParams, UpdateFieldParams, UpdateFieldTypeParams,
};

use crate::repository::{CatalogRepository, StoreError};

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn create_category(&self, params: CreateCategoryParams) -> CatalogResult<Category>;
    async fn get_category(&self, id: Uuid) -> CatalogResult<Category>;
    async fn update_category(&self, params: UpdateCategoryParams) -> CatalogResult<Category>;
    async fn delete_category(&self, id: Uuid) -> CatalogResult<()>;
    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    async fn create_field(&self, params: CreateFieldParams) -> CatalogResult<Field>;
    async fn get_field(&self, id: Uuid) -> CatalogResult<Field>;
    async fn update_field(&self, params: UpdateFieldParams) -> CatalogResult<Field>;
    async fn delete_field(&self, id: Uuid) -> CatalogResult<()>;
    async fn list_fields(&self) -> CatalogResult<Vec<Field>>;

    /// Assign a field to a category; both sides must exist. Re-assigning the
    /// same pair updates `is_required`/`display_order` (upsert by natural key).
    async fn assign_field_to_category(&self, params: AssignFieldParams) -> CatalogResult<()>;

    /// Joined field records for a category. An unknown category yields an
    /// empty list; callers that need the distinction must check existence
    /// first.
    async fn get_category_fields(&self, category_id: Uuid)
        -> CatalogResult<Vec<CategoryFieldEntry>>;

    async fn create_field_type(&self, params: CreateFieldTypeParams) -> CatalogResult<FieldType>;
    async fn get_field_type(&self, id: Uuid) -> CatalogResult<FieldType>;
    async fn update_field_type(&self, params: UpdateFieldTypeParams) -> CatalogResult<FieldType>;
    async fn delete_field_type(&self, id: Uuid) -> CatalogResult<()>;
    async fn list_field_types(&self) -> CatalogResult<Vec<FieldType>>;

    async fn create_discriminator(
        &self,
        params: CreateDiscriminatorParams,
    ) -> CatalogResult<FieldTypeDiscriminator>;
    async fn get_discriminator(&self, id: Uuid) -> CatalogResult<FieldTypeDiscriminator>;
    /// Existence-checked; the stored `created_at` survives the update.
    async fn update_discriminator(
        &self,
        params: UpdateDiscriminatorParams,
    ) -> CatalogResult<FieldTypeDiscriminator>;
    /// Existence-checked before delegating to storage.
    async fn delete_discriminator(&self, id: Uuid) -> CatalogResult<()>;
    async fn list_discriminators(&self) -> CatalogResult<Vec<FieldTypeDiscriminator>>;
}

/// Concrete implementation of CatalogService using the repository.
pub struct CatalogManager {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogManager {
    /// Create new catalog service instance with repository
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }
}

/// Wrap a backend failure, logging the cause before it is made opaque.
fn internal(err: StoreError) -> CatalogError {
    match err {
        StoreError::Backend(source) => {
            tracing::error!(error = %source, "storage backend failure");
            CatalogError::internal(source)
        }
        // A mutating call reported an absent row where none was addressed.
        StoreError::RowNotFound => CatalogError::internal("unexpected row-not-found from storage"),
    }
}

/// Translate a store error for an operation addressing a specific row.
fn for_entity(entity: EntityKind, id: Uuid) -> impl FnOnce(StoreError) -> CatalogError {
    move |err| match err {
        StoreError::RowNotFound => CatalogError::not_found(entity, id),
        backend => internal(backend),
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn create_category(&self, params: CreateCategoryParams) -> CatalogResult<Category> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }

        if let Some(parent_id) = params.parent_id {
            self.repo
                .find_category(parent_id)
                .await
                .map_err(internal)?
                .ok_or_else(|| CatalogError::not_found(EntityKind::Category, parent_id))?;
        }

        self.repo.create_category(params).await.map_err(internal)
    }

    async fn get_category(&self, id: Uuid) -> CatalogResult<Category> {
        self.repo
            .find_category(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Category, id))
    }

    async fn update_category(&self, params: UpdateCategoryParams) -> CatalogResult<Category> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }

        let id = params.id;
        self.repo
            .update_category(params)
            .await
            .map_err(for_entity(EntityKind::Category, id))
    }

    async fn delete_category(&self, id: Uuid) -> CatalogResult<()> {
        // No cascade: child categories and assignments survive the delete.
        self.repo
            .delete_category(id)
            .await
            .map_err(for_entity(EntityKind::Category, id))
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        self.repo.list_categories().await.map_err(internal)
    }

    async fn create_field(&self, params: CreateFieldParams) -> CatalogResult<Field> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }
        if params.field_type_id.is_nil() {
            return Err(CatalogError::invalid_input(
                "fieldTypeId",
                "field type reference is required",
            ));
        }

        // The referenced field type is not checked for existence, matching
        // the checked-parent asymmetry documented in DESIGN.md.
        self.repo.create_field(params).await.map_err(internal)
    }

    async fn get_field(&self, id: Uuid) -> CatalogResult<Field> {
        self.repo
            .find_field(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Field, id))
    }

    async fn update_field(&self, params: UpdateFieldParams) -> CatalogResult<Field> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }

        let id = params.id;
        self.repo
            .update_field(params)
            .await
            .map_err(for_entity(EntityKind::Field, id))
    }

    async fn delete_field(&self, id: Uuid) -> CatalogResult<()> {
        self.repo
            .delete_field(id)
            .await
            .map_err(for_entity(EntityKind::Field, id))
    }

    async fn list_fields(&self) -> CatalogResult<Vec<Field>> {
        self.repo.list_fields().await.map_err(internal)
    }

    async fn assign_field_to_category(&self, params: AssignFieldParams) -> CatalogResult<()> {
        if params.display_order < 1 {
            return Err(CatalogError::invalid_input(
                "displayOrder",
                "display order must be positive",
            ));
        }

        self.repo
            .find_category(params.category_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Category, params.category_id))?;

        self.repo
            .find_field(params.field_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Field, params.field_id))?;

        self.repo.assign_field(params).await.map_err(internal)?;
        Ok(())
    }

    async fn get_category_fields(
        &self,
        category_id: Uuid,
    ) -> CatalogResult<Vec<CategoryFieldEntry>> {
        self.repo
            .category_fields(category_id)
            .await
            .map_err(internal)
    }

    async fn create_field_type(&self, params: CreateFieldTypeParams) -> CatalogResult<FieldType> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }
        if params.type_discriminator_id.is_nil() {
            return Err(CatalogError::invalid_input(
                "typeDiscriminatorId",
                "discriminator reference is required",
            ));
        }

        self.repo.create_field_type(params).await.map_err(internal)
    }

    async fn get_field_type(&self, id: Uuid) -> CatalogResult<FieldType> {
        self.repo
            .find_field_type(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::FieldType, id))
    }

    async fn update_field_type(&self, params: UpdateFieldTypeParams) -> CatalogResult<FieldType> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }

        let id = params.id;
        self.repo
            .update_field_type(params)
            .await
            .map_err(for_entity(EntityKind::FieldType, id))
    }

    async fn delete_field_type(&self, id: Uuid) -> CatalogResult<()> {
        self.repo
            .delete_field_type(id)
            .await
            .map_err(for_entity(EntityKind::FieldType, id))
    }

    async fn list_field_types(&self) -> CatalogResult<Vec<FieldType>> {
        self.repo.list_field_types().await.map_err(internal)
    }

    async fn create_discriminator(
        &self,
        params: CreateDiscriminatorParams,
    ) -> CatalogResult<FieldTypeDiscriminator> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }

        self.repo
            .create_discriminator(params)
            .await
            .map_err(internal)
    }

    async fn get_discriminator(&self, id: Uuid) -> CatalogResult<FieldTypeDiscriminator> {
        self.repo
            .find_discriminator(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CatalogError::not_found(EntityKind::FieldTypeDiscriminator, id))
    }

    async fn update_discriminator(
        &self,
        params: UpdateDiscriminatorParams,
    ) -> CatalogResult<FieldTypeDiscriminator> {
        if params.name.is_empty() {
            return Err(CatalogError::invalid_input("name", "name cannot be empty"));
        }

        // Existence check first; the stored created_at must survive.
        let existing = self.get_discriminator(params.id).await?;

        let updated = self
            .repo
            .update_discriminator(params)
            .await
            .map_err(for_entity(EntityKind::FieldTypeDiscriminator, existing.id))?;

        Ok(FieldTypeDiscriminator {
            created_at: existing.created_at,
            ..updated
        })
    }

    async fn delete_discriminator(&self, id: Uuid) -> CatalogResult<()> {
        self.get_discriminator(id).await?;

        self.repo
            .delete_discriminator(id)
            .await
            .map_err(for_entity(EntityKind::FieldTypeDiscriminator, id))
    }

    async fn list_discriminators(&self) -> CatalogResult<Vec<FieldTypeDiscriminator>> {
        self.repo.list_discriminators().await.map_err(internal)
    }
}
