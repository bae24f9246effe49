//! In-memory catalog store.
//!
//! Process-lifetime storage backed by ID-keyed maps behind a reader/writer
//! lock (catalog traffic is read-mostly). Behaves exactly like the SeaORM
//! store at the trait boundary: it generates IDs, stamps timestamps, upserts
//! assignments by natural key, and signals absent rows with `RowNotFound`.
//! Used by the test suite and by `serve --in-memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CatalogRepository, StoreError, StoreResult};
use domain::{
    AssignFieldParams, Category, CategoryField, CategoryFieldEntry, CreateCategoryParams,
    CreateDiscriminatorParams, CreateFieldParams, CreateFieldTypeParams, Field, FieldType,
    FieldTypeDiscriminator, UpdateCategoryParams, UpdateDiscriminatorParams, UpdateFieldParams,
    UpdateFieldTypeParams,
};

#[derive(Default)]
struct Tables {
    categories: HashMap<Uuid, Category>,
    fields: HashMap<Uuid, Field>,
    field_types: HashMap<Uuid, FieldType>,
    discriminators: HashMap<Uuid, FieldTypeDiscriminator>,
    assignments: HashMap<(Uuid, Uuid), CategoryField>,
}

/// Map-backed implementation of CatalogRepository.
#[derive(Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogStore {
    async fn create_category(&self, params: CreateCategoryParams) -> StoreResult<Category> {
        let now = chrono::Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: params.name,
            description: params.description,
            parent_id: params.parent_id,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_category(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn update_category(&self, params: UpdateCategoryParams) -> StoreResult<Category> {
        let mut tables = self.tables.write().await;
        let category = tables
            .categories
            .get_mut(&params.id)
            .ok_or(StoreError::RowNotFound)?;

        category.name = params.name;
        category.description = params.description;
        category.parent_id = params.parent_id;
        category.updated_at = chrono::Utc::now();

        Ok(category.clone())
    }

    async fn delete_category(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::RowNotFound)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn create_field(&self, params: CreateFieldParams) -> StoreResult<Field> {
        let now = chrono::Utc::now();
        let field = Field {
            id: Uuid::new_v4(),
            name: params.name,
            description: params.description,
            field_type_id: params.field_type_id,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.fields.insert(field.id, field.clone());
        Ok(field)
    }

    async fn find_field(&self, id: Uuid) -> StoreResult<Option<Field>> {
        let tables = self.tables.read().await;
        Ok(tables.fields.get(&id).cloned())
    }

    async fn update_field(&self, params: UpdateFieldParams) -> StoreResult<Field> {
        let mut tables = self.tables.write().await;
        let field = tables
            .fields
            .get_mut(&params.id)
            .ok_or(StoreError::RowNotFound)?;

        field.name = params.name;
        field.description = params.description;
        field.field_type_id = params.field_type_id;
        field.updated_at = chrono::Utc::now();

        Ok(field.clone())
    }

    async fn delete_field(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .fields
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::RowNotFound)
    }

    async fn list_fields(&self) -> StoreResult<Vec<Field>> {
        let tables = self.tables.read().await;
        Ok(tables.fields.values().cloned().collect())
    }

    async fn assign_field(&self, params: AssignFieldParams) -> StoreResult<CategoryField> {
        let assignment = CategoryField {
            category_id: params.category_id,
            field_id: params.field_id,
            is_required: params.is_required,
            display_order: params.display_order,
        };

        let mut tables = self.tables.write().await;
        tables.assignments.insert(
            (assignment.category_id, assignment.field_id),
            assignment.clone(),
        );
        Ok(assignment)
    }

    async fn category_fields(&self, category_id: Uuid) -> StoreResult<Vec<CategoryFieldEntry>> {
        let tables = self.tables.read().await;

        let mut entries: Vec<CategoryFieldEntry> = tables
            .assignments
            .values()
            .filter(|a| a.category_id == category_id)
            .filter_map(|a| {
                tables.fields.get(&a.field_id).map(|f| CategoryFieldEntry {
                    field: f.clone(),
                    is_required: a.is_required,
                    display_order: a.display_order,
                })
            })
            .collect();

        entries.sort_by_key(|e| e.display_order);
        Ok(entries)
    }

    async fn create_field_type(&self, params: CreateFieldTypeParams) -> StoreResult<FieldType> {
        let now = chrono::Utc::now();
        let field_type = FieldType {
            id: Uuid::new_v4(),
            name: params.name,
            type_discriminator_id: params.type_discriminator_id,
            properties: params.properties,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.field_types.insert(field_type.id, field_type.clone());
        Ok(field_type)
    }

    async fn find_field_type(&self, id: Uuid) -> StoreResult<Option<FieldType>> {
        let tables = self.tables.read().await;
        Ok(tables.field_types.get(&id).cloned())
    }

    async fn update_field_type(&self, params: UpdateFieldTypeParams) -> StoreResult<FieldType> {
        let mut tables = self.tables.write().await;
        let field_type = tables
            .field_types
            .get_mut(&params.id)
            .ok_or(StoreError::RowNotFound)?;

        field_type.name = params.name;
        field_type.type_discriminator_id = params.type_discriminator_id;
        field_type.properties = params.properties;
        field_type.updated_at = chrono::Utc::now();

        Ok(field_type.clone())
    }

    async fn delete_field_type(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .field_types
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::RowNotFound)
    }

    async fn list_field_types(&self) -> StoreResult<Vec<FieldType>> {
        let tables = self.tables.read().await;
        Ok(tables.field_types.values().cloned().collect())
    }

    async fn create_discriminator(
        &self,
        params: CreateDiscriminatorParams,
    ) -> StoreResult<FieldTypeDiscriminator> {
        let discriminator = FieldTypeDiscriminator {
            id: Uuid::new_v4(),
            name: params.name,
            description: params.description,
            validation_schema: params.validation_schema,
            created_at: chrono::Utc::now(),
        };

        let mut tables = self.tables.write().await;
        tables
            .discriminators
            .insert(discriminator.id, discriminator.clone());
        Ok(discriminator)
    }

    async fn find_discriminator(
        &self,
        id: Uuid,
    ) -> StoreResult<Option<FieldTypeDiscriminator>> {
        let tables = self.tables.read().await;
        Ok(tables.discriminators.get(&id).cloned())
    }

    async fn update_discriminator(
        &self,
        params: UpdateDiscriminatorParams,
    ) -> StoreResult<FieldTypeDiscriminator> {
        let mut tables = self.tables.write().await;
        let discriminator = tables
            .discriminators
            .get_mut(&params.id)
            .ok_or(StoreError::RowNotFound)?;

        // created_at is preserved; discriminators carry no updated_at.
        discriminator.name = params.name;
        discriminator.description = params.description;
        discriminator.validation_schema = params.validation_schema;

        Ok(discriminator.clone())
    }

    async fn delete_discriminator(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .discriminators
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::RowNotFound)
    }

    async fn list_discriminators(&self) -> StoreResult<Vec<FieldTypeDiscriminator>> {
        let tables = self.tables.read().await;
        Ok(tables.discriminators.values().cloned().collect())
    }
}
