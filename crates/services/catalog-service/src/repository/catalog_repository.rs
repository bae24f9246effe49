//! Catalog repository: storage contract plus the SeaORM implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::{category, category_field, field, field_type, field_type_discriminator};
use super::{StoreError, StoreResult};
use domain::{
    AssignFieldParams, Category, CategoryField, CategoryFieldEntry, CreateCategoryParams,
    CreateDiscriminatorParams, CreateFieldParams, CreateFieldTypeParams, Field, FieldType,
    FieldTypeDiscriminator, UpdateCategoryParams, UpdateDiscriminatorParams, UpdateFieldParams,
    UpdateFieldTypeParams,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog repository trait for dependency injection.
///
/// The store generates entity IDs and stamps `created_at`/`updated_at`; the
/// service layer never touches timestamps. Find methods report absence as
/// `Ok(None)`; mutating methods report it as `StoreError::RowNotFound`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // Category operations
    async fn create_category(&self, params: CreateCategoryParams) -> StoreResult<Category>;
    async fn find_category(&self, id: Uuid) -> StoreResult<Option<Category>>;
    async fn update_category(&self, params: UpdateCategoryParams) -> StoreResult<Category>;
    async fn delete_category(&self, id: Uuid) -> StoreResult<()>;
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    // Field operations
    async fn create_field(&self, params: CreateFieldParams) -> StoreResult<Field>;
    async fn find_field(&self, id: Uuid) -> StoreResult<Option<Field>>;
    async fn update_field(&self, params: UpdateFieldParams) -> StoreResult<Field>;
    async fn delete_field(&self, id: Uuid) -> StoreResult<()>;
    async fn list_fields(&self) -> StoreResult<Vec<Field>>;

    /// Upsert an assignment by its natural key (category_id, field_id).
    async fn assign_field(&self, params: AssignFieldParams) -> StoreResult<CategoryField>;

    /// Joined field records for a category, ordered by display_order.
    /// An unknown category yields an empty list, not an error.
    async fn category_fields(&self, category_id: Uuid) -> StoreResult<Vec<CategoryFieldEntry>>;

    // Field type operations
    async fn create_field_type(&self, params: CreateFieldTypeParams) -> StoreResult<FieldType>;
    async fn find_field_type(&self, id: Uuid) -> StoreResult<Option<FieldType>>;
    async fn update_field_type(&self, params: UpdateFieldTypeParams) -> StoreResult<FieldType>;
    async fn delete_field_type(&self, id: Uuid) -> StoreResult<()>;
    async fn list_field_types(&self) -> StoreResult<Vec<FieldType>>;

    // Field type discriminator operations
    async fn create_discriminator(
        &self,
        params: CreateDiscriminatorParams,
    ) -> StoreResult<FieldTypeDiscriminator>;
    async fn find_discriminator(&self, id: Uuid)
        -> StoreResult<Option<FieldTypeDiscriminator>>;
    /// Updates name/description/schema only; `created_at` is left untouched.
    async fn update_discriminator(
        &self,
        params: UpdateDiscriminatorParams,
    ) -> StoreResult<FieldTypeDiscriminator>;
    async fn delete_discriminator(&self, id: Uuid) -> StoreResult<()>;
    async fn list_discriminators(&self) -> StoreResult<Vec<FieldTypeDiscriminator>>;
}

/// Concrete implementation of CatalogRepository backed by SeaORM/Postgres.
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for CatalogStore {
    async fn create_category(&self, params: CreateCategoryParams) -> StoreResult<Category> {
        let now = chrono::Utc::now();
        let active_model = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(params.name),
            description: Set(params.description),
            parent_id: Set(params.parent_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Category::from(model))
    }

    async fn find_category(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let result = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Category::from))
    }

    async fn update_category(&self, params: UpdateCategoryParams) -> StoreResult<Category> {
        let existing = category::Entity::find_by_id(params.id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::RowNotFound)?;

        let mut active: category::ActiveModel = existing.into();
        active.name = Set(params.name);
        active.description = Set(params.description);
        active.parent_id = Set(params.parent_id);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Category::from(model))
    }

    async fn delete_category(&self, id: Uuid) -> StoreResult<()> {
        let result = category::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let models = category::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn create_field(&self, params: CreateFieldParams) -> StoreResult<Field> {
        let now = chrono::Utc::now();
        let active_model = field::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(params.name),
            description: Set(params.description),
            field_type_id: Set(params.field_type_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Field::from(model))
    }

    async fn find_field(&self, id: Uuid) -> StoreResult<Option<Field>> {
        let result = field::Entity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Field::from))
    }

    async fn update_field(&self, params: UpdateFieldParams) -> StoreResult<Field> {
        let existing = field::Entity::find_by_id(params.id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::RowNotFound)?;

        let mut active: field::ActiveModel = existing.into();
        active.name = Set(params.name);
        active.description = Set(params.description);
        active.field_type_id = Set(params.field_type_id);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Field::from(model))
    }

    async fn delete_field(&self, id: Uuid) -> StoreResult<()> {
        let result = field::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(())
    }

    async fn list_fields(&self) -> StoreResult<Vec<Field>> {
        let models = field::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Field::from).collect())
    }

    async fn assign_field(&self, params: AssignFieldParams) -> StoreResult<CategoryField> {
        let active_model = category_field::ActiveModel {
            category_id: Set(params.category_id),
            field_id: Set(params.field_id),
            is_required: Set(params.is_required),
            display_order: Set(params.display_order),
        };

        // Re-assigning the same (category, field) pair updates the metadata
        // instead of duplicating the row.
        let model = category_field::Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([
                    category_field::Column::CategoryId,
                    category_field::Column::FieldId,
                ])
                .update_columns([
                    category_field::Column::IsRequired,
                    category_field::Column::DisplayOrder,
                ])
                .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await?;

        Ok(CategoryField::from(model))
    }

    async fn category_fields(&self, category_id: Uuid) -> StoreResult<Vec<CategoryFieldEntry>> {
        let assignments = category_field::Entity::find()
            .filter(category_field::Column::CategoryId.eq(category_id))
            .order_by_asc(category_field::Column::DisplayOrder)
            .all(&self.db)
            .await?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let field_ids: Vec<Uuid> = assignments.iter().map(|a| a.field_id).collect();
        let fields: HashMap<Uuid, Field> = field::Entity::find()
            .filter(field::Column::Id.is_in(field_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, Field::from(m)))
            .collect();

        let entries = assignments
            .into_iter()
            .filter_map(|a| {
                fields.get(&a.field_id).map(|f| CategoryFieldEntry {
                    field: f.clone(),
                    is_required: a.is_required,
                    display_order: a.display_order,
                })
            })
            .collect();

        Ok(entries)
    }

    async fn create_field_type(&self, params: CreateFieldTypeParams) -> StoreResult<FieldType> {
        let now = chrono::Utc::now();
        let active_model = field_type::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(params.name),
            type_discriminator_id: Set(params.type_discriminator_id),
            properties: Set(serde_json::Value::Object(params.properties)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(FieldType::from(model))
    }

    async fn find_field_type(&self, id: Uuid) -> StoreResult<Option<FieldType>> {
        let result = field_type::Entity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(FieldType::from))
    }

    async fn update_field_type(&self, params: UpdateFieldTypeParams) -> StoreResult<FieldType> {
        let existing = field_type::Entity::find_by_id(params.id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::RowNotFound)?;

        let mut active: field_type::ActiveModel = existing.into();
        active.name = Set(params.name);
        active.type_discriminator_id = Set(params.type_discriminator_id);
        active.properties = Set(serde_json::Value::Object(params.properties));
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(FieldType::from(model))
    }

    async fn delete_field_type(&self, id: Uuid) -> StoreResult<()> {
        let result = field_type::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(())
    }

    async fn list_field_types(&self) -> StoreResult<Vec<FieldType>> {
        let models = field_type::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(FieldType::from).collect())
    }

    async fn create_discriminator(
        &self,
        params: CreateDiscriminatorParams,
    ) -> StoreResult<FieldTypeDiscriminator> {
        let active_model = field_type_discriminator::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(params.name),
            description: Set(params.description),
            validation_schema: Set(serde_json::Value::Object(params.validation_schema)),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(FieldTypeDiscriminator::from(model))
    }

    async fn find_discriminator(
        &self,
        id: Uuid,
    ) -> StoreResult<Option<FieldTypeDiscriminator>> {
        let result = field_type_discriminator::Entity::find_by_id(id)
            .one(&self.db)
            .await?;
        Ok(result.map(FieldTypeDiscriminator::from))
    }

    async fn update_discriminator(
        &self,
        params: UpdateDiscriminatorParams,
    ) -> StoreResult<FieldTypeDiscriminator> {
        let existing = field_type_discriminator::Entity::find_by_id(params.id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::RowNotFound)?;

        let mut active: field_type_discriminator::ActiveModel = existing.into();
        active.name = Set(params.name);
        active.description = Set(params.description);
        active.validation_schema = Set(serde_json::Value::Object(params.validation_schema));

        let model = active.update(&self.db).await?;
        Ok(FieldTypeDiscriminator::from(model))
    }

    async fn delete_discriminator(&self, id: Uuid) -> StoreResult<()> {
        let result = field_type_discriminator::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::RowNotFound);
        }

        Ok(())
    }

    async fn list_discriminators(&self) -> StoreResult<Vec<FieldTypeDiscriminator>> {
        let models = field_type_discriminator::Entity::find().all(&self.db).await?;
        Ok(models
            .into_iter()
            .map(FieldTypeDiscriminator::from)
            .collect())
    }
}
