//! Catalog service unit tests.
//!
//! Precondition and translation behavior against a mocked repository: failed
//! checks must never reach the store, absent rows must come back as NotFound
//! with entity context, and backend failures as opaque internal errors.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use catalog_service_lib::repository::{MockCatalogRepository, StoreError};
use catalog_service_lib::service::{CatalogManager, CatalogService};
use domain::{
    AssignFieldParams, CatalogError, Category, CreateCategoryParams, CreateFieldParams,
    EntityKind, Field, FieldTypeDiscriminator, JsonMap, UpdateDiscriminatorParams,
};

fn sample_category(id: Uuid) -> Category {
    let now = Utc::now();
    Category {
        id,
        name: "Electronics".to_string(),
        description: None,
        parent_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn sample_field(id: Uuid) -> Field {
    let now = Utc::now();
    Field {
        id,
        name: "title".to_string(),
        description: None,
        field_type_id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
    }
}

fn schema(json: serde_json::Value) -> JsonMap {
    json.as_object().cloned().unwrap()
}

fn manager(repo: MockCatalogRepository) -> CatalogManager {
    CatalogManager::new(Arc::new(repo))
}

#[tokio::test]
async fn test_get_category_success() {
    let id = Uuid::new_v4();

    let mut repo = MockCatalogRepository::new();
    repo.expect_find_category()
        .with(eq(id))
        .returning(|id| Ok(Some(sample_category(id))));

    let result = manager(repo).get_category(id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, id);
}

#[tokio::test]
async fn test_get_category_not_found() {
    let id = Uuid::new_v4();

    let mut repo = MockCatalogRepository::new();
    repo.expect_find_category().returning(|_| Ok(None));

    let result = manager(repo).get_category(id).await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::NotFound {
            entity: EntityKind::Category,
            ..
        }
    ));
}

#[tokio::test]
async fn test_get_category_backend_failure_is_internal() {
    let mut repo = MockCatalogRepository::new();
    repo.expect_find_category()
        .returning(|_| Err(StoreError::Backend("connection reset".into())));

    let result = manager(repo).get_category(Uuid::new_v4()).await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::Internal { .. }
    ));
}

#[tokio::test]
async fn test_create_category_empty_name_never_reaches_store() {
    // No expectations set: any repository call would panic the mock.
    let repo = MockCatalogRepository::new();

    let result = manager(repo)
        .create_category(CreateCategoryParams {
            name: String::new(),
            description: None,
            parent_id: None,
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::InvalidInput { field: "name", .. }
    ));
}

#[tokio::test]
async fn test_create_category_missing_parent_persists_nothing() {
    let parent_id = Uuid::new_v4();

    let mut repo = MockCatalogRepository::new();
    repo.expect_find_category()
        .with(eq(parent_id))
        .returning(|_| Ok(None));
    // create_category must not be called.

    let result = manager(repo)
        .create_category(CreateCategoryParams {
            name: "Phones".to_string(),
            description: None,
            parent_id: Some(parent_id),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            entity: EntityKind::Category,
            id
        } if id == parent_id
    ));
}

#[tokio::test]
async fn test_create_category_with_existing_parent() {
    let parent_id = Uuid::new_v4();

    let mut repo = MockCatalogRepository::new();
    repo.expect_find_category()
        .with(eq(parent_id))
        .returning(|id| Ok(Some(sample_category(id))));
    repo.expect_create_category()
        .returning(|params| {
            let now = Utc::now();
            Ok(Category {
                id: Uuid::new_v4(),
                name: params.name,
                description: params.description,
                parent_id: params.parent_id,
                created_at: now,
                updated_at: now,
            })
        });

    let result = manager(repo)
        .create_category(CreateCategoryParams {
            name: "Phones".to_string(),
            description: None,
            parent_id: Some(parent_id),
        })
        .await;

    let category = result.unwrap();
    assert_eq!(category.name, "Phones");
    assert_eq!(category.parent_id, Some(parent_id));
}

#[tokio::test]
async fn test_create_field_nil_type_reference_rejected() {
    let repo = MockCatalogRepository::new();

    let result = manager(repo)
        .create_field(CreateFieldParams {
            name: "title".to_string(),
            description: None,
            field_type_id: Uuid::nil(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::InvalidInput {
            field: "fieldTypeId",
            ..
        }
    ));
}

#[tokio::test]
async fn test_assign_field_zero_display_order_rejected() {
    let repo = MockCatalogRepository::new();

    let result = manager(repo)
        .assign_field_to_category(AssignFieldParams {
            category_id: Uuid::new_v4(),
            field_id: Uuid::new_v4(),
            is_required: true,
            display_order: 0,
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::InvalidInput {
            field: "displayOrder",
            ..
        }
    ));
}

#[tokio::test]
async fn test_assign_field_missing_field_side() {
    let category_id = Uuid::new_v4();
    let field_id = Uuid::new_v4();

    let mut repo = MockCatalogRepository::new();
    repo.expect_find_category()
        .with(eq(category_id))
        .returning(|id| Ok(Some(sample_category(id))));
    repo.expect_find_field()
        .with(eq(field_id))
        .returning(|_| Ok(None));
    // assign_field must not be called.

    let result = manager(repo)
        .assign_field_to_category(AssignFieldParams {
            category_id,
            field_id,
            is_required: false,
            display_order: 1,
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::NotFound {
            entity: EntityKind::Field,
            id
        } if id == field_id
    ));
}

#[tokio::test]
async fn test_assign_field_both_sides_exist() {
    let category_id = Uuid::new_v4();
    let field_id = Uuid::new_v4();

    let mut repo = MockCatalogRepository::new();
    repo.expect_find_category()
        .with(eq(category_id))
        .returning(|id| Ok(Some(sample_category(id))));
    repo.expect_find_field()
        .with(eq(field_id))
        .returning(|id| Ok(Some(sample_field(id))));
    repo.expect_assign_field().returning(|params| {
        Ok(domain::CategoryField {
            category_id: params.category_id,
            field_id: params.field_id,
            is_required: params.is_required,
            display_order: params.display_order,
        })
    });

    let result = manager(repo)
        .assign_field_to_category(AssignFieldParams {
            category_id,
            field_id,
            is_required: true,
            display_order: 1,
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_update_discriminator_preserves_created_at() {
    let id = Uuid::new_v4();
    let original_created_at = Utc::now() - chrono::Duration::days(30);

    let mut repo = MockCatalogRepository::new();
    let created_at = original_created_at;
    repo.expect_find_discriminator()
        .with(eq(id))
        .returning(move |id| {
            Ok(Some(FieldTypeDiscriminator {
                id,
                name: "string".to_string(),
                description: None,
                validation_schema: schema(serde_json::json!({"type": "string"})),
                created_at,
            }))
        });
    repo.expect_update_discriminator().returning(|params| {
        // Simulate a store that restamps created_at; the service must undo it.
        Ok(FieldTypeDiscriminator {
            id: params.id,
            name: params.name,
            description: params.description,
            validation_schema: params.validation_schema,
            created_at: Utc::now(),
        })
    });

    let result = manager(repo)
        .update_discriminator(UpdateDiscriminatorParams {
            id,
            name: "text".to_string(),
            description: Some("free text".to_string()),
            validation_schema: schema(serde_json::json!({"type": "string", "maxLength": 256})),
        })
        .await;

    let updated = result.unwrap();
    assert_eq!(updated.name, "text");
    assert_eq!(updated.created_at, original_created_at);
}

#[tokio::test]
async fn test_delete_discriminator_checks_existence_first() {
    let id = Uuid::new_v4();

    let mut repo = MockCatalogRepository::new();
    repo.expect_find_discriminator()
        .with(eq(id))
        .returning(|_| Ok(None));
    // delete_discriminator must not be called.

    let result = manager(repo).delete_discriminator(id).await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::NotFound {
            entity: EntityKind::FieldTypeDiscriminator,
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_categories_passthrough() {
    let mut repo = MockCatalogRepository::new();
    repo.expect_list_categories().returning(|| {
        Ok(vec![
            sample_category(Uuid::new_v4()),
            sample_category(Uuid::new_v4()),
        ])
    });

    let result = manager(repo).list_categories().await;

    assert_eq!(result.unwrap().len(), 2);
}
