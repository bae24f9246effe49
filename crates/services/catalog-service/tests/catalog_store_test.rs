//! End-to-end catalog tests against the in-memory store.
//!
//! Exercises the service and store together: create/get round-trips, parent
//! and assignment existence rules, delete-then-get, and the full
//! discriminator -> field type -> field -> assignment chain.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use catalog_service_lib::repository::MemoryCatalogStore;
use catalog_service_lib::service::{CatalogManager, CatalogService};
use domain::{
    AssignFieldParams, CatalogError, CreateCategoryParams, CreateDiscriminatorParams,
    CreateFieldParams, CreateFieldTypeParams, JsonMap, UpdateCategoryParams,
    UpdateDiscriminatorParams,
};

fn catalog() -> CatalogManager {
    CatalogManager::new(Arc::new(MemoryCatalogStore::new()))
}

fn object(json: serde_json::Value) -> JsonMap {
    json.as_object().cloned().unwrap()
}

fn category_params(name: &str, parent_id: Option<Uuid>) -> CreateCategoryParams {
    CreateCategoryParams {
        name: name.to_string(),
        description: None,
        parent_id,
    }
}

#[tokio::test]
async fn test_create_get_round_trip() {
    let catalog = catalog();

    let created = catalog
        .create_category(CreateCategoryParams {
            name: "Electronics".to_string(),
            description: Some("gadgets".to_string()),
            parent_id: None,
        })
        .await
        .unwrap();

    assert_eq!(created.parent_id, None);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = catalog.get_category(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_child_category_and_orphan() {
    let catalog = catalog();

    let electronics = catalog
        .create_category(category_params("Electronics", None))
        .await
        .unwrap();

    let phones = catalog
        .create_category(category_params("Phones", Some(electronics.id)))
        .await
        .unwrap();
    assert_eq!(phones.parent_id, Some(electronics.id));

    let orphan = catalog
        .create_category(category_params("Orphan", Some(Uuid::new_v4())))
        .await;
    assert!(orphan.unwrap_err().is_not_found());

    // The failed create must not have persisted anything.
    let names: HashSet<String> = catalog
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        HashSet::from(["Electronics".to_string(), "Phones".to_string()])
    );
}

#[tokio::test]
async fn test_list_is_stable_without_writes() {
    let catalog = catalog();

    for name in ["A", "B", "C"] {
        catalog
            .create_category(category_params(name, None))
            .await
            .unwrap();
    }

    let first: HashSet<Uuid> = catalog
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    let second: HashSet<Uuid> = catalog
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[tokio::test]
async fn test_unused_ids_are_not_found_never_internal() {
    let catalog = catalog();
    let id = Uuid::new_v4();

    assert!(catalog.get_field(id).await.unwrap_err().is_not_found());
    assert!(catalog.get_field_type(id).await.unwrap_err().is_not_found());
    assert!(catalog
        .get_discriminator(id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_update_category_is_a_full_replace() {
    let catalog = catalog();

    let parent = catalog
        .create_category(category_params("Electronics", None))
        .await
        .unwrap();
    let category = catalog
        .create_category(CreateCategoryParams {
            name: "Phones".to_string(),
            description: Some("handsets".to_string()),
            parent_id: Some(parent.id),
        })
        .await
        .unwrap();

    let updated = catalog
        .update_category(UpdateCategoryParams {
            id: category.id,
            name: "Mobile".to_string(),
            description: None,
            parent_id: None,
        })
        .await
        .unwrap();

    // Absent description/parent are cleared, not kept.
    assert_eq!(updated.name, "Mobile");
    assert_eq!(updated.description, None);
    assert_eq!(updated.parent_id, None);
    assert_eq!(updated.created_at, category.created_at);
    assert!(updated.updated_at > category.updated_at);
}

#[tokio::test]
async fn test_delete_then_get() {
    let catalog = catalog();

    let category = catalog
        .create_category(category_params("Ephemeral", None))
        .await
        .unwrap();

    catalog.delete_category(category.id).await.unwrap();

    assert!(catalog
        .get_category(category.id)
        .await
        .unwrap_err()
        .is_not_found());

    // Second delete reports the absence too.
    assert!(catalog
        .delete_category(category.id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_field_typing_chain_and_assignment() {
    let catalog = catalog();

    let discriminator = catalog
        .create_discriminator(CreateDiscriminatorParams {
            name: "string".to_string(),
            description: None,
            validation_schema: object(serde_json::json!({"type": "string"})),
        })
        .await
        .unwrap();

    let field_type = catalog
        .create_field_type(CreateFieldTypeParams {
            name: "Title".to_string(),
            type_discriminator_id: discriminator.id,
            properties: object(serde_json::json!({"maxLength": 120})),
        })
        .await
        .unwrap();
    assert_eq!(
        field_type.properties,
        object(serde_json::json!({"maxLength": 120}))
    );

    let field = catalog
        .create_field(CreateFieldParams {
            name: "title".to_string(),
            description: None,
            field_type_id: field_type.id,
        })
        .await
        .unwrap();

    let electronics = catalog
        .create_category(category_params("Electronics", None))
        .await
        .unwrap();

    catalog
        .assign_field_to_category(AssignFieldParams {
            category_id: electronics.id,
            field_id: field.id,
            is_required: true,
            display_order: 1,
        })
        .await
        .unwrap();

    let entries = catalog.get_category_fields(electronics.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].field.id, field.id);
    assert!(entries[0].is_required);
    assert_eq!(entries[0].display_order, 1);
}

#[tokio::test]
async fn test_assignment_requires_both_sides() {
    let catalog = catalog();

    let electronics = catalog
        .create_category(category_params("Electronics", None))
        .await
        .unwrap();

    // Field side missing
    let err = catalog
        .assign_field_to_category(AssignFieldParams {
            category_id: electronics.id,
            field_id: Uuid::new_v4(),
            is_required: false,
            display_order: 1,
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // Category side missing
    let field = catalog
        .create_field(CreateFieldParams {
            name: "title".to_string(),
            description: None,
            field_type_id: Uuid::new_v4(),
        })
        .await
        .unwrap();
    let err = catalog
        .assign_field_to_category(AssignFieldParams {
            category_id: Uuid::new_v4(),
            field_id: field.id,
            is_required: false,
            display_order: 1,
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_reassignment_upserts_by_natural_key() {
    let catalog = catalog();

    let category = catalog
        .create_category(category_params("Electronics", None))
        .await
        .unwrap();
    let field = catalog
        .create_field(CreateFieldParams {
            name: "title".to_string(),
            description: None,
            field_type_id: Uuid::new_v4(),
        })
        .await
        .unwrap();

    for (is_required, display_order) in [(true, 1), (false, 5)] {
        catalog
            .assign_field_to_category(AssignFieldParams {
                category_id: category.id,
                field_id: field.id,
                is_required,
                display_order,
            })
            .await
            .unwrap();
    }

    let entries = catalog.get_category_fields(category.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].is_required);
    assert_eq!(entries[0].display_order, 5);
}

#[tokio::test]
async fn test_category_fields_ordered_by_display_order() {
    let catalog = catalog();

    let category = catalog
        .create_category(category_params("Electronics", None))
        .await
        .unwrap();

    let mut field_ids = Vec::new();
    for (name, order) in [("price", 3), ("title", 1), ("brand", 2)] {
        let field = catalog
            .create_field(CreateFieldParams {
                name: name.to_string(),
                description: None,
                field_type_id: Uuid::new_v4(),
            })
            .await
            .unwrap();
        catalog
            .assign_field_to_category(AssignFieldParams {
                category_id: category.id,
                field_id: field.id,
                is_required: false,
                display_order: order,
            })
            .await
            .unwrap();
        field_ids.push((order, field.id));
    }
    field_ids.sort_by_key(|(order, _)| *order);

    let entries = catalog.get_category_fields(category.id).await.unwrap();
    let listed: Vec<Uuid> = entries.iter().map(|e| e.field.id).collect();
    let expected: Vec<Uuid> = field_ids.into_iter().map(|(_, id)| id).collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_category_fields_empty_for_unknown_category() {
    let catalog = catalog();

    // Not distinguished from an existing category with no fields.
    let entries = catalog.get_category_fields(Uuid::new_v4()).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_update_discriminator_keeps_created_at() {
    let catalog = catalog();

    let discriminator = catalog
        .create_discriminator(CreateDiscriminatorParams {
            name: "string".to_string(),
            description: None,
            validation_schema: object(serde_json::json!({"type": "string"})),
        })
        .await
        .unwrap();

    let updated = catalog
        .update_discriminator(UpdateDiscriminatorParams {
            id: discriminator.id,
            name: "text".to_string(),
            description: Some("free text".to_string()),
            validation_schema: object(serde_json::json!({"type": "string", "maxLength": 256})),
        })
        .await
        .unwrap();

    assert_eq!(updated.created_at, discriminator.created_at);
    assert_eq!(updated.name, "text");
    assert_eq!(updated.description.as_deref(), Some("free text"));
    assert_eq!(
        updated.validation_schema,
        object(serde_json::json!({"type": "string", "maxLength": 256}))
    );
}

#[tokio::test]
async fn test_invalid_input_variants() {
    let catalog = catalog();

    let err = catalog
        .create_category(category_params("", None))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput { .. }));

    let err = catalog
        .create_field_type(CreateFieldTypeParams {
            name: "Title".to_string(),
            type_discriminator_id: Uuid::nil(),
            properties: JsonMap::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput { .. }));
}
