//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::web::handlers::category_handler::{
    AssignFieldRequest, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::web::handlers::discriminator_handler::{
    CreateDiscriminatorRequest, UpdateDiscriminatorRequest,
};
use crate::web::handlers::field_handler::{CreateFieldRequest, UpdateFieldRequest};
use crate::web::handlers::field_type_handler::{CreateFieldTypeRequest, UpdateFieldTypeRequest};
use domain::{Category, CategoryField, CategoryFieldEntry, Field, FieldType, FieldTypeDiscriminator};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::handlers::health_handler::health,
        crate::web::handlers::category_handler::create_category,
        crate::web::handlers::category_handler::list_categories,
        crate::web::handlers::category_handler::get_category,
        crate::web::handlers::category_handler::update_category,
        crate::web::handlers::category_handler::delete_category,
        crate::web::handlers::category_handler::assign_field,
        crate::web::handlers::category_handler::get_category_fields,
        crate::web::handlers::field_handler::create_field,
        crate::web::handlers::field_handler::list_fields,
        crate::web::handlers::field_handler::get_field,
        crate::web::handlers::field_handler::update_field,
        crate::web::handlers::field_handler::delete_field,
        crate::web::handlers::field_type_handler::create_field_type,
        crate::web::handlers::field_type_handler::list_field_types,
        crate::web::handlers::field_type_handler::get_field_type,
        crate::web::handlers::field_type_handler::update_field_type,
        crate::web::handlers::field_type_handler::delete_field_type,
        crate::web::handlers::discriminator_handler::create_discriminator,
        crate::web::handlers::discriminator_handler::list_discriminators,
        crate::web::handlers::discriminator_handler::get_discriminator,
        crate::web::handlers::discriminator_handler::update_discriminator,
        crate::web::handlers::discriminator_handler::delete_discriminator,
    ),
    components(
        schemas(
            Category,
            Field,
            FieldType,
            FieldTypeDiscriminator,
            CategoryField,
            CategoryFieldEntry,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            AssignFieldRequest,
            CreateFieldRequest,
            UpdateFieldRequest,
            CreateFieldTypeRequest,
            UpdateFieldTypeRequest,
            CreateDiscriminatorRequest,
            UpdateDiscriminatorRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Categories", description = "Category management and field assignment"),
        (name = "Fields", description = "Field definitions"),
        (name = "Field Types", description = "Reusable value-type definitions"),
        (name = "Discriminators", description = "Field type kind descriptors"),
    )
)]
pub struct ApiDoc;
