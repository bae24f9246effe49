//! Field type handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::{ApiResponse, AppResult, Created, NoContent};
use domain::{CreateFieldTypeParams, FieldType, JsonMap, UpdateFieldTypeParams};

use crate::web::extractors::ValidatedJson;
use crate::web::state::AppState;

/// Field type creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldTypeRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Title")]
    pub name: String,
    pub type_discriminator_id: Uuid,
    /// Opaque properties document; may be empty but must be present
    #[schema(value_type = Object)]
    pub properties: JsonMap,
}

/// Field type update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldTypeRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub type_discriminator_id: Uuid,
    #[schema(value_type = Object)]
    pub properties: JsonMap,
}

/// Create field type routes
pub fn field_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_field_type).get(list_field_types))
        .route(
            "/:id",
            get(get_field_type)
                .put(update_field_type)
                .delete(delete_field_type),
        )
}

/// Create a new field type
#[utoipa::path(
    post,
    path = "/api/v1/field-types",
    tag = "Field Types",
    request_body = CreateFieldTypeRequest,
    responses(
        (status = 201, description = "Field type created", body = FieldType),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_field_type(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFieldTypeRequest>,
) -> AppResult<Created<FieldType>> {
    let field_type = state
        .catalog
        .create_field_type(CreateFieldTypeParams {
            name: payload.name,
            type_discriminator_id: payload.type_discriminator_id,
            properties: payload.properties,
        })
        .await?;

    Ok(Created(field_type))
}

/// List all field types
#[utoipa::path(
    get,
    path = "/api/v1/field-types",
    tag = "Field Types",
    responses(
        (status = 200, description = "All field types", body = Vec<FieldType>)
    )
)]
pub async fn list_field_types(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<FieldType>>>> {
    let field_types = state.catalog.list_field_types().await?;
    Ok(Json(ApiResponse::success(field_types)))
}

/// Get field type by ID
#[utoipa::path(
    get,
    path = "/api/v1/field-types/{id}",
    tag = "Field Types",
    params(("id" = Uuid, Path, description = "Field type ID")),
    responses(
        (status = 200, description = "Field type", body = FieldType),
        (status = 404, description = "Field type not found")
    )
)]
pub async fn get_field_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<FieldType>>> {
    let field_type = state.catalog.get_field_type(id).await?;
    Ok(Json(ApiResponse::success(field_type)))
}

/// Update field type
#[utoipa::path(
    put,
    path = "/api/v1/field-types/{id}",
    tag = "Field Types",
    params(("id" = Uuid, Path, description = "Field type ID")),
    request_body = UpdateFieldTypeRequest,
    responses(
        (status = 200, description = "Field type updated", body = FieldType),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Field type not found")
    )
)]
pub async fn update_field_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateFieldTypeRequest>,
) -> AppResult<Json<ApiResponse<FieldType>>> {
    let field_type = state
        .catalog
        .update_field_type(UpdateFieldTypeParams {
            id,
            name: payload.name,
            type_discriminator_id: payload.type_discriminator_id,
            properties: payload.properties,
        })
        .await?;

    Ok(Json(ApiResponse::success(field_type)))
}

/// Delete field type
#[utoipa::path(
    delete,
    path = "/api/v1/field-types/{id}",
    tag = "Field Types",
    params(("id" = Uuid, Path, description = "Field type ID")),
    responses(
        (status = 204, description = "Field type deleted"),
        (status = 404, description = "Field type not found")
    )
)]
pub async fn delete_field_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.catalog.delete_field_type(id).await?;
    Ok(NoContent)
}
