//! Field type discriminator handlers.

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
use domain::{
    CreateDiscriminatorParams, FieldTypeDiscriminator, JsonMap, UpdateDiscriminatorParams,
};

use crate::web::extractors::ValidatedJson;
use crate::web::state::AppState;

/// Discriminator creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiscriminatorRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "string")]
    pub name: String,
    pub description: Option<String>,
    /// Schema describing the properties a field type of this kind expects
    #[schema(value_type = Object)]
    pub validation_schema: JsonMap,
}

/// Discriminator update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiscriminatorRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Object)]
    pub validation_schema: JsonMap,
}

/// Create discriminator routes
pub fn discriminator_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_discriminator).get(list_discriminators))
        .route(
            "/:id",
            get(get_discriminator)
                .put(update_discriminator)
                .delete(delete_discriminator),
        )
}

/// Create a new field type discriminator
#[utoipa::path(
    post,
    path = "/api/v1/field-type-discriminators",
    tag = "Discriminators",
    request_body = CreateDiscriminatorRequest,
    responses(
        (status = 201, description = "Discriminator created", body = FieldTypeDiscriminator),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_discriminator(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDiscriminatorRequest>,
) -> AppResult<Created<FieldTypeDiscriminator>> {
    let discriminator = state
        .catalog
        .create_discriminator(CreateDiscriminatorParams {
            name: payload.name,
            description: payload.description,
            validation_schema: payload.validation_schema,
        })
        .await?;

    Ok(Created(discriminator))
}

/// List all discriminators
#[utoipa::path(
    get,
    path = "/api/v1/field-type-discriminators",
    tag = "Discriminators",
    responses(
        (status = 200, description = "All discriminators", body = Vec<FieldTypeDiscriminator>)
    )
)]
pub async fn list_discriminators(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<FieldTypeDiscriminator>>>> {
    let discriminators = state.catalog.list_discriminators().await?;
    Ok(Json(ApiResponse::success(discriminators)))
}

/// Get discriminator by ID
#[utoipa::path(
    get,
    path = "/api/v1/field-type-discriminators/{id}",
    tag = "Discriminators",
    params(("id" = Uuid, Path, description = "Discriminator ID")),
    responses(
        (status = 200, description = "Discriminator", body = FieldTypeDiscriminator),
        (status = 404, description = "Discriminator not found")
    )
)]
pub async fn get_discriminator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<FieldTypeDiscriminator>>> {
    let discriminator = state.catalog.get_discriminator(id).await?;
    Ok(Json(ApiResponse::success(discriminator)))
}

/// Update discriminator (original createdAt is preserved)
#[utoipa::path(
    put,
    path = "/api/v1/field-type-discriminators/{id}",
    tag = "Discriminators",
    params(("id" = Uuid, Path, description = "Discriminator ID")),
    request_body = UpdateDiscriminatorRequest,
    responses(
        (status = 200, description = "Discriminator updated", body = FieldTypeDiscriminator),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Discriminator not found")
    )
)]
pub async fn update_discriminator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateDiscriminatorRequest>,
) -> AppResult<Json<ApiResponse<FieldTypeDiscriminator>>> {
    let discriminator = state
        .catalog
        .update_discriminator(UpdateDiscriminatorParams {
            id,
            name: payload.name,
            description: payload.description,
            validation_schema: payload.validation_schema,
        })
        .await?;

    Ok(Json(ApiResponse::success(discriminator)))
}

/// Delete discriminator
#[utoipa::path(
    delete,
    path = "/api/v1/field-type-discriminators/{id}",
    tag = "Discriminators",
    params(("id" = Uuid, Path, description = "Discriminator ID")),
    responses(
        (status = 204, description = "Discriminator deleted"),
        (status = 404, description = "Discriminator not found")
    )
)]
pub async fn delete_discriminator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.catalog.delete_discriminator(id).await?;
    Ok(NoContent)
}
