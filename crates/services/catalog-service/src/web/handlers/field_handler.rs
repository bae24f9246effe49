//! Field handlers.

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
use domain::{CreateFieldParams, Field, UpdateFieldParams};

use crate::web::extractors::ValidatedJson;
use crate::web::state::AppState;

/// Field creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "title")]
    pub name: String,
    pub description: Option<String>,
    pub field_type_id: Uuid,
}

/// Field update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub field_type_id: Uuid,
}

/// Create field routes
pub fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_field).get(list_fields))
        .route("/:id", get(get_field).put(update_field).delete(delete_field))
}

/// Create a new field
#[utoipa::path(
    post,
    path = "/api/v1/fields",
    tag = "Fields",
    request_body = CreateFieldRequest,
    responses(
        (status = 201, description = "Field created", body = Field),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_field(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFieldRequest>,
) -> AppResult<Created<Field>> {
    let field = state
        .catalog
        .create_field(CreateFieldParams {
            name: payload.name,
            description: payload.description,
            field_type_id: payload.field_type_id,
        })
        .await?;

    Ok(Created(field))
}

/// List all fields
#[utoipa::path(
    get,
    path = "/api/v1/fields",
    tag = "Fields",
    responses(
        (status = 200, description = "All fields", body = Vec<Field>)
    )
)]
pub async fn list_fields(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Field>>>> {
    let fields = state.catalog.list_fields().await?;
    Ok(Json(ApiResponse::success(fields)))
}

/// Get field by ID
#[utoipa::path(
    get,
    path = "/api/v1/fields/{id}",
    tag = "Fields",
    params(("id" = Uuid, Path, description = "Field ID")),
    responses(
        (status = 200, description = "Field", body = Field),
        (status = 404, description = "Field not found")
    )
)]
pub async fn get_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Field>>> {
    let field = state.catalog.get_field(id).await?;
    Ok(Json(ApiResponse::success(field)))
}

/// Update field
#[utoipa::path(
    put,
    path = "/api/v1/fields/{id}",
    tag = "Fields",
    params(("id" = Uuid, Path, description = "Field ID")),
    request_body = UpdateFieldRequest,
    responses(
        (status = 200, description = "Field updated", body = Field),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Field not found")
    )
)]
pub async fn update_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateFieldRequest>,
) -> AppResult<Json<ApiResponse<Field>>> {
    let field = state
        .catalog
        .update_field(UpdateFieldParams {
            id,
            name: payload.name,
            description: payload.description,
            field_type_id: payload.field_type_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(field)))
}

/// Delete field
#[utoipa::path(
    delete,
    path = "/api/v1/fields/{id}",
    tag = "Fields",
    params(("id" = Uuid, Path, description = "Field ID")),
    responses(
        (status = 204, description = "Field deleted"),
        (status = 404, description = "Field not found")
    )
)]
pub async fn delete_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.catalog.delete_field(id).await?;
    Ok(NoContent)
}
