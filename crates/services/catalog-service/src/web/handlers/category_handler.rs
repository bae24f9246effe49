//! Category handlers, including field assignment.

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
    AssignFieldParams, Category, CategoryFieldEntry, CreateCategoryParams, UpdateCategoryParams,
};

use crate::web::extractors::ValidatedJson;
use crate::web::state::AppState;

/// Category creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Electronics")]
    pub name: String,
    pub description: Option<String>,
    /// Optional parent category; must exist
    pub parent_id: Option<Uuid>,
}

/// Category update request (full replace: absent fields are cleared)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
}

/// Field assignment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignFieldRequest {
    pub field_id: Uuid,
    #[serde(default)]
    pub is_required: bool,
    /// 1-based position within the category
    #[validate(range(min = 1, message = "Display order must be positive"))]
    pub display_order: i32,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/:id/fields", post(assign_field).get(get_category_fields))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Parent category not found")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<Created<Category>> {
    let category = state
        .catalog
        .create_category(CreateCategoryParams {
            name: payload.name,
            description: payload.description,
            parent_id: payload.parent_id,
        })
        .await?;

    Ok(Created(category))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories, order unspecified", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.catalog.list_categories().await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state.catalog.get_category(id).await?;
    Ok(Json(ApiResponse::success(category)))
}

/// Update category
#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state
        .catalog
        .update_category(UpdateCategoryParams {
            id,
            name: payload.name,
            description: payload.description,
            parent_id: payload.parent_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(category)))
}

/// Delete category (no cascade: children and assignments are untouched)
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.catalog.delete_category(id).await?;
    Ok(NoContent)
}

/// Assign a field to a category
#[utoipa::path(
    post,
    path = "/api/v1/categories/{id}/fields",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = AssignFieldRequest,
    responses(
        (status = 200, description = "Field assigned"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category or field not found")
    )
)]
pub async fn assign_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<AssignFieldRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .catalog
        .assign_field_to_category(AssignFieldParams {
            category_id: id,
            field_id: payload.field_id,
            is_required: payload.is_required,
            display_order: payload.display_order,
        })
        .await?;

    Ok(Json(ApiResponse::message("field assigned to category")))
}

/// List a category's assigned fields in display order
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/fields",
    tag = "Categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Assigned fields; empty for an unknown category", body = Vec<CategoryFieldEntry>)
    )
)]
pub async fn get_category_fields(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<CategoryFieldEntry>>>> {
    let entries = state.catalog.get_category_fields(id).await?;
    Ok(Json(ApiResponse::success(entries)))
}
