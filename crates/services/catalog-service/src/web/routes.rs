//! Route configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::web::handlers::{
    category_routes, discriminator_routes, field_routes, field_type_routes, health_routes,
};
use crate::web::openapi::ApiDoc;
use crate::web::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Catalog API
        .nest("/api/v1/categories", category_routes())
        .nest("/api/v1/fields", field_routes())
        .nest("/api/v1/field-types", field_type_routes())
        .nest("/api/v1/field-type-discriminators", discriminator_routes())
        .with_state(state)
}
