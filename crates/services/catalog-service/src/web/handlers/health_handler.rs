//! Health check handler.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;

use crate::web::state::AppState;

/// Create health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    storage: StorageStatus,
}

/// Storage backend status
#[derive(Serialize)]
pub struct StorageStatus {
    backend: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check with storage connectivity probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Storage backend is unreachable")
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match &state.database {
        Some(db) => match db.ping().await {
            Ok(_) => StorageStatus {
                backend: "postgres",
                status: "healthy",
                error: None,
            },
            Err(e) => StorageStatus {
                backend: "postgres",
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        },
        // The in-memory store has no connection to lose.
        None => StorageStatus {
            backend: "memory",
            status: "healthy",
            error: None,
        },
    };

    let healthy = storage.status == "healthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        storage,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
