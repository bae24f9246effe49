//! Health endpoint tests.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;

use catalog_service_lib::repository::MemoryCatalogStore;
use catalog_service_lib::service::CatalogManager;
use catalog_service_lib::web::handlers::health_handler::health;
use catalog_service_lib::web::AppState;

#[tokio::test]
async fn test_health_reports_memory_backend_healthy() {
    let catalog = Arc::new(CatalogManager::new(Arc::new(MemoryCatalogStore::new())));
    let state = AppState::new(catalog, None);

    let (status, body) = health(State(state)).await;

    assert_eq!(status, StatusCode::OK);
    let value = serde_json::to_value(body.0).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["storage"]["backend"], "memory");
    assert_eq!(value["storage"]["status"], "healthy");
    assert!(value["storage"].get("error").is_none());
}
