//! Catalog Service Library
//!
//! HTTP service for the marketplace catalog: categories, fields, field types,
//! field type discriminators, and category-field assignments. Can run against
//! Postgres or an in-memory store selected at startup.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;
pub mod web;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{CatalogServiceConfig, StorageBackend};
use crate::infra::Database;
use crate::repository::{CatalogRepository, CatalogStore, MemoryCatalogStore};
use crate::service::CatalogManager;
use crate::web::{create_router, AppState};

/// Run the HTTP server with configuration from the environment.
pub async fn run(host: &str, port: u16, storage: Option<StorageBackend>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CatalogServiceConfig::from_env();
    if let Some(storage) = storage {
        config.storage = storage;
    }
    run_server_with_config(host, port, config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database_url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: CatalogServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Compose the storage backend; selection happens here only. The health
    // probe keeps a handle to the database when there is one.
    let (repo, database): (Arc<dyn CatalogRepository>, Option<Database>) = match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory catalog store");
            (Arc::new(MemoryCatalogStore::new()), None)
        }
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database_url).await?;
            (Arc::new(CatalogStore::new(db.get_connection())), Some(db))
        }
    };

    let catalog = Arc::new(CatalogManager::new(repo));
    let state = AppState::new(catalog, database);

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Catalog service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
