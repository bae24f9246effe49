//! HTTP surface: handlers, routes, extractors, OpenAPI documentation.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
