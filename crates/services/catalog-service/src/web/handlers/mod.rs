//! HTTP handlers, grouped per entity.

pub mod category_handler;
pub mod discriminator_handler;
pub mod field_handler;
pub mod field_type_handler;
pub mod health_handler;

pub use category_handler::category_routes;
pub use discriminator_handler::discriminator_routes;
pub use field_handler::field_routes;
pub use field_type_handler::field_type_routes;
pub use health_handler::health_routes;
