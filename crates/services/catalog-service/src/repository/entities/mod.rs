//! SeaORM entities for the catalog tables.

pub mod category;
pub mod category_field;
pub mod field;
pub mod field_type;
pub mod field_type_discriminator;
