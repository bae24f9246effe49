//! Field type database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::FieldType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "field_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub type_discriminator_id: Uuid,
    /// Opaque properties document, stored verbatim as JSONB.
    pub properties: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for FieldType {
    fn from(model: Model) -> Self {
        FieldType {
            id: model.id,
            name: model.name,
            type_discriminator_id: model.type_discriminator_id,
            properties: model.properties.as_object().cloned().unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
