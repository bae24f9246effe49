//! Field type discriminator database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::FieldTypeDiscriminator;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "field_type_discriminators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Schema document describing what a field type's properties should look
    /// like. Stored verbatim; never evaluated against actual properties.
    pub validation_schema: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for FieldTypeDiscriminator {
    fn from(model: Model) -> Self {
        FieldTypeDiscriminator {
            id: model.id,
            name: model.name,
            description: model.description,
            validation_schema: model
                .validation_schema
                .as_object()
                .cloned()
                .unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}
