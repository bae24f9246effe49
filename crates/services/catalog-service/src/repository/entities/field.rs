//! Field database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Field;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fields")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub field_type_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Field {
    fn from(model: Model) -> Self {
        Field {
            id: model.id,
            name: model.name,
            description: model.description,
            field_type_id: model.field_type_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
