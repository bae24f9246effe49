//! Category-field assignment entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::CategoryField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category_fields")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub field_id: Uuid,
    pub is_required: bool,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for CategoryField {
    fn from(model: Model) -> Self {
        CategoryField {
            category_id: model.category_id,
            field_id: model.field_id,
            is_required: model.is_required,
            display_order: model.display_order,
        }
    }
}
