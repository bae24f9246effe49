//! Migration: Create the catalog tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Description).text().null())
                    .col(ColumnDef::new(Categories::ParentId).uuid().null())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_categories_parent_id")
                    .table(Categories::Table)
                    .col(Categories::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FieldTypeDiscriminators::Table)
                    .col(
                        ColumnDef::new(FieldTypeDiscriminators::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FieldTypeDiscriminators::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FieldTypeDiscriminators::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FieldTypeDiscriminators::ValidationSchema)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FieldTypeDiscriminators::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FieldTypes::Table)
                    .col(ColumnDef::new(FieldTypes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(FieldTypes::Name).string().not_null())
                    .col(
                        ColumnDef::new(FieldTypes::TypeDiscriminatorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FieldTypes::Properties).json_binary().not_null())
                    .col(
                        ColumnDef::new(FieldTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FieldTypes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_field_types_discriminator")
                            .from(FieldTypes::Table, FieldTypes::TypeDiscriminatorId)
                            .to(FieldTypeDiscriminators::Table, FieldTypeDiscriminators::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Fields::Table)
                    .col(ColumnDef::new(Fields::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Fields::Name).string().not_null())
                    .col(ColumnDef::new(Fields::Description).text().null())
                    .col(ColumnDef::new(Fields::FieldTypeId).uuid().not_null())
                    .col(
                        ColumnDef::new(Fields::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Fields::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fields_field_type_id")
                    .table(Fields::Table)
                    .col(Fields::FieldTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CategoryFields::Table)
                    .col(ColumnDef::new(CategoryFields::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(CategoryFields::FieldId).uuid().not_null())
                    .col(
                        ColumnDef::new(CategoryFields::IsRequired)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CategoryFields::DisplayOrder)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CategoryFields::CategoryId)
                            .col(CategoryFields::FieldId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_fields_category")
                            .from(CategoryFields::Table, CategoryFields::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_fields_field")
                            .from(CategoryFields::Table, CategoryFields::FieldId)
                            .to(Fields::Table, Fields::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_category_fields_field_id")
                    .table(CategoryFields::Table)
                    .col(CategoryFields::FieldId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryFields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FieldTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FieldTypeDiscriminators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
    ParentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Fields {
    Table,
    Id,
    Name,
    Description,
    FieldTypeId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum FieldTypes {
    Table,
    Id,
    Name,
    TypeDiscriminatorId,
    Properties,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum FieldTypeDiscriminators {
    Table,
    Id,
    Name,
    Description,
    ValidationSchema,
    CreatedAt,
}

#[derive(Iden)]
enum CategoryFields {
    Table,
    CategoryId,
    FieldId,
    IsRequired,
    DisplayOrder,
}
