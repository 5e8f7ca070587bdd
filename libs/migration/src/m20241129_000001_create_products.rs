use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Title))
                    .col(double(Products::Price))
                    .col(string(Products::Category).default(""))
                    .col(text(Products::Description).default(""))
                    .col(string(Products::ImageUrl).default(""))
                    .to_owned(),
            )
            .await?;

        // Neither index is unique: an update may keep a title another row has
        for (name, column) in [
            ("idx_products_title", Products::Title),
            ("idx_products_category", Products::Category),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Products::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Title,
    Price,
    Category,
    Description,
    ImageUrl,
}
