use sea_orm_migration::{prelude::*, schema::*};

static IDX_PRODUCT_NAME: &str = "idx_product_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(string(Product::NameMims))
                    .col(string_uniq(Product::Slug))
                    .col(string(Product::Golongan))
                    .col(string(Product::Acquisition))
                    .col(string(Product::NomorEdar))
                    .col(boolean(Product::NeedsPrescription).default(false))
                    .col(text(Product::Description))
                    .col(text(Product::Composition))
                    .col(text(Product::Dose))
                    .col(text(Product::SideEffects))
                    .col(text(Product::Indication))
                    .col(string_null(Product::Brand))
                    .col(boolean(Product::Published).default(false))
                    .col(timestamp(Product::CreatedAt))
                    .col(timestamp(Product::UpdatedAt))
                    .col(timestamp_null(Product::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_NAME)
                    .table(Product::Table)
                    .col(Product::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_NAME)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    NameMims,
    Slug,
    Golongan,
    Acquisition,
    NomorEdar,
    NeedsPrescription,
    Description,
    Composition,
    Dose,
    SideEffects,
    Indication,
    Brand,
    Published,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
