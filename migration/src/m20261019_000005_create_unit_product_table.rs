use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000003_create_product_table::Product;

static IDX_UNIT_PRODUCT_PRODUCT_ID: &str = "idx_unit_product_product_id";
static FK_UNIT_PRODUCT_PRODUCT_ID: &str = "fk_unit_product_product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(UnitProduct::Id))
                    .col(integer(UnitProduct::ProductId))
                    .col(string(UnitProduct::Name))
                    .col(boolean(UnitProduct::IsMain).default(false))
                    .col(double(UnitProduct::RatioToMain))
                    .col(double(UnitProduct::Weight))
                    .col(big_integer(UnitProduct::Price))
                    .col(timestamp(UnitProduct::CreatedAt))
                    .col(timestamp(UnitProduct::UpdatedAt))
                    .col(timestamp_null(UnitProduct::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_UNIT_PRODUCT_PRODUCT_ID)
                    .table(UnitProduct::Table)
                    .col(UnitProduct::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_UNIT_PRODUCT_PRODUCT_ID)
                    .from_tbl(UnitProduct::Table)
                    .from_col(UnitProduct::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_UNIT_PRODUCT_PRODUCT_ID)
                    .table(UnitProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_UNIT_PRODUCT_PRODUCT_ID)
                    .table(UnitProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UnitProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UnitProduct {
    Table,
    Id,
    ProductId,
    Name,
    IsMain,
    RatioToMain,
    Weight,
    Price,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
