use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000001_create_pharmacy_table::Pharmacy,
    m20261019_000003_create_product_table::Product,
};

static IDX_STOCK_PHARMACY_ID: &str = "idx_stock_pharmacy_id";
static FK_STOCK_PRODUCT_ID: &str = "fk_stock_product_id";
static FK_STOCK_PHARMACY_ID: &str = "fk_stock_pharmacy_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stock::Table)
                    .if_not_exists()
                    .col(integer(Stock::ProductId))
                    .col(integer(Stock::PharmacyId))
                    .col(integer(Stock::Quantity).default(0))
                    .col(timestamp(Stock::CreatedAt))
                    .col(timestamp(Stock::UpdatedAt))
                    .col(timestamp_null(Stock::DeletedAt))
                    .primary_key(
                        Index::create()
                            .col(Stock::ProductId)
                            .col(Stock::PharmacyId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STOCK_PHARMACY_ID)
                    .table(Stock::Table)
                    .col(Stock::PharmacyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STOCK_PRODUCT_ID)
                    .from_tbl(Stock::Table)
                    .from_col(Stock::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STOCK_PHARMACY_ID)
                    .from_tbl(Stock::Table)
                    .from_col(Stock::PharmacyId)
                    .to_tbl(Pharmacy::Table)
                    .to_col(Pharmacy::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STOCK_PHARMACY_ID)
                    .table(Stock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STOCK_PRODUCT_ID)
                    .table(Stock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STOCK_PHARMACY_ID)
                    .table(Stock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Stock::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Stock {
    Table,
    ProductId,
    PharmacyId,
    Quantity,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
