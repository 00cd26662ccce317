use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000005_create_unit_product_table::UnitProduct,
    m20261019_000009_create_order_table::Order,
};

static IDX_ORDER_STOCK_PRODUCT_PHARMACY: &str = "idx_order_stock_product_id_pharmacy_id";
static IDX_ORDER_STOCK_PHARMACY_ID: &str = "idx_order_stock_pharmacy_id";
static FK_ORDER_STOCK_ORDER_ID: &str = "fk_order_stock_order_id";
static FK_ORDER_STOCK_UNIT_ID: &str = "fk_order_stock_unit_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderStock::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderStock::Id))
                    .col(integer(OrderStock::OrderId))
                    .col(integer(OrderStock::ProductId))
                    .col(integer(OrderStock::PharmacyId))
                    .col(integer(OrderStock::UnitId))
                    .col(integer(OrderStock::Quantity))
                    .col(timestamp_null(OrderStock::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_STOCK_PRODUCT_PHARMACY)
                    .table(OrderStock::Table)
                    .col(OrderStock::ProductId)
                    .col(OrderStock::PharmacyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_STOCK_PHARMACY_ID)
                    .table(OrderStock::Table)
                    .col(OrderStock::PharmacyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_STOCK_ORDER_ID)
                    .from_tbl(OrderStock::Table)
                    .from_col(OrderStock::OrderId)
                    .to_tbl(Order::Table)
                    .to_col(Order::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_STOCK_UNIT_ID)
                    .from_tbl(OrderStock::Table)
                    .from_col(OrderStock::UnitId)
                    .to_tbl(UnitProduct::Table)
                    .to_col(UnitProduct::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_STOCK_UNIT_ID)
                    .table(OrderStock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_STOCK_ORDER_ID)
                    .table(OrderStock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_STOCK_PHARMACY_ID)
                    .table(OrderStock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_STOCK_PRODUCT_PHARMACY)
                    .table(OrderStock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OrderStock::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OrderStock {
    Table,
    Id,
    OrderId,
    ProductId,
    PharmacyId,
    UnitId,
    Quantity,
    DeletedAt,
}
