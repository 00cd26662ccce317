use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000005_create_unit_product_table::UnitProduct;

static IDX_CART_PRODUCT_PHARMACY: &str = "idx_cart_product_id_pharmacy_id";
static FK_CART_UNIT_ID: &str = "fk_cart_unit_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cart::Table)
                    .if_not_exists()
                    .col(pk_auto(Cart::Id))
                    .col(integer(Cart::AccountId))
                    .col(integer(Cart::ProductId))
                    .col(integer(Cart::PharmacyId))
                    .col(integer(Cart::UnitId))
                    .col(integer(Cart::Quantity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CART_PRODUCT_PHARMACY)
                    .table(Cart::Table)
                    .col(Cart::ProductId)
                    .col(Cart::PharmacyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CART_UNIT_ID)
                    .from_tbl(Cart::Table)
                    .from_col(Cart::UnitId)
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
                    .name(FK_CART_UNIT_ID)
                    .table(Cart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CART_PRODUCT_PHARMACY)
                    .table(Cart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Cart::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Cart {
    Table,
    Id,
    AccountId,
    ProductId,
    PharmacyId,
    UnitId,
    Quantity,
}
