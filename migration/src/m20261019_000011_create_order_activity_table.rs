use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000009_create_order_table::Order;

static FK_ORDER_ACTIVITY_ORDER_ID: &str = "fk_order_activity_order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderActivity::Id))
                    .col(integer(OrderActivity::OrderId))
                    .col(string(OrderActivity::Status))
                    .col(timestamp(OrderActivity::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORDER_ACTIVITY_ORDER_ID)
                    .from_tbl(OrderActivity::Table)
                    .from_col(OrderActivity::OrderId)
                    .to_tbl(Order::Table)
                    .to_col(Order::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ORDER_ACTIVITY_ORDER_ID)
                    .table(OrderActivity::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OrderActivity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OrderActivity {
    Table,
    Id,
    OrderId,
    Status,
    CreatedAt,
}
