use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_create_pharmacy_table::Pharmacy;

static IDX_ADMIN_PHARMACY_ID: &str = "idx_admin_pharmacy_id";
static FK_ADMIN_PHARMACY_ID: &str = "fk_admin_pharmacy_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(pk_auto(Admin::Id))
                    .col(string(Admin::FullName))
                    .col(integer_null(Admin::PharmacyId))
                    .col(timestamp(Admin::CreatedAt))
                    .col(timestamp_null(Admin::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ADMIN_PHARMACY_ID)
                    .table(Admin::Table)
                    .col(Admin::PharmacyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ADMIN_PHARMACY_ID)
                    .from_tbl(Admin::Table)
                    .from_col(Admin::PharmacyId)
                    .to_tbl(Pharmacy::Table)
                    .to_col(Pharmacy::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ADMIN_PHARMACY_ID)
                    .table(Admin::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ADMIN_PHARMACY_ID)
                    .table(Admin::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admin {
    Table,
    Id,
    FullName,
    PharmacyId,
    CreatedAt,
    DeletedAt,
}
