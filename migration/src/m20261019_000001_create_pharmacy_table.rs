use sea_orm_migration::{prelude::*, schema::*};

static IDX_PHARMACY_NAME: &str = "idx_pharmacy_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pharmacy::Table)
                    .if_not_exists()
                    .col(pk_auto(Pharmacy::Id))
                    .col(string(Pharmacy::Name))
                    .col(text(Pharmacy::Description))
                    .col(string(Pharmacy::Picture))
                    .col(boolean(Pharmacy::IsOpen).default(false))
                    .col(boolean(Pharmacy::IsMain).default(false))
                    .col(string(Pharmacy::DetailLocation))
                    .col(double(Pharmacy::Lat))
                    .col(double(Pharmacy::Lng))
                    .col(timestamp(Pharmacy::CreatedAt))
                    .col(timestamp(Pharmacy::UpdatedAt))
                    .col(timestamp_null(Pharmacy::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PHARMACY_NAME)
                    .table(Pharmacy::Table)
                    .col(Pharmacy::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PHARMACY_NAME)
                    .table(Pharmacy::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pharmacy::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pharmacy {
    Table,
    Id,
    Name,
    Description,
    Picture,
    IsOpen,
    IsMain,
    DetailLocation,
    Lat,
    Lng,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
