use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000003_create_product_table::Product;

static IDX_PRODUCT_IMAGE_PRODUCT_ID: &str = "idx_product_image_product_id";
static FK_PRODUCT_IMAGE_PRODUCT_ID: &str = "fk_product_image_product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductImage::Id))
                    .col(integer(ProductImage::ProductId))
                    .col(string(ProductImage::ImageUrl))
                    .col(boolean(ProductImage::IsThumbnail).default(false))
                    .col(timestamp(ProductImage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_IMAGE_PRODUCT_ID)
                    .table(ProductImage::Table)
                    .col(ProductImage::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_IMAGE_PRODUCT_ID)
                    .from_tbl(ProductImage::Table)
                    .from_col(ProductImage::ProductId)
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
                    .name(FK_PRODUCT_IMAGE_PRODUCT_ID)
                    .table(ProductImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_IMAGE_PRODUCT_ID)
                    .table(ProductImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProductImage {
    Table,
    Id,
    ProductId,
    ImageUrl,
    IsThumbnail,
    CreatedAt,
}
