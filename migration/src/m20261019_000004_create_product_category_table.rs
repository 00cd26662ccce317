use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000002_create_category_table::Category,
    m20261019_000003_create_product_table::Product,
};

static FK_PRODUCT_CATEGORY_PRODUCT_ID: &str = "fk_product_category_product_id";
static FK_PRODUCT_CATEGORY_CATEGORY_ID: &str = "fk_product_category_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductCategory::Id))
                    .col(integer(ProductCategory::ProductId))
                    .col(integer(ProductCategory::CategoryId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_CATEGORY_PRODUCT_ID)
                    .from_tbl(ProductCategory::Table)
                    .from_col(ProductCategory::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_CATEGORY_CATEGORY_ID)
                    .from_tbl(ProductCategory::Table)
                    .from_col(ProductCategory::CategoryId)
                    .to_tbl(Category::Table)
                    .to_col(Category::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_CATEGORY_CATEGORY_ID)
                    .table(ProductCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_CATEGORY_PRODUCT_ID)
                    .table(ProductCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProductCategory {
    Table,
    Id,
    ProductId,
    CategoryId,
}
