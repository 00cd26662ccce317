use sea_orm_migration::prelude::*;

/// Partial unique indexes backing the single main pharmacy, single main unit per
/// product and single thumbnail per product rules. PostgreSQL only.
#[derive(DeriveMigrationName)]
pub struct Migration;

static UP: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_pharmacy_main \
     ON pharmacy (is_main) WHERE is_main AND deleted_at IS NULL",
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_unit_product_main \
     ON unit_product (product_id) WHERE is_main AND deleted_at IS NULL",
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_product_image_thumbnail \
     ON product_image (product_id) WHERE is_thumbnail",
];

static DOWN: &[&str] = &[
    "DROP INDEX IF EXISTS uniq_product_image_thumbnail",
    "DROP INDEX IF EXISTS uniq_unit_product_main",
    "DROP INDEX IF EXISTS uniq_pharmacy_main",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for stmt in UP {
            db.execute_unprepared(stmt).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for stmt in DOWN {
            db.execute_unprepared(stmt).await?;
        }

        Ok(())
    }
}
