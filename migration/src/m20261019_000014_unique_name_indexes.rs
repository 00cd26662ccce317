use sea_orm_migration::prelude::*;

/// Case-insensitive unique names. Pharmacy and product names stay reserved after a soft
/// delete; unit names are unique among the live units of a product.
#[derive(DeriveMigrationName)]
pub struct Migration;

static UP: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_pharmacy_name ON pharmacy (lower(name))",
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_product_name ON product (lower(name))",
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_unit_product_name \
     ON unit_product (product_id, lower(name)) WHERE deleted_at IS NULL",
    "CREATE UNIQUE INDEX IF NOT EXISTS uniq_category_name ON category (lower(name))",
];

static DOWN: &[&str] = &[
    "DROP INDEX IF EXISTS uniq_category_name",
    "DROP INDEX IF EXISTS uniq_unit_product_name",
    "DROP INDEX IF EXISTS uniq_product_name",
    "DROP INDEX IF EXISTS uniq_pharmacy_name",
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
