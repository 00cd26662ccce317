pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_pharmacy_table;
mod m20261019_000002_create_category_table;
mod m20261019_000003_create_product_table;
mod m20261019_000004_create_product_category_table;
mod m20261019_000005_create_unit_product_table;
mod m20261019_000006_create_product_image_table;
mod m20261019_000007_create_stock_table;
mod m20261019_000008_create_admin_table;
mod m20261019_000009_create_order_table;
mod m20261019_000010_create_order_stock_table;
mod m20261019_000011_create_order_activity_table;
mod m20261019_000012_create_cart_table;
mod m20261019_000013_singleton_flag_indexes;
mod m20261019_000014_unique_name_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_pharmacy_table::Migration),
            Box::new(m20261019_000002_create_category_table::Migration),
            Box::new(m20261019_000003_create_product_table::Migration),
            Box::new(m20261019_000004_create_product_category_table::Migration),
            Box::new(m20261019_000005_create_unit_product_table::Migration),
            Box::new(m20261019_000006_create_product_image_table::Migration),
            Box::new(m20261019_000007_create_stock_table::Migration),
            Box::new(m20261019_000008_create_admin_table::Migration),
            Box::new(m20261019_000009_create_order_table::Migration),
            Box::new(m20261019_000010_create_order_stock_table::Migration),
            Box::new(m20261019_000011_create_order_activity_table::Migration),
            Box::new(m20261019_000012_create_cart_table::Migration),
            Box::new(m20261019_000013_singleton_flag_indexes::Migration),
            Box::new(m20261019_000014_unique_name_indexes::Migration),
        ]
    }
}
