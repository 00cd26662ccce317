use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::data::{order::target_id, CatalogRef};

pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    /// Creates a new instance of [`CartRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Removes every cart row pointing at the catalog row
    pub async fn delete_by(&self, target: CatalogRef) -> Result<u64, DbErr> {
        let column = match target {
            CatalogRef::Pharmacy(_) => entity::cart::Column::PharmacyId,
            CatalogRef::Product(_) => entity::cart::Column::ProductId,
            CatalogRef::Unit(_) => entity::cart::Column::UnitId,
        };

        let result = entity::prelude::Cart::delete_many()
            .filter(column.eq(target_id(target)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
