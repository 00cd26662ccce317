use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct StockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StockRepository<'a, C> {
    /// Creates a new instance of [`StockRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an empty stock row for every `(product_id, pharmacy_id)` pair
    ///
    /// Returns the number of rows inserted.
    pub async fn insert_many(&self, pairs: Vec<(i32, i32)>) -> Result<u64, DbErr> {
        if pairs.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();
        let count = pairs.len() as u64;

        let stock = pairs
            .into_iter()
            .map(|(product_id, pharmacy_id)| entity::stock::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                pharmacy_id: ActiveValue::Set(pharmacy_id),
                quantity: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                deleted_at: ActiveValue::Set(None),
            });

        entity::prelude::Stock::insert_many(stock)
            .exec_without_returning(self.db)
            .await?;

        Ok(count)
    }

    /// Ids of every pharmacy holding a stock row for the product, deleted rows included
    pub async fn get_pharmacy_ids_with_product(&self, product_id: i32) -> Result<Vec<i32>, DbErr> {
        let stock = entity::prelude::Stock::find()
            .filter(entity::stock::Column::ProductId.eq(product_id))
            .all(self.db)
            .await?;

        Ok(stock.into_iter().map(|s| s.pharmacy_id).collect())
    }

    pub async fn get_by_pharmacy(&self, pharmacy_id: i32) -> Result<Vec<entity::stock::Model>, DbErr> {
        entity::prelude::Stock::find()
            .filter(entity::stock::Column::PharmacyId.eq(pharmacy_id))
            .all(self.db)
            .await
    }

    pub async fn get_by_product(&self, product_id: i32) -> Result<Vec<entity::stock::Model>, DbErr> {
        entity::prelude::Stock::find()
            .filter(entity::stock::Column::ProductId.eq(product_id))
            .all(self.db)
            .await
    }

    /// Soft-deletes the pharmacy's live stock rows, returning how many changed
    pub async fn soft_delete_by_pharmacy(&self, pharmacy_id: i32) -> Result<u64, DbErr> {
        self.soft_delete_where(entity::stock::Column::PharmacyId, pharmacy_id)
            .await
    }

    pub async fn soft_delete_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        self.soft_delete_where(entity::stock::Column::ProductId, product_id)
            .await
    }

    pub async fn delete_by_pharmacy(&self, pharmacy_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Stock::delete_many()
            .filter(entity::stock::Column::PharmacyId.eq(pharmacy_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Stock::delete_many()
            .filter(entity::stock::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn soft_delete_where(&self, column: entity::stock::Column, id: i32) -> Result<u64, DbErr> {
        let now = Utc::now().naive_utc();

        let result = entity::prelude::Stock::update_many()
            .col_expr(entity::stock::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::stock::Column::UpdatedAt, Expr::value(now))
            .filter(column.eq(id))
            .filter(entity::stock::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
