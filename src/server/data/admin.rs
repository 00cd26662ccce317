use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    /// Creates a new instance of [`AdminRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find_by_id(id).one(self.db).await
    }

    /// Finds admins by id, deleted admins included
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::admin::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Admins assigned to the pharmacy, deleted admins included
    pub async fn get_by_pharmacy(&self, pharmacy_id: i32) -> Result<Vec<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::PharmacyId.eq(pharmacy_id))
            .all(self.db)
            .await
    }

    /// Live admins assigned to the pharmacy, in id order
    pub async fn get_live_by_pharmacy(
        &self,
        pharmacy_id: i32,
    ) -> Result<Vec<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::PharmacyId.eq(pharmacy_id))
            .filter(entity::admin::Column::DeletedAt.is_null())
            .order_by_asc(entity::admin::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of live admins, optionally only those with or without a pharmacy
    pub async fn count_live(&self, assigned: Option<bool>) -> Result<u64, DbErr> {
        let mut query =
            entity::prelude::Admin::find().filter(entity::admin::Column::DeletedAt.is_null());

        query = match assigned {
            Some(true) => query.filter(entity::admin::Column::PharmacyId.is_not_null()),
            Some(false) => query.filter(entity::admin::Column::PharmacyId.is_null()),
            None => query,
        };

        query.count(self.db).await
    }

    /// Number of live admins assigned to the pharmacy
    pub async fn count_live_by_pharmacy(&self, pharmacy_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::PharmacyId.eq(pharmacy_id))
            .filter(entity::admin::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Moves the admins to the pharmacy
    pub async fn assign(&self, ids: &[i32], pharmacy_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Admin::update_many()
            .col_expr(entity::admin::Column::PharmacyId, Expr::value(pharmacy_id))
            .filter(entity::admin::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Clears the admin's pharmacy
    pub async fn unassign(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Admin::update_many()
            .col_expr(entity::admin::Column::PharmacyId, Expr::value(None::<i32>))
            .filter(entity::admin::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the pharmacy of every admin assigned to it
    pub async fn unassign_by_pharmacy(&self, pharmacy_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Admin::update_many()
            .col_expr(entity::admin::Column::PharmacyId, Expr::value(None::<i32>))
            .filter(entity::admin::Column::PharmacyId.eq(pharmacy_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
