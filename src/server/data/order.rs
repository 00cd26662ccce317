use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::data::CatalogRef;

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether any order line, of any status, references the catalog row
    pub async fn is_referenced(&self, target: CatalogRef) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderStock::find()
            .filter(order_stock_column(target).eq(target_id(target)))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Ids of orders referencing the catalog row that are neither completed nor canceled
    pub async fn find_open_order_ids(&self, target: CatalogRef) -> Result<Vec<i32>, DbErr> {
        let order_ids: Vec<i32> = entity::prelude::OrderStock::find()
            .select_only()
            .column(entity::order_stock::Column::OrderId)
            .distinct()
            .filter(order_stock_column(target).eq(target_id(target)))
            .into_tuple()
            .all(self.db)
            .await?;

        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let open: Vec<i32> = entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::Id)
            .filter(entity::order::Column::Id.is_in(order_ids))
            .filter(
                entity::order::Column::Status
                    .is_not_in([OrderStatus::Completed, OrderStatus::Canceled]),
            )
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(open)
    }

    /// Appends a CANCELED activity to each order and moves it to CANCELED
    pub async fn cancel(&self, order_ids: &[i32]) -> Result<u64, DbErr> {
        if order_ids.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();

        let activities = order_ids
            .iter()
            .map(|order_id| entity::order_activity::ActiveModel {
                order_id: ActiveValue::Set(*order_id),
                status: ActiveValue::Set(OrderStatus::Canceled),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::OrderActivity::insert_many(activities)
            .exec_without_returning(self.db)
            .await?;

        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::Status,
                Expr::value(OrderStatus::Canceled),
            )
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(now))
            .filter(entity::order::Column::Id.is_in(order_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks every order line of the pharmacy as deleted
    pub async fn soft_delete_order_stock_by_pharmacy(&self, pharmacy_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderStock::update_many()
            .col_expr(
                entity::order_stock::Column::DeletedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::order_stock::Column::PharmacyId.eq(pharmacy_id))
            .filter(entity::order_stock::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn order_stock_column(target: CatalogRef) -> entity::order_stock::Column {
    match target {
        CatalogRef::Pharmacy(_) => entity::order_stock::Column::PharmacyId,
        CatalogRef::Product(_) => entity::order_stock::Column::ProductId,
        CatalogRef::Unit(_) => entity::order_stock::Column::UnitId,
    }
}

pub(crate) fn target_id(target: CatalogRef) -> i32 {
    match target {
        CatalogRef::Pharmacy(id) | CatalogRef::Product(id) | CatalogRef::Unit(id) => id,
    }
}
