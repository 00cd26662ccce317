use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::product::{CreateUnitDto, UnitPatch},
    server::data::lower_eq,
};

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    /// Creates a new instance of [`UnitRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a unit without the main flag
    pub async fn create(
        &self,
        product_id: i32,
        input: &CreateUnitDto,
    ) -> Result<entity::unit_product::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let unit = entity::unit_product::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            name: ActiveValue::Set(input.name.trim().to_string()),
            is_main: ActiveValue::Set(false),
            ratio_to_main: ActiveValue::Set(input.ratio_to_main),
            weight: ActiveValue::Set(input.weight),
            price: ActiveValue::Set(input.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        unit.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::unit_product::Model>, DbErr> {
        entity::prelude::UnitProduct::find_by_id(id).one(self.db).await
    }

    /// Number of units of the product that are not soft-deleted
    pub async fn count_live_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        entity::prelude::UnitProduct::find()
            .filter(entity::unit_product::Column::ProductId.eq(product_id))
            .filter(entity::unit_product::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Live units of the product, main unit first
    pub async fn get_live_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::unit_product::Model>, DbErr> {
        entity::prelude::UnitProduct::find()
            .filter(entity::unit_product::Column::ProductId.eq(product_id))
            .filter(entity::unit_product::Column::DeletedAt.is_null())
            .order_by_desc(entity::unit_product::Column::IsMain)
            .order_by_asc(entity::unit_product::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds live units of the product whose name matches ignoring case
    pub async fn find_live_by_name(
        &self,
        product_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Vec<entity::unit_product::Model>, DbErr> {
        let mut query = entity::prelude::UnitProduct::find()
            .filter(entity::unit_product::Column::ProductId.eq(product_id))
            .filter(entity::unit_product::Column::DeletedAt.is_null())
            .filter(lower_eq(entity::unit_product::Column::Name, name.trim()));

        if let Some(id) = exclude_id {
            query = query.filter(entity::unit_product::Column::Id.ne(id));
        }

        query.all(self.db).await
    }

    /// Applies every present patch field except the main flag
    pub async fn update(
        &self,
        unit: entity::unit_product::Model,
        patch: &UnitPatch,
    ) -> Result<entity::unit_product::Model, DbErr> {
        let mut unit_am = unit.into_active_model();

        if let Some(name) = &patch.name {
            unit_am.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(weight) = patch.weight {
            unit_am.weight = ActiveValue::Set(weight);
        }
        if let Some(price) = patch.price {
            unit_am.price = ActiveValue::Set(price);
        }
        if let Some(ratio_to_main) = patch.ratio_to_main {
            unit_am.ratio_to_main = ActiveValue::Set(ratio_to_main);
        }
        unit_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        unit_am.update(self.db).await
    }

    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::UnitProduct::update_many()
            .col_expr(
                entity::unit_product::Column::DeletedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .col_expr(entity::unit_product::Column::IsMain, Expr::value(false))
            .filter(entity::unit_product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UnitProduct::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Removes every unit of the product, deleted ones included
    pub async fn delete_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UnitProduct::delete_many()
            .filter(entity::unit_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
