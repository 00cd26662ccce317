//! Singleton flags: at most one row per scope carries the flag.
//!
//! Three flags follow the same rule: the main pharmacy (scope: every live pharmacy), the
//! main unit of a product (scope: the product's live units) and the thumbnail of a product
//! (scope: the product's images). [`FlagMaintainer`] moves a flag within its scope inside
//! the caller's transaction; the partial unique indexes created by the migrations reject
//! any interleaving that would leave two holders.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::Expr,
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, IntoSimpleExpr, QueryFilter,
    QuerySelect, UpdateMany,
};

use crate::server::error::invariant::InvariantError;

/// Entity carrying a boolean flag that is unique within a scope
pub trait SingletonFlag: EntityTrait {
    /// Identifies one scope, `()` when the flag is global
    type Scope: Copy + Send + Sync;

    /// Name used in error messages
    const LABEL: &'static str;

    fn flag_column() -> impl ColumnTrait + IntoSimpleExpr;

    fn id_column() -> impl ColumnTrait + IntoSimpleExpr;

    /// Condition selecting every member of the scope
    fn scope_condition(scope: Self::Scope) -> Condition;

    fn model_id(model: &Self::Model) -> i32;

    fn is_flagged(model: &Self::Model) -> bool;

    /// Extra assignments applied to every scope member when the flag moves to `target`
    fn rebase(update: UpdateMany<Self>, _target: &Self::Model) -> UpdateMany<Self> {
        update
    }

    /// Extra assignments applied to the new holder
    fn on_promoted(update: UpdateMany<Self>) -> UpdateMany<Self> {
        update
    }
}

impl SingletonFlag for entity::pharmacy::Entity {
    type Scope = ();

    const LABEL: &'static str = "pharmacy";

    fn flag_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::pharmacy::Column::IsMain
    }

    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::pharmacy::Column::Id
    }

    fn scope_condition(_scope: ()) -> Condition {
        Condition::all().add(entity::pharmacy::Column::DeletedAt.is_null())
    }

    fn model_id(model: &entity::pharmacy::Model) -> i32 {
        model.id
    }

    fn is_flagged(model: &entity::pharmacy::Model) -> bool {
        model.is_main
    }
}

impl SingletonFlag for entity::unit_product::Entity {
    type Scope = i32;

    const LABEL: &'static str = "unit";

    fn flag_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::unit_product::Column::IsMain
    }

    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::unit_product::Column::Id
    }

    fn scope_condition(product_id: i32) -> Condition {
        Condition::all()
            .add(entity::unit_product::Column::ProductId.eq(product_id))
            .add(entity::unit_product::Column::DeletedAt.is_null())
    }

    fn model_id(model: &entity::unit_product::Model) -> i32 {
        model.id
    }

    fn is_flagged(model: &entity::unit_product::Model) -> bool {
        model.is_main
    }

    /// Re-expresses every ratio relative to the new main unit
    fn rebase(
        update: UpdateMany<Self>,
        target: &entity::unit_product::Model,
    ) -> UpdateMany<Self> {
        use sea_orm::sea_query::ExprTrait;

        update.col_expr(
            entity::unit_product::Column::RatioToMain,
            Expr::col(entity::unit_product::Column::RatioToMain).div(target.ratio_to_main),
        )
    }

    fn on_promoted(update: UpdateMany<Self>) -> UpdateMany<Self> {
        update.col_expr(entity::unit_product::Column::RatioToMain, Expr::value(1.0_f64))
    }
}

impl SingletonFlag for entity::product_image::Entity {
    type Scope = i32;

    const LABEL: &'static str = "thumbnail";

    fn flag_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::product_image::Column::IsThumbnail
    }

    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::product_image::Column::Id
    }

    fn scope_condition(product_id: i32) -> Condition {
        Condition::all().add(entity::product_image::Column::ProductId.eq(product_id))
    }

    fn model_id(model: &entity::product_image::Model) -> i32 {
        model.id
    }

    fn is_flagged(model: &entity::product_image::Model) -> bool {
        model.is_thumbnail
    }
}

pub type PharmacyMain<'a, C> = FlagMaintainer<'a, C, entity::pharmacy::Entity>;
pub type UnitMain<'a, C> = FlagMaintainer<'a, C, entity::unit_product::Entity>;
pub type ImageThumbnail<'a, C> = FlagMaintainer<'a, C, entity::product_image::Entity>;

pub struct FlagMaintainer<'a, C: ConnectionTrait, F: SingletonFlag> {
    db: &'a C,
    flag: PhantomData<F>,
}

impl<'a, C: ConnectionTrait, F: SingletonFlag> FlagMaintainer<'a, C, F> {
    /// Creates a new instance of [`FlagMaintainer`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            flag: PhantomData,
        }
    }

    /// Returns the current holder of the flag within the scope
    pub async fn holder(&self, scope: F::Scope) -> Result<Option<F::Model>, DbErr> {
        F::find()
            .filter(F::scope_condition(scope))
            .filter(F::flag_column().eq(true))
            .one(self.db)
            .await
    }

    /// Moves the flag to `target`
    ///
    /// Locks the scope rows, clears the flag on every member (applying the entity's
    /// rebase) and sets it on the target. Does nothing when the target already holds it.
    pub async fn promote(&self, scope: F::Scope, target: &F::Model) -> Result<(), DbErr> {
        if F::is_flagged(target) {
            return Ok(());
        }

        F::find()
            .filter(F::scope_condition(scope))
            .lock_exclusive()
            .all(self.db)
            .await?;

        let clear = F::update_many().col_expr(F::flag_column(), Expr::value(false));
        F::rebase(clear, target)
            .filter(F::scope_condition(scope))
            .exec(self.db)
            .await?;

        let set = F::update_many().col_expr(F::flag_column(), Expr::value(true));
        F::on_promoted(set)
            .filter(F::id_column().eq(F::model_id(target)))
            .exec(self.db)
            .await?;

        tracing::debug!(
            flag = F::LABEL,
            id = F::model_id(target),
            "Moved singleton flag"
        );

        Ok(())
    }
}

/// Rejects dropping the flag from its holder without naming a replacement
pub fn guard_demotion<F: SingletonFlag>(
    is_holder: bool,
    requested: Option<bool>,
) -> Result<(), InvariantError> {
    if is_holder && requested == Some(false) {
        return Err(InvariantError::CannotDemoteMain(F::LABEL));
    }

    Ok(())
}
