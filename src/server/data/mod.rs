//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over [`ConnectionTrait`] so the
//! same queries run on a plain connection or inside the caller's transaction.

pub mod admin;
pub mod cart;
pub mod category;
pub mod image;
pub mod order;
pub mod pharmacy;
pub mod product;
pub mod stock;
pub mod unit;

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, Condition, IntoSimpleExpr,
};

/// Case-insensitive equality on a text column.
pub(crate) fn lower_eq<C: ColumnTrait>(column: C, value: &str) -> Condition {
    Condition::all().add(Expr::expr(Func::lower(column.into_simple_expr())).eq(value.to_lowercase()))
}

/// A catalog row that order lines and cart rows can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogRef {
    Pharmacy(i32),
    Product(i32),
    Unit(i32),
}
