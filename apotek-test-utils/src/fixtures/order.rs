//! Order and cart fixture utilities.
//!
//! Orders are created only to be referenced by the delete cascade; their own lifecycle is
//! not exercised.

use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn order<'a>(&'a self) -> OrderFixtures<'a> {
        OrderFixtures { setup: self }
    }
}

pub struct OrderFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> OrderFixtures<'a> {
    pub async fn insert_order(&self, status: OrderStatus) -> Result<entity::order::Model, TestError> {
        let now = Utc::now().naive_utc();

        let order = entity::order::ActiveModel {
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(order.insert(&self.setup.db).await?)
    }

    pub async fn insert_order_stock(
        &self,
        order_id: i32,
        product_id: i32,
        pharmacy_id: i32,
        unit_id: i32,
    ) -> Result<entity::order_stock::Model, TestError> {
        let order_stock = entity::order_stock::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            product_id: ActiveValue::Set(product_id),
            pharmacy_id: ActiveValue::Set(pharmacy_id),
            unit_id: ActiveValue::Set(unit_id),
            quantity: ActiveValue::Set(1),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(order_stock.insert(&self.setup.db).await?)
    }

    /// Insert an order with a single line for the given stock and unit
    pub async fn insert_order_for(
        &self,
        product_id: i32,
        pharmacy_id: i32,
        unit_id: i32,
        status: OrderStatus,
    ) -> Result<(entity::order::Model, entity::order_stock::Model), TestError> {
        let order = self.insert_order(status).await?;
        let order_stock = self
            .insert_order_stock(order.id, product_id, pharmacy_id, unit_id)
            .await?;

        Ok((order, order_stock))
    }

    pub async fn insert_cart(
        &self,
        product_id: i32,
        pharmacy_id: i32,
        unit_id: i32,
    ) -> Result<entity::cart::Model, TestError> {
        let cart = entity::cart::ActiveModel {
            account_id: ActiveValue::Set(1),
            product_id: ActiveValue::Set(product_id),
            pharmacy_id: ActiveValue::Set(pharmacy_id),
            unit_id: ActiveValue::Set(unit_id),
            quantity: ActiveValue::Set(2),
            ..Default::default()
        };

        Ok(cart.insert(&self.setup.db).await?)
    }
}
