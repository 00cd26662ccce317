//! Delete cascades for pharmacies, products, units and product images.
//!
//! A row referenced by any order line is soft-deleted: it keeps its history, open orders
//! referencing it are canceled and its stock is marked deleted. Unreferenced rows are
//! hard-deleted along with their children. Carts pointing at the row are purged either
//! way. Media files are never touched here: URLs freed by a hard delete are returned so
//! the caller can remove them once the transaction has committed.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        admin::AdminRepository, cart::CartRepository, category::ProductCategoryRepository,
        image::ProductImageRepository, order::OrderRepository, pharmacy::PharmacyRepository,
        product::ProductRepository, unit::UnitRepository, CatalogRef,
    },
    error::{invariant::InvariantError, lookup::LookupError, Error},
    service::stock::{DeleteMode, StockProvisioner},
};

/// What a cascade did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CascadeOutcome {
    pub soft_deleted: bool,
    pub canceled_orders: u64,
    pub unassigned_admins: u64,
    /// Media URLs no longer referenced by any row
    pub orphaned_media: Vec<String>,
}

pub struct CascadeDeleter<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CascadeDeleter<'a, C> {
    /// Creates a new instance of [`CascadeDeleter`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn delete_pharmacy(
        &self,
        pharmacy: &entity::pharmacy::Model,
    ) -> Result<CascadeOutcome, Error> {
        if pharmacy.is_main {
            return Err(InvariantError::CannotDeleteMainPharmacy.into());
        }

        let target = CatalogRef::Pharmacy(pharmacy.id);
        let order_repo = OrderRepository::new(self.db);
        let stock = StockProvisioner::new(self.db);

        let mut outcome = CascadeOutcome {
            soft_deleted: order_repo.is_referenced(target).await?,
            ..Default::default()
        };

        CartRepository::new(self.db).delete_by(target).await?;
        outcome.unassigned_admins = AdminRepository::new(self.db)
            .unassign_by_pharmacy(pharmacy.id)
            .await?;

        let pharmacy_repo = PharmacyRepository::new(self.db);
        if outcome.soft_deleted {
            outcome.canceled_orders = self.cancel_open_orders(target).await?;
            stock
                .on_pharmacy_deleted(pharmacy.id, DeleteMode::Soft)
                .await?;
            order_repo
                .soft_delete_order_stock_by_pharmacy(pharmacy.id)
                .await?;
            pharmacy_repo.soft_delete(pharmacy.id).await?;
        } else {
            stock
                .on_pharmacy_deleted(pharmacy.id, DeleteMode::Hard)
                .await?;
            pharmacy_repo.delete(pharmacy.id).await?;
            outcome.orphaned_media.push(pharmacy.picture.clone());
        }

        tracing::info!(
            pharmacy_id = pharmacy.id,
            soft_deleted = outcome.soft_deleted,
            canceled_orders = outcome.canceled_orders,
            "Deleted pharmacy"
        );

        Ok(outcome)
    }

    /// Published products and products referenced by orders are soft-deleted
    pub async fn delete_product(
        &self,
        product: &entity::product::Model,
    ) -> Result<CascadeOutcome, Error> {
        let target = CatalogRef::Product(product.id);
        let stock = StockProvisioner::new(self.db);

        let referenced = OrderRepository::new(self.db).is_referenced(target).await?;
        let mut outcome = CascadeOutcome {
            soft_deleted: product.published || referenced,
            ..Default::default()
        };

        CartRepository::new(self.db).delete_by(target).await?;

        let product_repo = ProductRepository::new(self.db);
        if outcome.soft_deleted {
            outcome.canceled_orders = self.cancel_open_orders(target).await?;
            stock.on_product_deleted(product.id, DeleteMode::Soft).await?;
            product_repo.soft_delete(product.id).await?;
        } else {
            stock.on_product_deleted(product.id, DeleteMode::Hard).await?;
            ProductCategoryRepository::new(self.db)
                .delete_by_product(product.id)
                .await?;
            UnitRepository::new(self.db)
                .delete_by_product(product.id)
                .await?;
            outcome.orphaned_media = ProductImageRepository::new(self.db)
                .delete_by_product(product.id)
                .await?;
            product_repo.delete(product.id).await?;
        }

        tracing::info!(
            product_id = product.id,
            soft_deleted = outcome.soft_deleted,
            canceled_orders = outcome.canceled_orders,
            "Deleted product"
        );

        Ok(outcome)
    }

    pub async fn delete_unit(
        &self,
        product: &entity::product::Model,
        unit: &entity::unit_product::Model,
    ) -> Result<CascadeOutcome, Error> {
        let unit_repo = UnitRepository::new(self.db);
        let live_units = unit_repo.count_live_by_product(product.id).await?;

        if unit.is_main && live_units > 1 {
            return Err(InvariantError::CannotDeleteMainUnit.into());
        }
        if product.published && live_units <= 1 {
            return Err(InvariantError::CannotDeleteLastUnit.into());
        }

        let target = CatalogRef::Unit(unit.id);

        let mut outcome = CascadeOutcome {
            soft_deleted: OrderRepository::new(self.db).is_referenced(target).await?,
            ..Default::default()
        };

        CartRepository::new(self.db).delete_by(target).await?;

        if outcome.soft_deleted {
            outcome.canceled_orders = self.cancel_open_orders(target).await?;
            unit_repo.soft_delete(unit.id).await?;
        } else {
            unit_repo.delete(unit.id).await?;
        }

        tracing::info!(
            unit_id = unit.id,
            soft_deleted = outcome.soft_deleted,
            "Deleted unit"
        );

        Ok(outcome)
    }

    /// Images are never referenced by orders so the row is always removed
    pub async fn delete_image(
        &self,
        product: &entity::product::Model,
        image: &entity::product_image::Model,
    ) -> Result<CascadeOutcome, Error> {
        if product.deleted_at.is_some() {
            return Err(LookupError::ProductGone(product.id).into());
        }

        let image_repo = ProductImageRepository::new(self.db);
        let image_count = image_repo.count_by_product(product.id).await?;

        if image.is_thumbnail && image_count > 1 {
            return Err(InvariantError::CannotDeleteThumbnail.into());
        }
        if product.published && image.is_thumbnail {
            return Err(InvariantError::CannotDeletePublishedThumbnail.into());
        }
        if product.published && image_count <= 1 {
            return Err(InvariantError::CannotDeleteLastImage.into());
        }

        image_repo.delete(image.id).await?;

        tracing::info!(image_id = image.id, product_id = product.id, "Deleted product image");

        Ok(CascadeOutcome {
            orphaned_media: vec![image.image_url.clone()],
            ..Default::default()
        })
    }

    async fn cancel_open_orders(&self, target: CatalogRef) -> Result<u64, Error> {
        let order_repo = OrderRepository::new(self.db);

        let order_ids = order_repo.find_open_order_ids(target).await?;
        let canceled = order_repo.cancel(&order_ids).await?;

        Ok(canceled)
    }
}
