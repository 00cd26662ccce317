//! Keeps the (published product × live pharmacy) stock matrix populated.

use std::collections::HashSet;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{pharmacy::PharmacyRepository, product::ProductRepository, stock::StockRepository},
    error::Error,
};

/// How rows are removed when their parent goes away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Set `deleted_at` and keep the row
    Soft,
    /// Remove the row
    Hard,
}

pub struct StockProvisioner<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StockProvisioner<'a, C> {
    /// Creates a new instance of [`StockProvisioner`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty stock row at the new pharmacy for every live published product
    ///
    /// Must run after the pharmacy row is inserted so a concurrent publish cannot miss it.
    pub async fn on_pharmacy_created(&self, pharmacy_id: i32) -> Result<u64, Error> {
        let product_ids = ProductRepository::new(self.db)
            .lock_live_published_ids()
            .await?;

        let pairs = product_ids
            .into_iter()
            .map(|product_id| (product_id, pharmacy_id))
            .collect();

        let created = StockRepository::new(self.db).insert_many(pairs).await?;

        tracing::debug!(pharmacy_id, created, "Provisioned stock for new pharmacy");

        Ok(created)
    }

    /// Creates an empty stock row for the product at every live pharmacy lacking one
    ///
    /// Calling it again creates nothing.
    pub async fn on_product_published(&self, product_id: i32) -> Result<u64, Error> {
        let stock_repo = StockRepository::new(self.db);

        let stocked: HashSet<i32> = stock_repo
            .get_pharmacy_ids_with_product(product_id)
            .await?
            .into_iter()
            .collect();

        let pairs = PharmacyRepository::new(self.db)
            .get_live_ids()
            .await?
            .into_iter()
            .filter(|pharmacy_id| !stocked.contains(pharmacy_id))
            .map(|pharmacy_id| (product_id, pharmacy_id))
            .collect();

        let created = stock_repo.insert_many(pairs).await?;

        tracing::debug!(product_id, created, "Provisioned stock for published product");

        Ok(created)
    }

    pub async fn on_pharmacy_deleted(&self, pharmacy_id: i32, mode: DeleteMode) -> Result<u64, Error> {
        let stock_repo = StockRepository::new(self.db);

        let affected = match mode {
            DeleteMode::Soft => stock_repo.soft_delete_by_pharmacy(pharmacy_id).await?,
            DeleteMode::Hard => stock_repo.delete_by_pharmacy(pharmacy_id).await?,
        };

        Ok(affected)
    }

    pub async fn on_product_deleted(&self, product_id: i32, mode: DeleteMode) -> Result<u64, Error> {
        let stock_repo = StockRepository::new(self.db);

        let affected = match mode {
            DeleteMode::Soft => stock_repo.soft_delete_by_product(product_id).await?,
            DeleteMode::Hard => stock_repo.delete_by_product(product_id).await?,
        };

        Ok(affected)
    }
}
