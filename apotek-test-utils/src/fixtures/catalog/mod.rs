//! Catalog fixture utilities.
//!
//! Inserts catalog rows directly through the entity models, bypassing the services, so
//! tests can start from any state including ones the services would never produce.

pub mod factory;

use chrono::Utc;
use entity::sea_orm_active_enums::{Acquisition, Golongan};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{constant::TEST_CDN_URL, error::TestError, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a live pharmacy, closed and without admins
    pub async fn insert_pharmacy(
        &self,
        name: &str,
        is_main: bool,
    ) -> Result<entity::pharmacy::Model, TestError> {
        let now = Utc::now().naive_utc();

        let pharmacy = entity::pharmacy::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("{} description", name)),
            picture: ActiveValue::Set(format!("{}/pharmacy/{}.png", TEST_CDN_URL, slug(name))),
            is_open: ActiveValue::Set(false),
            is_main: ActiveValue::Set(is_main),
            detail_location: ActiveValue::Set("Jl. Sudirman No. 1".to_string()),
            lat: ActiveValue::Set(-6.2),
            lng: ActiveValue::Set(106.8),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(pharmacy.insert(&self.setup.db).await?)
    }

    /// Insert a soft-deleted pharmacy
    pub async fn insert_deleted_pharmacy(
        &self,
        name: &str,
    ) -> Result<entity::pharmacy::Model, TestError> {
        let pharmacy = self.insert_pharmacy(name, false).await?;

        let mut pharmacy_am: entity::pharmacy::ActiveModel = pharmacy.into();
        pharmacy_am.deleted_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(pharmacy_am.update(&self.setup.db).await?)
    }

    pub async fn insert_category(&self, name: &str) -> Result<entity::category::Model, TestError> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("{} medicines", name)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(category.insert(&self.setup.db).await?)
    }

    /// Insert a live over-the-counter product
    pub async fn insert_product(
        &self,
        name: &str,
        published: bool,
    ) -> Result<entity::product::Model, TestError> {
        let now = Utc::now().naive_utc();

        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            name_mims: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug(name)),
            golongan: ActiveValue::Set(Golongan::ObatBebas),
            acquisition: ActiveValue::Set(Acquisition::Generik),
            nomor_edar: ActiveValue::Set("DBL0000000000A1".to_string()),
            needs_prescription: ActiveValue::Set(false),
            description: ActiveValue::Set(format!("{} description", name)),
            composition: ActiveValue::Set("Paracetamol 500 mg".to_string()),
            dose: ActiveValue::Set("3 x 1 tablet".to_string()),
            side_effects: ActiveValue::Set("Nausea".to_string()),
            indication: ActiveValue::Set("Fever".to_string()),
            brand: ActiveValue::Set(None),
            published: ActiveValue::Set(published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(product.insert(&self.setup.db).await?)
    }

    /// Insert a soft-deleted, published product
    pub async fn insert_deleted_product(
        &self,
        name: &str,
    ) -> Result<entity::product::Model, TestError> {
        let product = self.insert_product(name, true).await?;

        let mut product_am: entity::product::ActiveModel = product.into();
        product_am.deleted_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(product_am.update(&self.setup.db).await?)
    }

    pub async fn insert_product_category(
        &self,
        product_id: i32,
        category_id: i32,
    ) -> Result<entity::product_category::Model, TestError> {
        let product_category = entity::product_category::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            category_id: ActiveValue::Set(category_id),
            ..Default::default()
        };

        Ok(product_category.insert(&self.setup.db).await?)
    }

    pub async fn insert_unit(
        &self,
        product_id: i32,
        name: &str,
        is_main: bool,
        ratio_to_main: f64,
    ) -> Result<entity::unit_product::Model, TestError> {
        let now = Utc::now().naive_utc();

        let unit = entity::unit_product::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            name: ActiveValue::Set(name.to_string()),
            is_main: ActiveValue::Set(is_main),
            ratio_to_main: ActiveValue::Set(ratio_to_main),
            weight: ActiveValue::Set(10.0),
            price: ActiveValue::Set(15_000),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(unit.insert(&self.setup.db).await?)
    }

    pub async fn insert_image(
        &self,
        product_id: i32,
        is_thumbnail: bool,
    ) -> Result<entity::product_image::Model, TestError> {
        let image = entity::product_image::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            image_url: ActiveValue::Set(format!(
                "{}/product/{}/{}.png",
                TEST_CDN_URL,
                product_id,
                Utc::now().timestamp_nanos_opt().unwrap_or_default()
            )),
            is_thumbnail: ActiveValue::Set(is_thumbnail),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(image.insert(&self.setup.db).await?)
    }

    pub async fn insert_stock(
        &self,
        product_id: i32,
        pharmacy_id: i32,
        quantity: i32,
    ) -> Result<entity::stock::Model, TestError> {
        let now = Utc::now().naive_utc();

        let stock = entity::stock::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            pharmacy_id: ActiveValue::Set(pharmacy_id),
            quantity: ActiveValue::Set(quantity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        };

        Ok(stock.insert(&self.setup.db).await?)
    }

    pub async fn insert_admin(
        &self,
        pharmacy_id: Option<i32>,
    ) -> Result<entity::admin::Model, TestError> {
        let admin = entity::admin::ActiveModel {
            full_name: ActiveValue::Set("Test Admin".to_string()),
            pharmacy_id: ActiveValue::Set(pharmacy_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(admin.insert(&self.setup.db).await?)
    }

    /// Insert an admin whose account has been deleted
    pub async fn insert_deleted_admin(&self) -> Result<entity::admin::Model, TestError> {
        let admin = self.insert_admin(None).await?;

        let mut admin_am: entity::admin::ActiveModel = admin.into();
        admin_am.deleted_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(admin_am.update(&self.setup.db).await?)
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
