use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::ApiResponse, product::ProductImageDto},
    server::{
        data::{image::ProductImageRepository, product::ProductRepository},
        error::{invariant::InvariantError, lookup::LookupError, Error},
        media::{MediaClient, MediaFile},
        service::{cascade::CascadeDeleter, flag::ImageThumbnail, validation::Validator},
    },
};

/// Most images a product may carry
pub const MAX_IMAGES_PER_PRODUCT: u64 = 5;

pub struct ProductImageService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaClient,
}

impl<'a> ProductImageService<'a> {
    /// Creates a new instance of [`ProductImageService`]
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaClient) -> Self {
        Self { db, media }
    }

    /// Uploads an image and attaches it to the product
    ///
    /// The first image of a product becomes its thumbnail, as does any image uploaded
    /// with `is_thumbnail`. The uploaded file is removed again if the insert fails.
    pub async fn upload_product_image(
        &self,
        product_id: i32,
        file: MediaFile,
        is_thumbnail: bool,
    ) -> Result<ApiResponse<ProductImageDto>, Error> {
        self.check_capacity(self.db, product_id).await?;

        let image_url = self.media.upload(file).await?;

        let result = self
            .insert_image(product_id, image_url.clone(), is_thumbnail)
            .await;
        if result.is_err() {
            self.media.remove_best_effort(&[image_url]).await;
        }
        let image = result?;

        tracing::info!(
            image_id = image.id,
            product_id,
            is_thumbnail = image.is_thumbnail,
            "Uploaded product image"
        );

        Ok(ApiResponse::new(
            image.into(),
            "Product image created successfully",
        ))
    }

    async fn insert_image(
        &self,
        product_id: i32,
        image_url: String,
        is_thumbnail: bool,
    ) -> Result<entity::product_image::Model, Error> {
        let txn = self.db.begin().await?;

        self.check_capacity(&txn, product_id).await?;

        let image = ProductImageRepository::new(&txn)
            .create(product_id, image_url)
            .await?;

        let thumbnail = ImageThumbnail::new(&txn);
        if is_thumbnail || thumbnail.holder(product_id).await?.is_none() {
            thumbnail.promote(product_id, &image).await?;
        }

        let image = Validator::new(&txn).image(image.id).await?;

        txn.commit().await?;

        Ok(image)
    }

    /// Ensures the product is live and below the image limit
    async fn check_capacity<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        product_id: i32,
    ) -> Result<(), Error> {
        Validator::new(db).live_product(product_id).await?;

        let images = ProductImageRepository::new(db)
            .count_by_product(product_id)
            .await?;
        if images >= MAX_IMAGES_PER_PRODUCT {
            return Err(InvariantError::ImageLimit(MAX_IMAGES_PER_PRODUCT).into());
        }

        Ok(())
    }

    /// Makes the image its product's thumbnail
    pub async fn update_to_thumbnail(
        &self,
        image_id: i32,
    ) -> Result<ApiResponse<ProductImageDto>, Error> {
        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        let image = validator.image(image_id).await?;
        validator.live_product(image.product_id).await?;

        ImageThumbnail::new(&txn)
            .promote(image.product_id, &image)
            .await?;

        let image = validator.image(image_id).await?;

        txn.commit().await?;

        Ok(ApiResponse::new(
            image.into(),
            "Product image updated to thumbnail successfully",
        ))
    }

    /// Deletes an image and removes its file from the media store after commit
    pub async fn delete_product_image(
        &self,
        image_id: i32,
    ) -> Result<ApiResponse<ProductImageDto>, Error> {
        let txn = self.db.begin().await?;

        let image = Validator::new(&txn).image(image_id).await?;
        let product = ProductRepository::new(&txn)
            .find_by_id(image.product_id)
            .await?
            .ok_or(LookupError::ProductNotFound(image.product_id))?;

        let outcome = CascadeDeleter::new(&txn)
            .delete_image(&product, &image)
            .await?;

        txn.commit().await?;

        self.media.remove_best_effort(&outcome.orphaned_media).await;

        Ok(ApiResponse::new(
            image.into(),
            "Product image deleted successfully",
        ))
    }
}
