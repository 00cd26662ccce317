use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ProductImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductImageRepository<'a, C> {
    /// Creates a new instance of [`ProductImageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an image without the thumbnail flag
    pub async fn create(
        &self,
        product_id: i32,
        image_url: String,
    ) -> Result<entity::product_image::Model, DbErr> {
        let image = entity::product_image::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            image_url: ActiveValue::Set(image_url),
            is_thumbnail: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        image.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::product_image::Model>, DbErr> {
        entity::prelude::ProductImage::find_by_id(id).one(self.db).await
    }

    /// Images of the product, thumbnail first and the rest in upload order
    pub async fn get_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::product_image::Model>, DbErr> {
        entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductId.eq(product_id))
            .order_by_desc(entity::product_image::Column::IsThumbnail)
            .order_by_asc(entity::product_image::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of images attached to the product
    pub async fn count_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductId.eq(product_id))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProductImage::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Deletes every image of the product and returns their URLs
    pub async fn delete_by_product(&self, product_id: i32) -> Result<Vec<String>, DbErr> {
        let images = self.get_by_product(product_id).await?;

        entity::prelude::ProductImage::delete_many()
            .filter(entity::product_image::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(images.into_iter().map(|i| i.image_url).collect())
    }
}
