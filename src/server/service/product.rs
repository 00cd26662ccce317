use std::collections::BTreeSet;

use entity::sea_orm_active_enums::Golongan;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::{
        api::{ApiResponse, NameAvailabilityDto},
        category::CategoryDto,
        product::{
            CreateProductDto, ProductDeletedDto, ProductDetailsDto, ProductDto,
            ProductImageDto, ProductPatch, PublishedProductDto, UnitDto,
        },
    },
    server::{
        data::{
            category::{CategoryRepository, ProductCategoryRepository},
            image::ProductImageRepository,
            product::ProductRepository, unit::UnitRepository,
        },
        error::{
            conflict::ConflictError, invariant::InvariantError, lookup::LookupError, Error,
        },
        media::MediaClient,
        model::db::product_dto,
        service::{
            cascade::CascadeDeleter,
            stock::StockProvisioner,
            validation::{require_name, unique_violation, Validator},
        },
        util::slug::generate_slug,
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaClient,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaClient) -> Self {
        Self { db, media }
    }

    /// Creates an unpublished product with its categories
    pub async fn create_product_info(
        &self,
        input: CreateProductDto,
    ) -> Result<ApiResponse<ProductDto>, Error> {
        let slug = product_slug(&input.name)?;
        let category_ids = dedup(&input.category_ids);
        let needs_prescription =
            requires_prescription(input.golongan.into(), input.needs_prescription);

        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        validator.product_name(&input.name, None).await?;
        validator.product_slug(&slug, None).await?;
        validator.categories_exist(&category_ids).await?;

        let product = ProductRepository::new(&txn)
            .create(&input, slug.clone(), needs_prescription)
            .await
            .map_err(product_violation(input.name.clone(), Some(slug)))?;
        ProductCategoryRepository::new(&txn)
            .replace(product.id, &category_ids)
            .await?;

        txn.commit().await?;

        tracing::info!(product_id = product.id, slug = %product.slug, "Created product");

        Ok(ApiResponse::new(
            product_dto(product, category_ids),
            "Product created successfully",
        ))
    }

    /// Applies the patch; a new name regenerates the slug and `category_ids` replaces the
    /// product's categories
    pub async fn update_product_info(
        &self,
        id: i32,
        patch: ProductPatch,
    ) -> Result<ApiResponse<ProductDto>, Error> {
        let slug = match &patch.name {
            Some(name) => Some(product_slug(name)?),
            None => None,
        };

        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);
        let categories = ProductCategoryRepository::new(&txn);

        let product = validator.live_product(id).await?;

        if let Some(name) = &patch.name {
            validator.product_name(name, Some(id)).await?;
        }
        if let Some(slug) = &slug {
            validator.product_slug(slug, Some(id)).await?;
        }
        if let Some(category_ids) = &patch.category_ids {
            let category_ids = dedup(category_ids);
            validator.categories_exist(&category_ids).await?;
            categories.replace(id, &category_ids).await?;
        }

        let golongan = patch.golongan.map(Golongan::from).unwrap_or(product.golongan);
        let needs_prescription = requires_prescription(
            golongan,
            patch
                .needs_prescription
                .unwrap_or(product.needs_prescription),
        );

        let name = patch.name.clone().unwrap_or_else(|| product.name.clone());
        let product = ProductRepository::new(&txn)
            .update(product, &patch, slug.clone(), needs_prescription)
            .await
            .map_err(product_violation(name, slug))?;
        let category_ids = categories.get_category_ids(id).await?;

        txn.commit().await?;

        tracing::info!(product_id = id, "Updated product");

        Ok(ApiResponse::new(
            product_dto(product, category_ids),
            "Product updated successfully",
        ))
    }

    /// Publishes a product that has at least one unit and one image, then stocks it at
    /// every live pharmacy
    pub async fn publish_product(&self, id: i32) -> Result<ApiResponse<PublishedProductDto>, Error> {
        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        let product = validator.live_product(id).await?;
        if product.published {
            return Err(InvariantError::AlreadyPublished(id).into());
        }
        if UnitRepository::new(&txn).count_live_by_product(id).await? == 0 {
            return Err(InvariantError::PublishRequiresUnit.into());
        }
        if ProductImageRepository::new(&txn).count_by_product(id).await? == 0 {
            return Err(InvariantError::PublishRequiresImage.into());
        }

        ProductRepository::new(&txn).publish(id).await?;
        let stock_rows_created = StockProvisioner::new(&txn).on_product_published(id).await?;

        let product = validator.live_product(id).await?;
        let category_ids = ProductCategoryRepository::new(&txn)
            .get_category_ids(id)
            .await?;

        txn.commit().await?;

        tracing::info!(product_id = id, stock_rows_created, "Published product");

        Ok(ApiResponse::new(
            PublishedProductDto {
                product: product_dto(product, category_ids),
                stock_rows_created,
            },
            "Product published successfully",
        ))
    }

    /// Deletes a product
    ///
    /// Published or ordered products are soft-deleted with their stock and their open
    /// orders canceled. Drafts never ordered are removed with their units, images and
    /// categories; their image files are removed after commit.
    pub async fn delete_product(&self, id: i32) -> Result<ApiResponse<ProductDeletedDto>, Error> {
        let txn = self.db.begin().await?;

        let product = Validator::new(&txn).live_product(id).await?;
        let outcome = CascadeDeleter::new(&txn).delete_product(&product).await?;

        txn.commit().await?;

        self.media.remove_best_effort(&outcome.orphaned_media).await;

        Ok(ApiResponse::new(
            ProductDeletedDto {
                id,
                soft_deleted: outcome.soft_deleted,
                canceled_orders: outcome.canceled_orders,
            },
            "Product deleted successfully",
        ))
    }

    /// Returns a live, published product with its images, live units and categories
    pub async fn get_product_details(
        &self,
        slug: &str,
    ) -> Result<ApiResponse<ProductDetailsDto>, Error> {
        let product = ProductRepository::new(self.db)
            .find_live_published_by_slug(slug)
            .await?
            .ok_or_else(|| LookupError::ProductSlugNotFound(slug.to_string()))?;

        let images = ProductImageRepository::new(self.db)
            .get_by_product(product.id)
            .await?;
        let units = UnitRepository::new(self.db)
            .get_live_by_product(product.id)
            .await?;
        let categories = CategoryRepository::new(self.db)
            .get_by_product(product.id)
            .await?;

        let category_ids = categories.iter().map(|c| c.id).collect();

        Ok(ApiResponse::new(
            ProductDetailsDto {
                product: product_dto(product, category_ids),
                images: images.into_iter().map(ProductImageDto::from).collect(),
                units: units.into_iter().map(UnitDto::from).collect(),
                categories: categories.into_iter().map(CategoryDto::from).collect(),
            },
            "Product details retrieved successfully",
        ))
    }

    /// Checks whether a product name is free, ignoring the product with `id`
    ///
    /// The product named by `id` must exist and be live.
    pub async fn verify_product_name(
        &self,
        name: String,
        id: Option<i32>,
    ) -> Result<ApiResponse<NameAvailabilityDto>, Error> {
        let validator = Validator::new(self.db);
        if let Some(id) = id {
            validator.live_product(id).await?;
        }

        let available = match validator.product_name(&name, id).await {
            Ok(()) => true,
            Err(Error::ConflictError(_)) => false,
            Err(e) => return Err(e),
        };

        let message = if available {
            "Product name is available"
        } else {
            "Product name already exists"
        };

        Ok(ApiResponse::new(NameAvailabilityDto { name, available }, message))
    }
}

fn product_slug(name: &str) -> Result<String, Error> {
    require_name("name", name)?;

    let slug = generate_slug(name);
    if slug.is_empty() {
        return Err(InvariantError::InvalidField {
            field: "name",
            rule: "made of at least one letter or digit",
        }
        .into());
    }

    Ok(slug)
}

/// Unique violations on a product write come from either the name or the slug index
fn product_violation(name: String, slug: Option<String>) -> impl FnOnce(DbErr) -> Error {
    move |err| {
        unique_violation(err, |detail| match slug {
            Some(slug) if detail.contains("slug") => ConflictError::SlugTaken(slug),
            _ => ConflictError::NameTaken {
                entity: "Product",
                name: name.trim().to_string(),
            },
        })
    }
}

/// OBAT_KERAS products always need a prescription
fn requires_prescription(golongan: Golongan, requested: bool) -> bool {
    golongan == Golongan::ObatKeras || requested
}

fn dedup(ids: &[i32]) -> Vec<i32> {
    ids.iter().copied().collect::<BTreeSet<i32>>().into_iter().collect()
}
