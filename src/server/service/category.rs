use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::ApiResponse,
        category::{
            CategoryDeletedDto, CategoryDetailsDto, CategoryDto, CategoryPatch, CreateCategoryDto,
        },
    },
    server::{
        data::category::{CategoryRepository, ProductCategoryRepository},
        error::Error,
        service::validation::{name_violation, require_name, Validator},
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new instance of [`CategoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_category(
        &self,
        input: CreateCategoryDto,
    ) -> Result<ApiResponse<CategoryDto>, Error> {
        require_name("name", &input.name)?;

        let txn = self.db.begin().await?;

        Validator::new(&txn).category_name(&input.name, None).await?;
        let category = CategoryRepository::new(&txn)
            .create(&input)
            .await
            .map_err(name_violation("Category", &input.name))?;

        txn.commit().await?;

        tracing::info!(category_id = category.id, "Created category");

        Ok(ApiResponse::new(
            category.into(),
            "Category created successfully",
        ))
    }

    /// Returns the category with the number of live products linked to it
    pub async fn get_category(&self, id: i32) -> Result<ApiResponse<CategoryDetailsDto>, Error> {
        let category = Validator::new(self.db).category(id).await?;
        let product_count = CategoryRepository::new(self.db)
            .count_live_products(id)
            .await?;

        Ok(ApiResponse::new(
            CategoryDetailsDto {
                category: category.into(),
                product_count,
            },
            "Category fetched successfully",
        ))
    }

    pub async fn update_category(
        &self,
        id: i32,
        patch: CategoryPatch,
    ) -> Result<ApiResponse<CategoryDto>, Error> {
        if let Some(name) = &patch.name {
            require_name("name", name)?;
        }

        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        let category = validator.category(id).await?;
        if let Some(name) = &patch.name {
            validator.category_name(name, Some(id)).await?;
        }

        let name = patch.name.clone().unwrap_or_else(|| category.name.clone());
        let category = CategoryRepository::new(&txn)
            .update(category, &patch)
            .await
            .map_err(name_violation("Category", &name))?;

        txn.commit().await?;

        tracing::info!(category_id = id, "Updated category");

        Ok(ApiResponse::new(
            category.into(),
            "Category updated successfully",
        ))
    }

    /// Deletes the category together with every product link to it
    pub async fn delete_category(&self, id: i32) -> Result<ApiResponse<CategoryDeletedDto>, Error> {
        let txn = self.db.begin().await?;

        Validator::new(&txn).category(id).await?;
        let unlinked_products = ProductCategoryRepository::new(&txn)
            .delete_by_category(id)
            .await?;
        CategoryRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(category_id = id, unlinked_products, "Deleted category");

        Ok(ApiResponse::new(
            CategoryDeletedDto {
                id,
                unlinked_products,
            },
            "Category deleted successfully",
        ))
    }
}
