use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::{
    model::category::{CategoryPatch, CreateCategoryDto},
    server::data::lower_eq,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: &CreateCategoryDto) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(input.name.trim().to_string()),
            description: ActiveValue::Set(input.description.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Finds categories whose name matches ignoring case
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        let mut query = entity::prelude::Category::find()
            .filter(lower_eq(entity::category::Column::Name, name.trim()));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        query.all(self.db).await
    }

    /// Categories linked to the product, in name order
    pub async fn get_by_product(&self, product_id: i32) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .join(
                JoinType::InnerJoin,
                entity::category::Relation::ProductCategory.def(),
            )
            .filter(entity::product_category::Column::ProductId.eq(product_id))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    /// Number of live products linked to the category
    pub async fn count_live_products(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ProductCategory::find()
            .join(
                JoinType::InnerJoin,
                entity::product_category::Relation::Product.def(),
            )
            .filter(entity::product_category::Column::CategoryId.eq(category_id))
            .filter(entity::product::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    pub async fn update(
        &self,
        category: entity::category::Model,
        patch: &CategoryPatch,
    ) -> Result<entity::category::Model, DbErr> {
        let mut category_am = category.into_active_model();

        if let Some(name) = &patch.name {
            category_am.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(description) = &patch.description {
            category_am.description = ActiveValue::Set(description.clone());
        }

        category_am.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(id).exec(self.db).await
    }

    /// Returns which of the given category ids exist
    pub async fn get_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let categories = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(|c| c.id).collect())
    }
}

pub struct ProductCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductCategoryRepository<'a, C> {
    /// Creates a new instance of [`ProductCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ids of the categories linked to the product
    pub async fn get_category_ids(&self, product_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::ProductCategory::find()
            .filter(entity::product_category::Column::ProductId.eq(product_id))
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|l| l.category_id).collect())
    }

    /// Replaces the product's categories with the given set
    pub async fn replace(&self, product_id: i32, category_ids: &[i32]) -> Result<(), DbErr> {
        self.delete_by_product(product_id).await?;

        if category_ids.is_empty() {
            return Ok(());
        }

        let links = category_ids
            .iter()
            .map(|category_id| entity::product_category::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                category_id: ActiveValue::Set(*category_id),
                ..Default::default()
            });

        entity::prelude::ProductCategory::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes every product link of the category
    pub async fn delete_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ProductCategory::delete_many()
            .filter(entity::product_category::Column::CategoryId.eq(category_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every category link of the product
    pub async fn delete_by_product(&self, product_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ProductCategory::delete_many()
            .filter(entity::product_category::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
