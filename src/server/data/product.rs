use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QuerySelect,
};

use crate::{
    model::product::{CreateProductDto, ProductPatch},
    server::data::lower_eq,
};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unpublished product
    pub async fn create(
        &self,
        input: &CreateProductDto,
        slug: String,
        needs_prescription: bool,
    ) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(input.name.trim().to_string()),
            name_mims: ActiveValue::Set(input.name_mims.clone()),
            slug: ActiveValue::Set(slug),
            golongan: ActiveValue::Set(input.golongan.into()),
            acquisition: ActiveValue::Set(input.acquisition.into()),
            nomor_edar: ActiveValue::Set(input.nomor_edar.clone()),
            needs_prescription: ActiveValue::Set(needs_prescription),
            description: ActiveValue::Set(input.description.clone()),
            composition: ActiveValue::Set(input.composition.clone()),
            dose: ActiveValue::Set(input.dose.clone()),
            side_effects: ActiveValue::Set(input.side_effects.clone()),
            indication: ActiveValue::Set(input.indication.clone()),
            brand: ActiveValue::Set(input.brand.clone()),
            published: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Finds products, live or deleted, whose name matches ignoring case
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(lower_eq(entity::product::Column::Name, name.trim()));

        if let Some(id) = exclude_id {
            query = query.filter(entity::product::Column::Id.ne(id));
        }

        query.all(self.db).await
    }

    pub async fn find_by_slug(
        &self,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let mut query =
            entity::prelude::Product::find().filter(entity::product::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::product::Column::Id.ne(id));
        }

        query.one(self.db).await
    }

    /// The live, published product carrying the slug
    pub async fn find_live_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Slug.eq(slug))
            .filter(entity::product::Column::Published.eq(true))
            .filter(entity::product::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Ids of every live, published product, holding a share lock on each live product row
    ///
    /// `published` is checked after the rows are locked. A product being published
    /// concurrently is then either seen as published once its transaction commits, or its
    /// publish waits for this transaction and sees the caller's new pharmacy.
    pub async fn lock_live_published_ids(&self) -> Result<Vec<i32>, DbErr> {
        let products = entity::prelude::Product::find()
            .filter(entity::product::Column::DeletedAt.is_null())
            .lock_shared()
            .all(self.db)
            .await?;

        Ok(products
            .into_iter()
            .filter(|p| p.published)
            .map(|p| p.id)
            .collect())
    }

    /// Applies the patch's descriptive fields together with the computed slug and
    /// prescription flag
    pub async fn update(
        &self,
        product: entity::product::Model,
        patch: &ProductPatch,
        slug: Option<String>,
        needs_prescription: bool,
    ) -> Result<entity::product::Model, DbErr> {
        let mut product_am = product.into_active_model();

        if let Some(name) = &patch.name {
            product_am.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(slug) = slug {
            product_am.slug = ActiveValue::Set(slug);
        }
        if let Some(name_mims) = &patch.name_mims {
            product_am.name_mims = ActiveValue::Set(name_mims.clone());
        }
        if let Some(golongan) = patch.golongan {
            product_am.golongan = ActiveValue::Set(golongan.into());
        }
        if let Some(acquisition) = patch.acquisition {
            product_am.acquisition = ActiveValue::Set(acquisition.into());
        }
        if let Some(nomor_edar) = &patch.nomor_edar {
            product_am.nomor_edar = ActiveValue::Set(nomor_edar.clone());
        }
        if let Some(description) = &patch.description {
            product_am.description = ActiveValue::Set(description.clone());
        }
        if let Some(composition) = &patch.composition {
            product_am.composition = ActiveValue::Set(composition.clone());
        }
        if let Some(dose) = &patch.dose {
            product_am.dose = ActiveValue::Set(dose.clone());
        }
        if let Some(side_effects) = &patch.side_effects {
            product_am.side_effects = ActiveValue::Set(side_effects.clone());
        }
        if let Some(indication) = &patch.indication {
            product_am.indication = ActiveValue::Set(indication.clone());
        }
        if let Some(brand) = &patch.brand {
            product_am.brand = ActiveValue::Set(Some(brand.clone()));
        }
        product_am.needs_prescription = ActiveValue::Set(needs_prescription);
        product_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        product_am.update(self.db).await
    }

    pub async fn publish(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Product::update_many()
            .col_expr(entity::product::Column::Published, Expr::value(true))
            .col_expr(
                entity::product::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::DeletedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Product::delete_by_id(id).exec(self.db).await
    }
}
