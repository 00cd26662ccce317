use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

use crate::{
    model::pharmacy::{CreatePharmacyDto, PharmacyPatch},
    server::data::lower_eq,
};

pub struct PharmacyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PharmacyRepository<'a, C> {
    /// Creates a new instance of [`PharmacyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a closed pharmacy without the main flag
    ///
    /// The main flag is only ever set through the flag maintainer.
    pub async fn create(
        &self,
        input: &CreatePharmacyDto,
        picture: String,
    ) -> Result<entity::pharmacy::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let pharmacy = entity::pharmacy::ActiveModel {
            name: ActiveValue::Set(input.name.trim().to_string()),
            description: ActiveValue::Set(input.description.clone()),
            picture: ActiveValue::Set(picture),
            is_open: ActiveValue::Set(false),
            is_main: ActiveValue::Set(false),
            detail_location: ActiveValue::Set(input.detail_location.clone()),
            lat: ActiveValue::Set(input.lat),
            lng: ActiveValue::Set(input.lng),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        pharmacy.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::pharmacy::Model>, DbErr> {
        entity::prelude::Pharmacy::find_by_id(id).one(self.db).await
    }

    /// Finds pharmacies, live or deleted, whose name matches ignoring case
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Vec<entity::pharmacy::Model>, DbErr> {
        let mut query = entity::prelude::Pharmacy::find()
            .filter(lower_eq(entity::pharmacy::Column::Name, name.trim()));

        if let Some(id) = exclude_id {
            query = query.filter(entity::pharmacy::Column::Id.ne(id));
        }

        query.all(self.db).await
    }

    /// Number of live pharmacies, optionally only open or closed ones
    pub async fn count_live(&self, is_open: Option<bool>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Pharmacy::find()
            .filter(entity::pharmacy::Column::DeletedAt.is_null());

        if let Some(is_open) = is_open {
            query = query.filter(entity::pharmacy::Column::IsOpen.eq(is_open));
        }

        query.count(self.db).await
    }

    /// Ids of every pharmacy that is not soft-deleted
    pub async fn get_live_ids(&self) -> Result<Vec<i32>, DbErr> {
        let pharmacies = entity::prelude::Pharmacy::find()
            .filter(entity::pharmacy::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(pharmacies.into_iter().map(|p| p.id).collect())
    }

    /// Applies every present patch field except the main flag
    pub async fn update(
        &self,
        pharmacy: entity::pharmacy::Model,
        patch: &PharmacyPatch,
        picture: Option<String>,
    ) -> Result<entity::pharmacy::Model, DbErr> {
        let mut pharmacy_am = pharmacy.into_active_model();

        if let Some(name) = &patch.name {
            pharmacy_am.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(description) = &patch.description {
            pharmacy_am.description = ActiveValue::Set(description.clone());
        }
        if let Some(detail_location) = &patch.detail_location {
            pharmacy_am.detail_location = ActiveValue::Set(detail_location.clone());
        }
        if let Some(lat) = patch.lat {
            pharmacy_am.lat = ActiveValue::Set(lat);
        }
        if let Some(lng) = patch.lng {
            pharmacy_am.lng = ActiveValue::Set(lng);
        }
        if let Some(picture) = picture {
            pharmacy_am.picture = ActiveValue::Set(picture);
        }
        pharmacy_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        pharmacy_am.update(self.db).await
    }

    pub async fn set_open(&self, id: i32, is_open: bool) -> Result<(), DbErr> {
        entity::prelude::Pharmacy::update_many()
            .col_expr(
                entity::pharmacy::Column::IsOpen,
                sea_orm::sea_query::Expr::value(is_open),
            )
            .filter(entity::pharmacy::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets `deleted_at`, keeping the row and its name reserved
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Pharmacy::update_many()
            .col_expr(
                entity::pharmacy::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                entity::pharmacy::Column::IsOpen,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::pharmacy::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a pharmacy
    ///
    /// Returns OK regardless of the pharmacy existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pharmacy::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
