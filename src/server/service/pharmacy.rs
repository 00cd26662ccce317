use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::{ApiResponse, NameAvailabilityDto},
        pharmacy::{
            CreatePharmacyDto, PharmacyDashboardDto, PharmacyDeletedDto, PharmacyDto,
            PharmacyPatch,
        },
    },
    server::{
        data::{admin::AdminRepository, pharmacy::PharmacyRepository},
        error::Error,
        media::{MediaClient, MediaFile},
        service::{
            cascade::CascadeDeleter,
            flag::{guard_demotion, PharmacyMain},
            stock::StockProvisioner,
            validation::{name_violation, require_coordinates, require_name, Validator},
        },
    },
};

pub struct PharmacyService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaClient,
}

impl<'a> PharmacyService<'a> {
    /// Creates a new instance of [`PharmacyService`]
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaClient) -> Self {
        Self { db, media }
    }

    /// Creates a pharmacy, uploading its picture first when one is given
    ///
    /// The first live pharmacy becomes the main pharmacy, as does any pharmacy created
    /// with `is_main`. New pharmacies start closed and receive an empty stock row for
    /// every published product.
    pub async fn create_pharmacy(
        &self,
        input: CreatePharmacyDto,
        picture: Option<MediaFile>,
    ) -> Result<ApiResponse<PharmacyDto>, Error> {
        require_name("name", &input.name)?;
        require_coordinates(Some(input.lat), Some(input.lng))?;
        Validator::new(self.db)
            .pharmacy_name(&input.name, None)
            .await?;

        let picture_url = match picture {
            Some(file) => self.media.upload(file).await?,
            None => String::new(),
        };

        let result = self.insert_pharmacy(&input, picture_url.clone()).await;
        if result.is_err() {
            self.media.remove_best_effort(&[picture_url]).await;
        }
        let pharmacy = result?;

        tracing::info!(pharmacy_id = pharmacy.id, is_main = pharmacy.is_main, "Created pharmacy");

        Ok(ApiResponse::new(
            pharmacy.into(),
            "Pharmacy created successfully",
        ))
    }

    async fn insert_pharmacy(
        &self,
        input: &CreatePharmacyDto,
        picture_url: String,
    ) -> Result<entity::pharmacy::Model, Error> {
        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        validator.pharmacy_name(&input.name, None).await?;

        let pharmacy = PharmacyRepository::new(&txn)
            .create(input, picture_url)
            .await
            .map_err(name_violation("Pharmacy", &input.name))?;

        let main = PharmacyMain::new(&txn);
        if input.is_main || main.holder(()).await?.is_none() {
            main.promote((), &pharmacy).await?;
        }

        StockProvisioner::new(&txn)
            .on_pharmacy_created(pharmacy.id)
            .await?;

        let pharmacy = validator.live_pharmacy(pharmacy.id).await?;

        txn.commit().await?;

        Ok(pharmacy)
    }

    /// Applies the patch, replacing the picture when a new one is given
    ///
    /// The previous picture is removed from the media store once the update has
    /// committed.
    pub async fn update_pharmacy(
        &self,
        id: i32,
        patch: PharmacyPatch,
        picture: Option<MediaFile>,
    ) -> Result<ApiResponse<PharmacyDto>, Error> {
        if let Some(name) = &patch.name {
            require_name("name", name)?;
        }
        require_coordinates(patch.lat, patch.lng)?;
        Validator::new(self.db).live_pharmacy(id).await?;

        let new_picture = match picture {
            Some(file) => Some(self.media.upload(file).await?),
            None => None,
        };

        let result = self.apply_patch(id, &patch, new_picture.clone()).await;

        let (pharmacy, old_picture) = match result {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(url) = new_picture {
                    self.media.remove_best_effort(&[url]).await;
                }
                return Err(e);
            }
        };

        if new_picture.is_some() {
            self.media.remove_best_effort(&[old_picture]).await;
        }

        tracing::info!(pharmacy_id = pharmacy.id, "Updated pharmacy");

        Ok(ApiResponse::new(
            pharmacy.into(),
            "Pharmacy updated successfully",
        ))
    }

    /// Returns the updated pharmacy along with the picture it held before
    async fn apply_patch(
        &self,
        id: i32,
        patch: &PharmacyPatch,
        new_picture: Option<String>,
    ) -> Result<(entity::pharmacy::Model, String), Error> {
        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        let pharmacy = validator.live_pharmacy(id).await?;
        guard_demotion::<entity::pharmacy::Entity>(pharmacy.is_main, patch.is_main)?;

        if let Some(name) = &patch.name {
            validator.pharmacy_name(name, Some(id)).await?;
        }

        let old_picture = pharmacy.picture.clone();
        let name = patch.name.clone().unwrap_or_else(|| pharmacy.name.clone());
        let updated = PharmacyRepository::new(&txn)
            .update(pharmacy, patch, new_picture)
            .await
            .map_err(name_violation("Pharmacy", &name))?;

        if patch.is_main == Some(true) {
            PharmacyMain::new(&txn).promote((), &updated).await?;
        }

        let pharmacy = validator.live_pharmacy(id).await?;

        txn.commit().await?;

        Ok((pharmacy, old_picture))
    }

    /// Deletes a pharmacy that is not the main pharmacy
    ///
    /// Every admin is unassigned. Pharmacies referenced by orders are soft-deleted and
    /// their open orders canceled; others are removed together with their stock and
    /// picture.
    pub async fn delete_pharmacy(&self, id: i32) -> Result<ApiResponse<PharmacyDeletedDto>, Error> {
        let txn = self.db.begin().await?;

        let pharmacy = Validator::new(&txn).live_pharmacy(id).await?;
        let outcome = CascadeDeleter::new(&txn).delete_pharmacy(&pharmacy).await?;

        txn.commit().await?;

        self.media.remove_best_effort(&outcome.orphaned_media).await;

        Ok(ApiResponse::new(
            PharmacyDeletedDto {
                id,
                soft_deleted: outcome.soft_deleted,
                canceled_orders: outcome.canceled_orders,
                unassigned_admins: outcome.unassigned_admins,
            },
            "Pharmacy deleted successfully",
        ))
    }

    pub async fn get_pharmacy(&self, id: i32) -> Result<ApiResponse<PharmacyDto>, Error> {
        let pharmacy = Validator::new(self.db).live_pharmacy(id).await?;

        Ok(ApiResponse::new(
            pharmacy.into(),
            "Pharmacy fetched successfully",
        ))
    }

    /// Counts live pharmacies by open state and live admins by assignment
    pub async fn get_dashboard_pharmacies(
        &self,
    ) -> Result<ApiResponse<PharmacyDashboardDto>, Error> {
        let pharmacy_repo = PharmacyRepository::new(self.db);
        let admin_repo = AdminRepository::new(self.db);

        let open_pharmacies = pharmacy_repo.count_live(Some(true)).await?;
        let closed_pharmacies = pharmacy_repo.count_live(Some(false)).await?;
        let assigned_admins = admin_repo.count_live(Some(true)).await?;
        let unassigned_admins = admin_repo.count_live(Some(false)).await?;

        Ok(ApiResponse::new(
            PharmacyDashboardDto {
                total_pharmacies: open_pharmacies + closed_pharmacies,
                open_pharmacies,
                closed_pharmacies,
                total_admins: assigned_admins + unassigned_admins,
                assigned_admins,
                unassigned_admins,
            },
            "Dashboard pharmacies fetched successfully",
        ))
    }

    /// Checks whether a pharmacy name is free, ignoring the pharmacy with `id`
    ///
    /// The pharmacy named by `id` must exist and be live.
    pub async fn verify_pharmacy_name(
        &self,
        name: String,
        id: Option<i32>,
    ) -> Result<ApiResponse<NameAvailabilityDto>, Error> {
        let validator = Validator::new(self.db);
        if let Some(id) = id {
            validator.live_pharmacy(id).await?;
        }

        let available = match validator.pharmacy_name(&name, id).await {
            Ok(()) => true,
            Err(Error::ConflictError(_)) => false,
            Err(e) => return Err(e),
        };

        let message = if available {
            "Pharmacy name is available"
        } else {
            "Pharmacy name already exists"
        };

        Ok(ApiResponse::new(NameAvailabilityDto { name, available }, message))
    }
}
