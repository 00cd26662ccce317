use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::ApiResponse,
        pharmacy::{AdminDto, PharmacyDto},
    },
    server::{
        data::{admin::AdminRepository, pharmacy::PharmacyRepository},
        error::{invariant::InvariantError, lookup::LookupError, Error},
        service::validation::Validator,
    },
};

/// Assigns admins to pharmacies, keeping each pharmacy's open state in line with its
/// live admin count
pub struct AdminAssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminAssignmentService<'a> {
    /// Creates a new instance of [`AdminAssignmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves the admins to the pharmacy and opens it
    ///
    /// Pharmacies the admins came from are closed when left without live admins.
    pub async fn assign_admins(
        &self,
        pharmacy_id: i32,
        admin_ids: Vec<i32>,
    ) -> Result<ApiResponse<PharmacyDto>, Error> {
        let admin_ids: Vec<i32> = admin_ids
            .into_iter()
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();

        if admin_ids.is_empty() {
            return Err(InvariantError::NoAdminsGiven.into());
        }

        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);
        let admin_repo = AdminRepository::new(&txn);
        let pharmacy_repo = PharmacyRepository::new(&txn);

        validator.live_pharmacy(pharmacy_id).await?;
        let admins = validator.live_admins(&admin_ids).await?;

        let previous: BTreeSet<i32> = admins
            .iter()
            .filter_map(|a| a.pharmacy_id)
            .filter(|id| *id != pharmacy_id)
            .collect();

        admin_repo.assign(&admin_ids, pharmacy_id).await?;
        pharmacy_repo.set_open(pharmacy_id, true).await?;

        for previous_id in previous {
            if admin_repo.count_live_by_pharmacy(previous_id).await? == 0 {
                pharmacy_repo.set_open(previous_id, false).await?;
            }
        }

        let pharmacy = validator.live_pharmacy(pharmacy_id).await?;

        txn.commit().await?;

        tracing::info!(pharmacy_id, admins = admin_ids.len(), "Assigned admins to pharmacy");

        Ok(ApiResponse::new(
            pharmacy.into(),
            "Admins assigned to pharmacy successfully",
        ))
    }

    /// Live admins assigned to a live pharmacy
    pub async fn get_assigned_admins(
        &self,
        pharmacy_id: i32,
    ) -> Result<ApiResponse<Vec<AdminDto>>, Error> {
        Validator::new(self.db).live_pharmacy(pharmacy_id).await?;

        let admins = AdminRepository::new(self.db)
            .get_live_by_pharmacy(pharmacy_id)
            .await?;

        Ok(ApiResponse::new(
            admins.into_iter().map(AdminDto::from).collect(),
            "Assigned admins fetched successfully",
        ))
    }

    /// Removes the admin from its pharmacy, closing the pharmacy when no live admin is left
    pub async fn unassign_admin(&self, admin_id: i32) -> Result<ApiResponse<AdminDto>, Error> {
        let txn = self.db.begin().await?;
        let admin_repo = AdminRepository::new(&txn);

        let admin = admin_repo
            .find_by_id(admin_id)
            .await?
            .ok_or(LookupError::AdminNotFound(admin_id))?;
        let pharmacy_id = admin
            .pharmacy_id
            .ok_or(InvariantError::AdminNotAssigned(admin_id))?;

        admin_repo.unassign(admin_id).await?;

        if admin_repo.count_live_by_pharmacy(pharmacy_id).await? == 0 {
            PharmacyRepository::new(&txn)
                .set_open(pharmacy_id, false)
                .await?;
        }

        let admin = admin_repo
            .find_by_id(admin_id)
            .await?
            .ok_or(LookupError::AdminNotFound(admin_id))?;

        txn.commit().await?;

        tracing::info!(admin_id, pharmacy_id, "Unassigned admin from pharmacy");

        Ok(ApiResponse::new(
            admin.into(),
            "Admin unassigned from pharmacy successfully",
        ))
    }
}
