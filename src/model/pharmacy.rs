use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PharmacyDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub picture: String,
    pub is_open: bool,
    pub is_main: bool,
    pub detail_location: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreatePharmacyDto {
    pub name: String,
    pub description: String,
    pub detail_location: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub is_main: bool,
}

/// Field-by-field update of a pharmacy, `None` keeps the stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PharmacyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub detail_location: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub is_main: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AssignAdminsDto {
    pub admin_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AdminDto {
    pub id: i32,
    pub full_name: String,
    pub pharmacy_id: Option<i32>,
}

/// Outcome of deleting a pharmacy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PharmacyDeletedDto {
    pub id: i32,
    /// `true` when the row was kept with `deleted_at` set because orders reference it
    pub soft_deleted: bool,
    pub canceled_orders: u64,
    pub unassigned_admins: u64,
}

/// Pharmacy and admin head counts over live rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PharmacyDashboardDto {
    pub total_pharmacies: u64,
    pub open_pharmacies: u64,
    pub closed_pharmacies: u64,
    pub total_admins: u64,
    /// Live admins assigned to a pharmacy
    pub assigned_admins: u64,
    pub unassigned_admins: u64,
}
