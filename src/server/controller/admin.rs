use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        pharmacy::{AdminDto, AssignAdminsDto, PharmacyDto},
    },
    server::{error::Error, model::app::AppState, service::admin::AdminAssignmentService},
};

pub static ADMIN_TAG: &str = "admin";

/// Assign admins to a pharmacy and open it
#[utoipa::path(
    post,
    path = "/api/pharmacy/{id}/admins",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Pharmacy ID")),
    request_body = AssignAdminsDto,
    responses(
        (status = 200, description = "Admins assigned", body = ApiResponse<PharmacyDto>),
        (status = 400, description = "No admins given", body = ErrorDto),
        (status = 404, description = "Pharmacy or admins not found", body = ErrorDto),
        (status = 410, description = "Pharmacy has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_admins(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<AssignAdminsDto>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminAssignmentService::new(&state.db);
    let response = admin_service.assign_admins(id, body.admin_ids).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// List the live admins assigned to a pharmacy
#[utoipa::path(
    get,
    path = "/api/pharmacy/{id}/admins",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Pharmacy ID")),
    responses(
        (status = 200, description = "Assigned admins", body = ApiResponse<Vec<AdminDto>>),
        (status = 404, description = "Pharmacy not found", body = ErrorDto),
        (status = 410, description = "Pharmacy has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assigned_admins(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminAssignmentService::new(&state.db);
    let response = admin_service.get_assigned_admins(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Remove an admin from their pharmacy
#[utoipa::path(
    delete,
    path = "/api/admin/{id}/pharmacy",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin unassigned", body = ApiResponse<AdminDto>),
        (status = 400, description = "Admin is not assigned to a pharmacy", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_admin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin_service = AdminAssignmentService::new(&state.db);
    let response = admin_service.unassign_admin(id).await?;

    Ok((StatusCode::OK, Json(response)))
}
