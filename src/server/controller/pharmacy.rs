use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, NameAvailabilityDto, VerifyNameDto},
        pharmacy::{
            CreatePharmacyDto, PharmacyDashboardDto, PharmacyDeletedDto, PharmacyDto,
            PharmacyPatch,
        },
    },
    server::{
        controller::util::multipart::MultipartForm, error::Error, model::app::AppState,
        service::pharmacy::PharmacyService,
    },
};

pub static PHARMACY_TAG: &str = "pharmacy";

/// Multipart body for creating a pharmacy
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreatePharmacyForm {
    /// JSON encoded pharmacy details
    payload: CreatePharmacyDto,
    #[schema(value_type = Option<String>, format = Binary)]
    picture: Option<Vec<u8>>,
}

/// Multipart body for updating a pharmacy
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UpdatePharmacyForm {
    /// JSON encoded patch, every field optional
    payload: Option<PharmacyPatch>,
    #[schema(value_type = Option<String>, format = Binary)]
    picture: Option<Vec<u8>>,
}

/// Create a pharmacy
#[utoipa::path(
    post,
    path = "/api/pharmacy",
    tag = PHARMACY_TAG,
    request_body(content = CreatePharmacyForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Pharmacy created", body = ApiResponse<PharmacyDto>),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 409, description = "Pharmacy name already exists", body = ErrorDto),
        (status = 422, description = "Pharmacy name held by a deleted pharmacy", body = ErrorDto),
        (status = 502, description = "Picture upload failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pharmacy(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut form = MultipartForm::read(multipart).await?;
    let input: CreatePharmacyDto = form.json("payload")?;
    let picture = form.take_file("picture");

    let pharmacy_service = PharmacyService::new(&state.db, &state.media);
    let response = pharmacy_service.create_pharmacy(input, picture).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a pharmacy, optionally replacing its picture
#[utoipa::path(
    patch,
    path = "/api/pharmacy/{id}",
    tag = PHARMACY_TAG,
    params(("id" = i32, Path, description = "Pharmacy ID")),
    request_body(content = UpdatePharmacyForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Pharmacy updated", body = ApiResponse<PharmacyDto>),
        (status = 400, description = "Invalid request or main pharmacy demotion", body = ErrorDto),
        (status = 404, description = "Pharmacy not found", body = ErrorDto),
        (status = 409, description = "Pharmacy name already exists", body = ErrorDto),
        (status = 410, description = "Pharmacy has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pharmacy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut form = MultipartForm::read(multipart).await?;
    let patch: PharmacyPatch = form.json_or_default("payload")?;
    let picture = form.take_file("picture");

    let pharmacy_service = PharmacyService::new(&state.db, &state.media);
    let response = pharmacy_service.update_pharmacy(id, patch, picture).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete a pharmacy
///
/// Pharmacies referenced by orders are soft-deleted and their open orders canceled.
#[utoipa::path(
    delete,
    path = "/api/pharmacy/{id}",
    tag = PHARMACY_TAG,
    params(("id" = i32, Path, description = "Pharmacy ID")),
    responses(
        (status = 200, description = "Pharmacy deleted", body = ApiResponse<PharmacyDeletedDto>),
        (status = 400, description = "Main pharmacy cannot be deleted", body = ErrorDto),
        (status = 404, description = "Pharmacy not found", body = ErrorDto),
        (status = 410, description = "Pharmacy has already been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pharmacy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pharmacy_service = PharmacyService::new(&state.db, &state.media);
    let response = pharmacy_service.delete_pharmacy(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Check whether a pharmacy name is available
#[utoipa::path(
    post,
    path = "/api/pharmacy/verify-name",
    tag = PHARMACY_TAG,
    request_body = VerifyNameDto,
    responses(
        (status = 200, description = "Name availability", body = ApiResponse<NameAvailabilityDto>),
        (status = 404, description = "Pharmacy given by id not found", body = ErrorDto),
        (status = 410, description = "Pharmacy given by id has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_pharmacy_name(
    State(state): State<AppState>,
    Json(body): Json<VerifyNameDto>,
) -> Result<impl IntoResponse, Error> {
    let pharmacy_service = PharmacyService::new(&state.db, &state.media);
    let response = pharmacy_service
        .verify_pharmacy_name(body.name, body.id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get a live pharmacy
#[utoipa::path(
    get,
    path = "/api/pharmacy/{id}",
    tag = PHARMACY_TAG,
    params(("id" = i32, Path, description = "Pharmacy ID")),
    responses(
        (status = 200, description = "Pharmacy", body = ApiResponse<PharmacyDto>),
        (status = 404, description = "Pharmacy not found", body = ErrorDto),
        (status = 410, description = "Pharmacy has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pharmacy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pharmacy_service = PharmacyService::new(&state.db, &state.media);
    let response = pharmacy_service.get_pharmacy(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Count pharmacies by open state and admins by assignment
#[utoipa::path(
    get,
    path = "/api/pharmacy/dashboard",
    tag = PHARMACY_TAG,
    responses(
        (status = 200, description = "Dashboard counts", body = ApiResponse<PharmacyDashboardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_pharmacies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let pharmacy_service = PharmacyService::new(&state.db, &state.media);
    let response = pharmacy_service.get_dashboard_pharmacies().await?;

    Ok((StatusCode::OK, Json(response)))
}
