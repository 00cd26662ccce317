use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        product::{CreateUnitDto, UnitDeletedDto, UnitDto, UnitPatch},
    },
    server::{error::Error, model::app::AppState, service::unit::UnitProductService},
};

pub static UNIT_TAG: &str = "unit";

/// Add a unit to a product
#[utoipa::path(
    post,
    path = "/api/product/{id}/unit",
    tag = UNIT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Unit created", body = ApiResponse<UnitDto>),
        (status = 400, description = "Invalid unit or unit limit reached", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Unit name already exists for the product", body = ErrorDto),
        (status = 410, description = "Product has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_unit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<CreateUnitDto>,
) -> Result<impl IntoResponse, Error> {
    let unit_service = UnitProductService::new(&state.db);
    let response = unit_service.create_unit_product(id, body).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a unit, optionally promoting it to main unit
#[utoipa::path(
    patch,
    path = "/api/unit/{id}",
    tag = UNIT_TAG,
    params(("id" = i32, Path, description = "Unit ID")),
    request_body = UnitPatch,
    responses(
        (status = 200, description = "Unit updated", body = ApiResponse<UnitDto>),
        (status = 400, description = "Invalid unit or main unit demotion", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 409, description = "Unit name already exists for the product", body = ErrorDto),
        (status = 410, description = "Unit or product has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_unit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UnitPatch>,
) -> Result<impl IntoResponse, Error> {
    let unit_service = UnitProductService::new(&state.db);
    let response = unit_service.update_unit_product(id, body).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete a unit
#[utoipa::path(
    delete,
    path = "/api/unit/{id}",
    tag = UNIT_TAG,
    params(("id" = i32, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Unit deleted", body = ApiResponse<UnitDeletedDto>),
        (status = 400, description = "Main or last unit cannot be deleted", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 410, description = "Unit or product has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_unit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let unit_service = UnitProductService::new(&state.db);
    let response = unit_service.delete_unit_product(id).await?;

    Ok((StatusCode::OK, Json(response)))
}
