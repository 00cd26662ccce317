use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        category::{
            CategoryDeletedDto, CategoryDetailsDto, CategoryDto, CategoryPatch, CreateCategoryDto,
        },
    },
    server::{error::Error, model::app::AppState, service::category::CategoryService},
};

pub static CATEGORY_TAG: &str = "category";

/// Create a product category
#[utoipa::path(
    post,
    path = "/api/category",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid category details", body = ErrorDto),
        (status = 409, description = "Category name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);
    let response = category_service.create_category(body).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a category with its live product count
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = ApiResponse<CategoryDetailsDto>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);
    let response = category_service.get_category(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Update a category
#[utoipa::path(
    patch,
    path = "/api/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryPatch,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid category details", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<CategoryPatch>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);
    let response = category_service.update_category(id, body).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete a category and unlink it from every product
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryDeletedDto>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);
    let response = category_service.delete_category(id).await?;

    Ok((StatusCode::OK, Json(response)))
}
