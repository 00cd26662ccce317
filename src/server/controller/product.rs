use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, NameAvailabilityDto, VerifyNameDto},
        product::{
            CreateProductDto, ProductDeletedDto, ProductDetailsDto, ProductDto, ProductPatch,
            PublishedProductDto,
        },
    },
    server::{error::Error, model::app::AppState, service::product::ProductService},
};

pub static PRODUCT_TAG: &str = "product";

/// Create an unpublished product
#[utoipa::path(
    post,
    path = "/api/product",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid product details", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Product name or slug already exists", body = ErrorDto),
        (status = 422, description = "Product name held by a deleted product", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductDto>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.media);
    let response = product_service.create_product_info(body).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a product's details
#[utoipa::path(
    patch,
    path = "/api/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductDto>),
        (status = 404, description = "Product or category not found", body = ErrorDto),
        (status = 409, description = "Product name or slug already exists", body = ErrorDto),
        (status = 410, description = "Product has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ProductPatch>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.media);
    let response = product_service.update_product_info(id, body).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Publish a product and stock it at every live pharmacy
#[utoipa::path(
    post,
    path = "/api/product/{id}/publish",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product published", body = ApiResponse<PublishedProductDto>),
        (status = 400, description = "Already published or missing units or images", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 410, description = "Product has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.media);
    let response = product_service.publish_product(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete a product
///
/// Published or ordered products are soft-deleted and their open orders canceled.
#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<ProductDeletedDto>),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 410, description = "Product has already been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.media);
    let response = product_service.delete_product(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Check whether a product name is available
#[utoipa::path(
    post,
    path = "/api/product/verify-name",
    tag = PRODUCT_TAG,
    request_body = VerifyNameDto,
    responses(
        (status = 200, description = "Name availability", body = ApiResponse<NameAvailabilityDto>),
        (status = 404, description = "Product given by id not found", body = ErrorDto),
        (status = 410, description = "Product given by id has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_product_name(
    State(state): State<AppState>,
    Json(body): Json<VerifyNameDto>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.media);
    let response = product_service
        .verify_product_name(body.name, body.id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get a published product with its images, units and categories
#[utoipa::path(
    get,
    path = "/api/product/slug/{slug}",
    tag = PRODUCT_TAG,
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductDetailsDto>),
        (status = 404, description = "No published product with this slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_details(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.media);
    let response = product_service.get_product_details(&slug).await?;

    Ok((StatusCode::OK, Json(response)))
}
