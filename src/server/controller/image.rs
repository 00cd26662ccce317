use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        product::ProductImageDto,
    },
    server::{
        controller::util::multipart::MultipartForm, error::Error, model::app::AppState,
        service::image::ProductImageService,
    },
};

pub static IMAGE_TAG: &str = "image";

/// Multipart body for uploading a product image
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
    /// `true` to make the image the product's thumbnail
    is_thumbnail: Option<bool>,
}

/// Upload an image for a product
#[utoipa::path(
    post,
    path = "/api/product/{id}/image",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image uploaded", body = ApiResponse<ProductImageDto>),
        (status = 400, description = "Missing image or image limit reached", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 410, description = "Product has been deleted", body = ErrorDto),
        (status = 502, description = "Image upload failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut form = MultipartForm::read(multipart).await?;
    let is_thumbnail = form.flag("is_thumbnail")?;
    let image = form
        .take_file("image")
        .ok_or_else(|| Error::ParseError("missing field image".to_string()))?;

    let image_service = ProductImageService::new(&state.db, &state.media);
    let response = image_service
        .upload_product_image(id, image, is_thumbnail)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Make an image its product's thumbnail
#[utoipa::path(
    put,
    path = "/api/image/{id}/thumbnail",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Product image ID")),
    responses(
        (status = 200, description = "Thumbnail updated", body = ApiResponse<ProductImageDto>),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 410, description = "Product has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_to_thumbnail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let image_service = ProductImageService::new(&state.db, &state.media);
    let response = image_service.update_to_thumbnail(id).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Delete a product image
#[utoipa::path(
    delete,
    path = "/api/image/{id}",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Product image ID")),
    responses(
        (status = 200, description = "Image deleted", body = ApiResponse<ProductImageDto>),
        (status = 400, description = "Thumbnail or last image cannot be deleted", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 410, description = "Product has been deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let image_service = ProductImageService::new(&state.db, &state.media);
    let response = image_service.delete_product_image(id).await?;

    Ok((StatusCode::OK, Json(response)))
}
