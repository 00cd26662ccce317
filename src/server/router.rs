//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Every catalog endpoint is registered with its `utoipa::path` metadata, which is
/// collected into one OpenAPI document served at `/api/docs/openapi.json` and browsable
/// through Swagger UI at `/api/docs`.
///
/// # Registered Endpoints
/// - `POST /api/pharmacy`, `GET|PATCH|DELETE /api/pharmacy/{id}`,
///   `GET /api/pharmacy/dashboard`, `POST /api/pharmacy/verify-name`
/// - `GET|POST /api/pharmacy/{id}/admins`, `DELETE /api/admin/{id}/pharmacy`
/// - `POST /api/product`, `PATCH|DELETE /api/product/{id}`, `POST /api/product/{id}/publish`,
///   `GET /api/product/slug/{slug}`, `POST /api/product/verify-name`
/// - `POST /api/category`, `GET|PATCH|DELETE /api/category/{id}`
/// - `POST /api/product/{id}/unit`, `PATCH|DELETE /api/unit/{id}`
/// - `POST /api/product/{id}/image`, `PUT /api/image/{id}/thumbnail`, `DELETE /api/image/{id}`
///
/// # Example
/// ```ignore
/// let app_state = AppState::from((db, media));
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Apotek", description = "Apotek catalog API"), tags(
        (name = controller::pharmacy::PHARMACY_TAG, description = "Pharmacy API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Pharmacy admin assignment routes"),
        (name = controller::product::PRODUCT_TAG, description = "Product API routes"),
        (name = controller::category::CATEGORY_TAG, description = "Product category API routes"),
        (name = controller::unit::UNIT_TAG, description = "Product unit API routes"),
        (name = controller::image::IMAGE_TAG, description = "Product image API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::pharmacy::create_pharmacy))
        .routes(routes!(
            controller::pharmacy::get_pharmacy,
            controller::pharmacy::update_pharmacy,
            controller::pharmacy::delete_pharmacy
        ))
        .routes(routes!(controller::pharmacy::get_dashboard_pharmacies))
        .routes(routes!(controller::pharmacy::verify_pharmacy_name))
        .routes(routes!(
            controller::admin::get_assigned_admins,
            controller::admin::assign_admins
        ))
        .routes(routes!(controller::admin::unassign_admin))
        .routes(routes!(controller::product::create_product))
        .routes(routes!(
            controller::product::update_product,
            controller::product::delete_product
        ))
        .routes(routes!(controller::product::publish_product))
        .routes(routes!(controller::product::get_product_details))
        .routes(routes!(controller::product::verify_product_name))
        .routes(routes!(controller::category::create_category))
        .routes(routes!(
            controller::category::get_category,
            controller::category::update_category,
            controller::category::delete_category
        ))
        .routes(routes!(controller::unit::create_unit))
        .routes(routes!(
            controller::unit::update_unit,
            controller::unit::delete_unit
        ))
        .routes(routes!(controller::image::upload_image))
        .routes(routes!(controller::image::update_to_thumbnail))
        .routes(routes!(controller::image::delete_image))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
