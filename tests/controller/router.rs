//! Tests driving requests through the full router.
//!
//! Multipart endpoints need a real request body, so these tests build one by hand and
//! send it with `tower::ServiceExt::oneshot`.

use apotek::server::router::routes;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use entity::prelude::*;
use sea_orm::EntityTrait;
use tower::ServiceExt;

use super::*;

static BOUNDARY: &str = "apotek-test-boundary";

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    body
}

fn multipart_request(method: &str, uri: &str, parts: &[Part]) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

fn app(test: &TestContext) -> Router {
    routes().with_state(test.into_app_state())
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests creating a pharmacy with a picture through the multipart endpoint.
///
/// Verifies that the JSON payload part and the picture file part are both read and
/// the response carries the `{data, message}` envelope.
///
/// Expected: 201 CREATED with the uploaded picture URL
#[tokio::test]
async fn creates_pharmacy_from_multipart() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_upload_endpoint("https://cdn.test/pharmacy/front.png", 1)
        .build()
        .await?;

    let payload = r#"{"name":"Apotek Sehat","description":"Open daily","detail_location":"Jl. Thamrin 1","lat":-6.19,"lng":106.82}"#;
    let request = multipart_request(
        "POST",
        "/api/pharmacy",
        &[
            Part::Text("payload", payload),
            Part::File("picture", "front.png", &[1, 2, 3]),
        ],
    );

    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["picture"], "https://cdn.test/pharmacy/front.png");
    assert_eq!(body["data"]["is_main"], true);
    assert_eq!(body["message"], "Pharmacy created successfully");
    test.assert_mocks();

    Ok(())
}

/// Tests that a malformed payload part is rejected before anything is uploaded.
///
/// Expected: 400 BAD REQUEST with an error body and no upload request
#[tokio::test]
async fn rejects_malformed_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_upload_endpoint("https://cdn.test/pharmacy/front.png", 0)
        .build()
        .await?;

    let request = multipart_request(
        "POST",
        "/api/pharmacy",
        &[
            Part::Text("payload", "{\"name\":"),
            Part::File("picture", "front.png", &[1, 2, 3]),
        ],
    );

    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["error"].is_string());
    test.assert_mocks();

    Ok(())
}

/// Tests updating a pharmacy with only a text payload.
///
/// Expected: 200 OK with the patched name
#[tokio::test]
async fn updates_pharmacy_from_multipart() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let pharmacy = test.catalog().insert_pharmacy("Apotek Sehat", true).await?;

    let request = multipart_request(
        "PATCH",
        &format!("/api/pharmacy/{}", pharmacy.id),
        &[Part::Text("payload", r#"{"name":"Apotek Sehat Selalu"}"#)],
    );

    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let row = Pharmacy::find_by_id(pharmacy.id).one(&test.db).await?.unwrap();
    assert_eq!(row.name, "Apotek Sehat Selalu");

    Ok(())
}

/// Tests uploading a product image flagged as thumbnail.
///
/// Expected: 201 CREATED with the image as thumbnail
#[tokio::test]
async fn uploads_product_image() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_upload_endpoint("https://cdn.test/product/box.png", 1)
        .build()
        .await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;

    let request = multipart_request(
        "POST",
        &format!("/api/product/{}/image", product.id),
        &[
            Part::File("image", "box.png", &[4, 5, 6]),
            Part::Text("is_thumbnail", "true"),
        ],
    );

    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["is_thumbnail"], true);
    assert_eq!(body["data"]["image_url"], "https://cdn.test/product/box.png");
    test.assert_mocks();

    Ok(())
}

/// Tests an image upload without the image part.
///
/// Expected: 400 BAD REQUEST
#[tokio::test]
async fn rejects_upload_without_image() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;

    let request = multipart_request(
        "POST",
        &format!("/api/product/{}/image", product.id),
        &[Part::Text("is_thumbnail", "false")],
    );

    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests the thumbnail and image delete routes.
///
/// Expected: 200 OK for the thumbnail switch, then 200 OK deleting the old thumbnail
#[tokio::test]
async fn switches_thumbnail_then_deletes_old_one() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_destroy_endpoint(1)
        .build()
        .await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let old = test.catalog().insert_image(product.id, true).await?;
    let new = test.catalog().insert_image(product.id, false).await?;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/image/{}/thumbnail", new.id))
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/image/{}", old.id))
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    assert!(ProductImage::find_by_id(old.id).one(&test.db).await?.is_none());
    test.assert_mocks();

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 OK listing the pharmacy route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"]["/api/pharmacy"].is_object());
    assert!(body["paths"]["/api/unit/{id}"].is_object());
    assert!(body["paths"]["/api/category/{id}"]["delete"].is_object());

    Ok(())
}

/// Tests that the dashboard path is not captured by the pharmacy id route.
///
/// Expected: 200 OK with the dashboard counts
#[tokio::test]
async fn routes_dashboard_before_pharmacy_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_pharmacy("Apotek Pusat", true).await?;

    let request = Request::builder()
        .uri("/api/pharmacy/dashboard")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["total_pharmacies"], 1);
    assert_eq!(body["data"]["closed_pharmacies"], 1);

    Ok(())
}

/// Tests reading a published product by slug through the router.
///
/// Expected: 200 OK with the product and its thumbnail
#[tokio::test]
async fn reads_product_details_by_slug() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", true).await?;
    let thumbnail = test.catalog().insert_image(product.id, true).await?;

    let request = Request::builder()
        .uri("/api/product/slug/paracetamol")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["product"]["id"], product.id);
    assert_eq!(body["data"]["images"][0]["id"], thumbnail.id);

    Ok(())
}
