//! Tests for the product endpoints.

use apotek::{
    model::{
        api::VerifyNameDto,
        product::{AcquisitionDto, CreateProductDto, GolonganDto, ProductPatch},
    },
    server::controller::product::{
        create_product, delete_product, get_product_details, publish_product, update_product,
        verify_product_name,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

fn product_input(name: &str) -> CreateProductDto {
    CreateProductDto {
        name: name.to_string(),
        name_mims: name.to_string(),
        golongan: GolonganDto::ObatBebasTerbatas,
        acquisition: AcquisitionDto::NonGenerik,
        nomor_edar: "DTL0000000000A1".to_string(),
        needs_prescription: false,
        description: "Cough syrup".to_string(),
        composition: "Dextromethorphan 15 mg".to_string(),
        dose: "3 x 1 spoon".to_string(),
        side_effects: "Drowsiness".to_string(),
        indication: "Dry cough".to_string(),
        brand: None,
        category_ids: Vec::new(),
    }
}

/// Tests creating a product.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn creates_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = create_product(State(test.into_app_state()), Json(product_input("Siladex"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating a product under the name of a deleted product.
///
/// Expected: Err with 422 UNPROCESSABLE ENTITY response
#[tokio::test]
async fn deleted_name_is_unprocessable() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_deleted_product("Siladex").await?;

    let result = create_product(State(test.into_app_state()), Json(product_input("Siladex"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests renaming a product to the name of another live product.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn taken_name_conflicts() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_product("Siladex", false).await?;
    let product = test.catalog().insert_product("Woods", false).await?;

    let patch = ProductPatch {
        name: Some("Siladex".to_string()),
        ..Default::default()
    };
    let result = update_product(State(test.into_app_state()), Path(product.id), Json(patch)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests publishing a product with a unit and an image.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn publishes_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_pharmacy("Apotek Pusat", true).await?;
    let product = test.catalog().insert_product("Siladex", false).await?;
    test.catalog().insert_unit(product.id, "Botol", true, 1.0).await?;
    test.catalog().insert_image(product.id, true).await?;

    let result = publish_product(State(test.into_app_state()), Path(product.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests deleting a product that is already soft-deleted.
///
/// Expected: Err with 410 GONE response
#[tokio::test]
async fn deleted_product_is_gone() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_deleted_product("Siladex").await?;

    let result = delete_product(State(test.into_app_state()), Path(product.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GONE);

    Ok(())
}

/// Tests name verification for a free name.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn verifies_free_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let body = VerifyNameDto {
        name: "Siladex".to_string(),
        id: None,
    };
    let result = verify_product_name(State(test.into_app_state()), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests name verification while renaming a product that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn rejects_verification_for_unknown_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let body = VerifyNameDto {
        name: "Siladex".to_string(),
        id: Some(42),
    };
    let result = verify_product_name(State(test.into_app_state()), Json(body)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests fetching the details of an unpublished product by slug.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn draft_details_are_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_product("Paracetamol", false).await?;

    let result = get_product_details(
        State(test.into_app_state()),
        Path("paracetamol".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
