//! Tests for the category endpoints.

use apotek::{
    model::category::{CategoryPatch, CreateCategoryDto},
    server::controller::category::{
        create_category, delete_category, get_category, update_category,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

/// Tests creating a category.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn creates_category() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let body = CreateCategoryDto {
        name: "Vitamin".to_string(),
        description: "Supplements".to_string(),
    };
    let result = create_category(State(test.into_app_state()), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating a category whose name is already used.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn rejects_duplicate_category() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_category("Vitamin").await?;

    let body = CreateCategoryDto {
        name: "VITAMIN".to_string(),
        description: String::new(),
    };
    let result = create_category(State(test.into_app_state()), Json(body)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests fetching a category that does not exist.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn missing_category_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = get_category(State(test.into_app_state()), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests renaming a category to a blank name.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn rejects_blank_rename() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let category = test.catalog().insert_category("Vitamin").await?;

    let patch = CategoryPatch {
        name: Some("  ".to_string()),
        ..Default::default()
    };
    let result = update_category(State(test.into_app_state()), Path(category.id), Json(patch)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests deleting a category linked to a product.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn deletes_linked_category() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", true).await?;
    let category = test.catalog().insert_category("Demam").await?;
    test.catalog()
        .insert_product_category(product.id, category.id)
        .await?;

    let result = delete_category(State(test.into_app_state()), Path(category.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
