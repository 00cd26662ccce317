//! Tests for the unit endpoints.

use apotek::{
    model::product::{CreateUnitDto, UnitPatch},
    server::controller::unit::{create_unit, delete_unit, update_unit},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

/// Tests adding a unit to a product.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn creates_unit() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;

    let body = CreateUnitDto {
        name: "Strip".to_string(),
        is_main: false,
        weight: 5.0,
        price: 4_000,
        ratio_to_main: 1.0,
    };
    let result = create_unit(State(test.into_app_state()), Path(product.id), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests demoting the main unit.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn rejects_main_unit_demotion() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let unit = test.catalog().insert_unit(product.id, "Strip", true, 1.0).await?;

    let patch = UnitPatch {
        is_main: Some(false),
        ..Default::default()
    };
    let result = update_unit(State(test.into_app_state()), Path(unit.id), Json(patch)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests deleting the last unit of a published product.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn rejects_last_unit_delete() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", true).await?;
    let unit = test.catalog().insert_unit(product.id, "Strip", true, 1.0).await?;

    let result = delete_unit(State(test.into_app_state()), Path(unit.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
