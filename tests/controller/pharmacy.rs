//! Tests for the pharmacy JSON endpoints.

use apotek::{
    model::api::VerifyNameDto,
    server::controller::pharmacy::{
        delete_pharmacy, get_dashboard_pharmacies, get_pharmacy, verify_pharmacy_name,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;

/// Tests deleting a branch pharmacy.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn deletes_branch_pharmacy() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_pharmacy("Apotek Pusat", true).await?;
    let branch = test.catalog().insert_pharmacy("Apotek Cabang", false).await?;

    let result = delete_pharmacy(State(test.into_app_state()), Path(branch.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests deleting the main pharmacy.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn rejects_main_pharmacy_delete() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let main = test.catalog().insert_pharmacy("Apotek Pusat", true).await?;

    let result = delete_pharmacy(State(test.into_app_state()), Path(main.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests deleting a pharmacy that does not exist.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn missing_pharmacy_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = delete_pharmacy(State(test.into_app_state()), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting a pharmacy that is already soft-deleted.
///
/// Expected: Err with 410 GONE response
#[tokio::test]
async fn deleted_pharmacy_is_gone() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let pharmacy = test.catalog().insert_deleted_pharmacy("Apotek Lama").await?;

    let result = delete_pharmacy(State(test.into_app_state()), Path(pharmacy.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GONE);

    Ok(())
}

/// Tests name verification for a taken name.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn verifies_taken_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_pharmacy("Apotek Pusat", true).await?;

    let body = VerifyNameDto {
        name: "Apotek Pusat".to_string(),
        id: None,
    };
    let result = verify_pharmacy_name(State(test.into_app_state()), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests fetching a soft-deleted pharmacy.
///
/// Expected: Err with 410 GONE response
#[tokio::test]
async fn get_deleted_pharmacy_is_gone() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let pharmacy = test.catalog().insert_deleted_pharmacy("Apotek Lama").await?;

    let result = get_pharmacy(State(test.into_app_state()), Path(pharmacy.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GONE);

    Ok(())
}

/// Tests fetching the dashboard counts.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_dashboard_counts() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_pharmacy("Apotek Pusat", true).await?;

    let result = get_dashboard_pharmacies(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
