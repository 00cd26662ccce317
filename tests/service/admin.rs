//! Tests for AdminAssignmentService opening and closing pharmacies as admins move.

use apotek::server::{
    error::{lookup::LookupError, Error},
    service::admin::AdminAssignmentService,
};
use entity::prelude::*;
use sea_orm::EntityTrait;

use super::*;

/// Tests moving an admin between pharmacies.
///
/// Verifies that the receiving pharmacy is opened and the pharmacy left without admins
/// is closed.
///
/// Expected: admin moved, first pharmacy closed, second pharmacy open
#[tokio::test]
async fn moves_admin_and_closes_empty_pharmacy() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let first = test.catalog().insert_pharmacy("Apotek Satu", true).await?;
    let second = test.catalog().insert_pharmacy("Apotek Dua", false).await?;
    let admin = test.catalog().insert_admin(None).await?;
    let service = AdminAssignmentService::new(&test.db);

    let opened = service
        .assign_admins(first.id, vec![admin.id])
        .await
        .map_err(service_err)?
        .data;
    assert!(opened.is_open);

    let moved = service
        .assign_admins(second.id, vec![admin.id, admin.id])
        .await
        .map_err(service_err)?
        .data;
    assert!(moved.is_open);

    let first = Pharmacy::find_by_id(first.id).one(&test.db).await?.unwrap();
    assert!(!first.is_open);
    let admin = Admin::find_by_id(admin.id).one(&test.db).await?.unwrap();
    assert_eq!(admin.pharmacy_id, Some(second.id));

    Ok(())
}

/// Tests that a pharmacy keeps its open state while another admin remains.
///
/// Expected: pharmacy still open after one of its two admins moves away
#[tokio::test]
async fn keeps_pharmacy_open_with_remaining_admin() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let first = test.catalog().insert_pharmacy("Apotek Satu", true).await?;
    let second = test.catalog().insert_pharmacy("Apotek Dua", false).await?;
    let leaving = test.catalog().insert_admin(None).await?;
    let staying = test.catalog().insert_admin(None).await?;
    let service = AdminAssignmentService::new(&test.db);

    service
        .assign_admins(first.id, vec![leaving.id, staying.id])
        .await
        .map_err(service_err)?;
    service
        .assign_admins(second.id, vec![leaving.id])
        .await
        .map_err(service_err)?;

    let first = Pharmacy::find_by_id(first.id).one(&test.db).await?.unwrap();
    assert!(first.is_open);

    Ok(())
}

/// Tests that deleted admins cannot be assigned.
///
/// Expected: Err with AdminsNotFound naming the deleted admin, pharmacy untouched
#[tokio::test]
async fn rejects_deleted_admin() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let pharmacy = test.catalog().insert_pharmacy("Apotek Satu", true).await?;
    let live = test.catalog().insert_admin(None).await?;
    let deleted = test.catalog().insert_deleted_admin().await?;

    let result = AdminAssignmentService::new(&test.db)
        .assign_admins(pharmacy.id, vec![live.id, deleted.id])
        .await;

    assert!(matches!(
        result,
        Err(Error::LookupError(LookupError::AdminsNotFound(ref ids))) if ids == &vec![deleted.id]
    ));
    let live = Admin::find_by_id(live.id).one(&test.db).await?.unwrap();
    assert_eq!(live.pharmacy_id, None);
    let pharmacy = Pharmacy::find_by_id(pharmacy.id).one(&test.db).await?.unwrap();
    assert!(!pharmacy.is_open);

    Ok(())
}

/// Tests that unassigning the last admin closes the pharmacy.
///
/// Expected: admin without pharmacy, pharmacy closed
#[tokio::test]
async fn unassigning_last_admin_closes_pharmacy() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let pharmacy = test.catalog().insert_pharmacy("Apotek Satu", true).await?;
    let admin = test.catalog().insert_admin(None).await?;
    let service = AdminAssignmentService::new(&test.db);

    service
        .assign_admins(pharmacy.id, vec![admin.id])
        .await
        .map_err(service_err)?;
    let unassigned = service
        .unassign_admin(admin.id)
        .await
        .map_err(service_err)?
        .data;

    assert_eq!(unassigned.pharmacy_id, None);
    let pharmacy = Pharmacy::find_by_id(pharmacy.id).one(&test.db).await?.unwrap();
    assert!(!pharmacy.is_open);

    Ok(())
}
