//! Tests for PharmacyService covering main pharmacy handling, stock provisioning, picture
//! replacement and the delete cascade.

use apotek::{
    model::pharmacy::{CreatePharmacyDto, PharmacyPatch},
    server::{
        error::{conflict::ConflictError, invariant::InvariantError, Error},
        service::pharmacy::PharmacyService,
    },
};
use entity::{prelude::*, sea_orm_active_enums::OrderStatus};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;
use crate::util::{count_main_pharmacies, png};

fn pharmacy_input(name: &str, is_main: bool) -> CreatePharmacyDto {
    CreatePharmacyDto {
        name: name.to_string(),
        description: "24 hour pharmacy".to_string(),
        detail_location: "Jl. Thamrin No. 10".to_string(),
        lat: -6.19,
        lng: 106.82,
        is_main,
    }
}

/// Tests the main pharmacy hand-over when a second pharmacy is created as main.
///
/// Verifies that the first pharmacy is auto-promoted, that creating another pharmacy
/// with `is_main` moves the flag, and that only the non-main pharmacy can be deleted.
///
/// Expected: P1 demoted, P2 main, deleting P2 fails with CannotDeleteMainPharmacy
#[tokio::test]
async fn hands_over_main_pharmacy_on_create() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let media = test.media_client();
    let service = PharmacyService::new(&test.db, &media);

    let p1 = service
        .create_pharmacy(pharmacy_input("Apotek Satu", false), None)
        .await
        .map_err(service_err)?
        .data;
    assert!(p1.is_main);
    assert!(!p1.is_open);

    let p2 = service
        .create_pharmacy(pharmacy_input("Apotek Dua", true), None)
        .await
        .map_err(service_err)?
        .data;
    assert!(p2.is_main);

    let p1_row = Pharmacy::find_by_id(p1.id).one(&test.db).await?.unwrap();
    assert!(!p1_row.is_main);
    assert_eq!(count_main_pharmacies(&test).await?, 1);

    let deleted = service.delete_pharmacy(p1.id).await;
    assert!(deleted.is_ok_and(|r| !r.data.soft_deleted));

    let result = service.delete_pharmacy(p2.id).await;
    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::CannotDeleteMainPharmacy))
    ));
    assert_eq!(count_main_pharmacies(&test).await?, 1);

    Ok(())
}

/// Tests stock provisioning for a new pharmacy.
///
/// Verifies that only live, published products receive an empty stock row.
///
/// Expected: one stock row with quantity 0
#[tokio::test]
async fn provisions_stock_for_published_products() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let published = test.catalog().insert_product("Paracetamol", true).await?;
    test.catalog().insert_product("Ibuprofen", false).await?;
    test.catalog().insert_deleted_product("Amoxicillin").await?;
    let media = test.media_client();

    let pharmacy = PharmacyService::new(&test.db, &media)
        .create_pharmacy(pharmacy_input("Apotek Sehat", false), None)
        .await
        .map_err(service_err)?
        .data;

    let stock = Stock::find()
        .filter(entity::stock::Column::PharmacyId.eq(pharmacy.id))
        .all(&test.db)
        .await?;
    assert_eq!(stock.len(), 1);
    assert_eq!(stock[0].product_id, published.id);
    assert_eq!(stock[0].quantity, 0);

    Ok(())
}

/// Tests that the name of a soft-deleted pharmacy stays reserved.
///
/// Expected: Err with ConflictError::NameHeldByDeleted and no pharmacy created
#[tokio::test]
async fn rejects_name_of_deleted_pharmacy() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_deleted_pharmacy("Apotek Lama").await?;
    let media = test.media_client();

    let result = PharmacyService::new(&test.db, &media)
        .create_pharmacy(pharmacy_input("apotek lama", false), None)
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::NameHeldByDeleted { .. }))
    ));
    assert_eq!(Pharmacy::find().count(&test.db).await?, 1);

    Ok(())
}

/// Tests that a picture is uploaded before the pharmacy is stored.
///
/// Expected: pharmacy picture set to the URL returned by the media store
#[tokio::test]
async fn stores_uploaded_picture() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_upload_endpoint("https://cdn.test/pharmacy/front.png", 1)
        .build()
        .await?;
    let media = test.media_client();

    let pharmacy = PharmacyService::new(&test.db, &media)
        .create_pharmacy(pharmacy_input("Apotek Foto", false), Some(png("front.png")))
        .await
        .map_err(service_err)?
        .data;

    assert_eq!(pharmacy.picture, "https://cdn.test/pharmacy/front.png");
    test.assert_mocks();

    Ok(())
}

/// Tests picture replacement on update.
///
/// Verifies that the new picture is stored and the previous one is removed from the
/// media store once the update has committed.
///
/// Expected: new URL stored, one upload and one removal request
#[tokio::test]
async fn replaces_picture_on_update() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_upload_endpoint("https://cdn.test/pharmacy/new.png", 1)
        .with_destroy_endpoint(1)
        .build()
        .await?;
    let pharmacy = test.catalog().insert_pharmacy("Apotek Sehat", true).await?;
    let media = test.media_client();

    let patch = PharmacyPatch {
        description: Some("Renovated".to_string()),
        ..Default::default()
    };
    let updated = PharmacyService::new(&test.db, &media)
        .update_pharmacy(pharmacy.id, patch, Some(png("new.png")))
        .await
        .map_err(service_err)?
        .data;

    assert_eq!(updated.picture, "https://cdn.test/pharmacy/new.png");
    assert_eq!(updated.description, "Renovated");
    assert_eq!(updated.name, "Apotek Sehat");
    test.assert_mocks();

    Ok(())
}

/// Tests that the main pharmacy cannot be demoted without a replacement.
///
/// Expected: Err with CannotDemoteMain and the pharmacy still main
#[tokio::test]
async fn rejects_main_demotion() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let pharmacy = test.catalog().insert_pharmacy("Apotek Sehat", true).await?;
    let media = test.media_client();

    let patch = PharmacyPatch {
        is_main: Some(false),
        ..Default::default()
    };
    let result = PharmacyService::new(&test.db, &media)
        .update_pharmacy(pharmacy.id, patch, None)
        .await;

    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::CannotDemoteMain(_)))
    ));
    assert_eq!(count_main_pharmacies(&test).await?, 1);

    Ok(())
}

/// Tests promoting an existing pharmacy through an update.
///
/// Expected: flag moved, exactly one main pharmacy
#[tokio::test]
async fn promotes_pharmacy_on_update() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let main = test.catalog().insert_pharmacy("Apotek Pusat", true).await?;
    let branch = test.catalog().insert_pharmacy("Apotek Cabang", false).await?;
    let media = test.media_client();

    let patch = PharmacyPatch {
        is_main: Some(true),
        ..Default::default()
    };
    let updated = PharmacyService::new(&test.db, &media)
        .update_pharmacy(branch.id, patch, None)
        .await
        .map_err(service_err)?
        .data;

    assert!(updated.is_main);
    let main_row = Pharmacy::find_by_id(main.id).one(&test.db).await?.unwrap();
    assert!(!main_row.is_main);
    assert_eq!(count_main_pharmacies(&test).await?, 1);

    Ok(())
}

/// Tests the soft delete path for a pharmacy referenced by orders.
///
/// Verifies that open orders are canceled with an activity record, completed orders
/// are left alone, admins are unassigned, and stock and order lines are marked deleted.
///
/// Expected: soft delete with one canceled order and one unassigned admin
#[tokio::test]
async fn soft_deletes_referenced_pharmacy() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_pharmacy("Apotek Pusat", true).await?;
    let pharmacy = test.catalog().insert_pharmacy("Apotek Cabang", false).await?;
    let product = test.catalog().insert_product("Paracetamol", true).await?;
    let unit = test.catalog().insert_unit(product.id, "Box", true, 1.0).await?;
    test.catalog().insert_stock(product.id, pharmacy.id, 10).await?;
    test.catalog().insert_admin(Some(pharmacy.id)).await?;
    let (open, _) = test
        .order()
        .insert_order_for(product.id, pharmacy.id, unit.id, OrderStatus::Processing)
        .await?;
    let (completed, _) = test
        .order()
        .insert_order_for(product.id, pharmacy.id, unit.id, OrderStatus::Completed)
        .await?;
    test.order().insert_cart(product.id, pharmacy.id, unit.id).await?;
    let media = test.media_client();

    let outcome = PharmacyService::new(&test.db, &media)
        .delete_pharmacy(pharmacy.id)
        .await
        .map_err(service_err)?
        .data;

    assert!(outcome.soft_deleted);
    assert_eq!(outcome.canceled_orders, 1);
    assert_eq!(outcome.unassigned_admins, 1);

    let row = Pharmacy::find_by_id(pharmacy.id).one(&test.db).await?.unwrap();
    assert!(row.deleted_at.is_some());

    let open = Order::find_by_id(open.id).one(&test.db).await?.unwrap();
    assert_eq!(open.status, OrderStatus::Canceled);
    let completed = Order::find_by_id(completed.id).one(&test.db).await?.unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    let activities = OrderActivity::find()
        .filter(entity::order_activity::Column::OrderId.eq(open.id))
        .all(&test.db)
        .await?;
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].status, OrderStatus::Canceled);

    let live_stock = Stock::find()
        .filter(entity::stock::Column::PharmacyId.eq(pharmacy.id))
        .filter(entity::stock::Column::DeletedAt.is_null())
        .count(&test.db)
        .await?;
    assert_eq!(live_stock, 0);

    let live_lines = OrderStock::find()
        .filter(entity::order_stock::Column::PharmacyId.eq(pharmacy.id))
        .filter(entity::order_stock::Column::DeletedAt.is_null())
        .count(&test.db)
        .await?;
    assert_eq!(live_lines, 0);

    assert_eq!(Cart::find().count(&test.db).await?, 0);
    let assigned = Admin::find()
        .filter(entity::admin::Column::PharmacyId.eq(pharmacy.id))
        .count(&test.db)
        .await?;
    assert_eq!(assigned, 0);

    Ok(())
}

/// Tests that a failing picture removal does not undo a committed delete.
///
/// Expected: Ok with the pharmacy row gone despite the media store answering 500
#[tokio::test]
async fn hard_delete_survives_media_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_failing_destroy_endpoint(1)
        .build()
        .await?;
    test.catalog().insert_pharmacy("Apotek Pusat", true).await?;
    let pharmacy = test.catalog().insert_pharmacy("Apotek Cabang", false).await?;
    let media = test.media_client();

    let result = PharmacyService::new(&test.db, &media)
        .delete_pharmacy(pharmacy.id)
        .await;

    assert!(result.is_ok_and(|r| !r.data.soft_deleted));
    assert!(Pharmacy::find_by_id(pharmacy.id).one(&test.db).await?.is_none());
    test.assert_mocks();

    Ok(())
}
