//! Tests for ProductService covering publishing, stock provisioning, the detail read and
//! the product delete cascade.

use apotek::{
    model::product::{AcquisitionDto, CreateProductDto, GolonganDto, ProductPatch},
    server::{
        data::unit::UnitRepository,
        error::{
            conflict::ConflictError, invariant::InvariantError, lookup::LookupError, Error,
        },
        service::{product::ProductService, stock::StockProvisioner},
    },
};
use entity::{prelude::*, sea_orm_active_enums::OrderStatus};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

fn product_input(name: &str, golongan: GolonganDto) -> CreateProductDto {
    CreateProductDto {
        name: name.to_string(),
        name_mims: name.to_string(),
        golongan,
        acquisition: AcquisitionDto::Generik,
        nomor_edar: "GKL1234567890A1".to_string(),
        needs_prescription: false,
        description: "Pain reliever".to_string(),
        composition: "Paracetamol 500 mg".to_string(),
        dose: "3 x 1 tablet".to_string(),
        side_effects: "Nausea".to_string(),
        indication: "Fever".to_string(),
        brand: Some("Sanbe".to_string()),
        category_ids: Vec::new(),
    }
}

/// Tests product creation with slug generation and prescription rules.
///
/// Verifies that the slug is derived from the name and that prescription-only
/// medicine always requires a prescription.
///
/// Expected: unpublished product with slug and needs_prescription set
#[tokio::test]
async fn creates_product_with_slug_and_prescription() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let category = test.catalog().insert_category("Antibiotik").await?;
    let media = test.media_client();

    let mut input = product_input("Amoxicillin 500 mg", GolonganDto::ObatKeras);
    input.category_ids = vec![category.id, category.id];
    let product = ProductService::new(&test.db, &media)
        .create_product_info(input)
        .await
        .map_err(service_err)?
        .data;

    assert_eq!(product.slug, "amoxicillin-500-mg");
    assert!(product.needs_prescription);
    assert!(!product.published);
    assert_eq!(product.category_ids, vec![category.id]);

    Ok(())
}

/// Tests that the name of a soft-deleted product stays reserved.
///
/// Expected: Err with ConflictError::NameHeldByDeleted
#[tokio::test]
async fn rejects_name_of_deleted_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_deleted_product("Paracetamol").await?;
    let media = test.media_client();

    let result = ProductService::new(&test.db, &media)
        .create_product_info(product_input("PARACETAMOL", GolonganDto::ObatBebas))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::NameHeldByDeleted { .. }))
    ));

    Ok(())
}

/// Tests renaming a product and replacing its categories.
///
/// Expected: new slug, categories replaced, untouched fields kept
#[tokio::test]
async fn updates_slug_and_categories() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let old = test.catalog().insert_category("Demam").await?;
    let new = test.catalog().insert_category("Nyeri").await?;
    test.catalog()
        .insert_product_category(product.id, old.id)
        .await?;
    let media = test.media_client();

    let patch = ProductPatch {
        name: Some("Paracetamol Forte".to_string()),
        category_ids: Some(vec![new.id]),
        ..Default::default()
    };
    let updated = ProductService::new(&test.db, &media)
        .update_product_info(product.id, patch)
        .await
        .map_err(service_err)?
        .data;

    assert_eq!(updated.name, "Paracetamol Forte");
    assert_eq!(updated.slug, "paracetamol-forte");
    assert_eq!(updated.category_ids, vec![new.id]);
    assert_eq!(updated.composition, product.composition);

    Ok(())
}

/// Tests the publish preconditions.
///
/// Expected: PublishRequiresUnit without units, PublishRequiresImage without images
#[tokio::test]
async fn publish_requires_unit_and_image() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let media = test.media_client();
    let service = ProductService::new(&test.db, &media);

    let result = service.publish_product(product.id).await;
    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::PublishRequiresUnit))
    ));

    test.catalog().insert_unit(product.id, "Box", true, 1.0).await?;
    let result = service.publish_product(product.id).await;
    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::PublishRequiresImage))
    ));

    let product = Product::find_by_id(product.id).one(&test.db).await?.unwrap();
    assert!(!product.published);

    Ok(())
}

/// Tests publishing, then ordering and deleting the product.
///
/// Verifies that publishing stocks the product at every live pharmacy exactly once,
/// and that deleting the ordered product soft-deletes it with its stock, cancels the
/// open order with an activity record and purges carts.
///
/// Expected: 2 stock rows created, then soft delete with 1 canceled order
#[tokio::test]
async fn publishes_then_soft_deletes_ordered_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let p1 = test.catalog().insert_pharmacy("Apotek Satu", true).await?;
    test.catalog().insert_pharmacy("Apotek Dua", false).await?;
    test.catalog().insert_deleted_pharmacy("Apotek Tutup").await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let unit = test.catalog().insert_unit(product.id, "Box", true, 1.0).await?;
    test.catalog().insert_image(product.id, true).await?;
    let media = test.media_client();
    let service = ProductService::new(&test.db, &media);

    let published = service
        .publish_product(product.id)
        .await
        .map_err(service_err)?
        .data;
    assert!(published.product.published);
    assert_eq!(published.stock_rows_created, 2);

    let again = StockProvisioner::new(&test.db)
        .on_product_published(product.id)
        .await
        .map_err(service_err)?;
    assert_eq!(again, 0);
    let result = service.publish_product(product.id).await;
    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::AlreadyPublished(_)))
    ));

    let (order, _) = test
        .order()
        .insert_order_for(product.id, p1.id, unit.id, OrderStatus::WaitingPayment)
        .await?;
    test.order().insert_cart(product.id, p1.id, unit.id).await?;

    let outcome = service
        .delete_product(product.id)
        .await
        .map_err(service_err)?
        .data;

    assert!(outcome.soft_deleted);
    assert_eq!(outcome.canceled_orders, 1);

    let product = Product::find_by_id(product.id).one(&test.db).await?.unwrap();
    assert!(product.deleted_at.is_some());

    let live_stock = Stock::find()
        .filter(entity::stock::Column::ProductId.eq(product.id))
        .filter(entity::stock::Column::DeletedAt.is_null())
        .count(&test.db)
        .await?;
    assert_eq!(live_stock, 0);

    let order = Order::find_by_id(order.id).one(&test.db).await?.unwrap();
    assert_eq!(order.status, OrderStatus::Canceled);
    let activities = OrderActivity::find()
        .filter(entity::order_activity::Column::OrderId.eq(order.id))
        .count(&test.db)
        .await?;
    assert_eq!(activities, 1);
    assert_eq!(Cart::find().count(&test.db).await?, 0);

    Ok(())
}

/// Tests the hard delete path for a draft product.
///
/// Verifies that units, images and categories go with the product and the image
/// file is removed from the media store after commit.
///
/// Expected: no rows left for the product, one removal request
#[tokio::test]
async fn hard_deletes_draft_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_destroy_endpoint(1)
        .build()
        .await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let category = test.catalog().insert_category("Demam").await?;
    test.catalog()
        .insert_product_category(product.id, category.id)
        .await?;
    test.catalog().insert_unit(product.id, "Box", true, 1.0).await?;
    test.catalog().insert_image(product.id, true).await?;
    let media = test.media_client();

    let outcome = ProductService::new(&test.db, &media)
        .delete_product(product.id)
        .await
        .map_err(service_err)?
        .data;

    assert!(!outcome.soft_deleted);
    assert!(Product::find_by_id(product.id).one(&test.db).await?.is_none());
    assert_eq!(UnitProduct::find().count(&test.db).await?, 0);
    assert_eq!(ProductImage::find().count(&test.db).await?, 0);
    assert_eq!(ProductCategory::find().count(&test.db).await?, 0);
    test.assert_mocks();

    Ok(())
}

/// Tests the product detail read by slug.
///
/// Verifies that images list the thumbnail first, units list the main unit first with
/// deleted units left out, and categories are attached.
///
/// Expected: the full detail view for a published product
#[tokio::test]
async fn returns_details_of_published_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", true).await?;
    let category = test.catalog().insert_category("Demam").await?;
    test.catalog()
        .insert_product_category(product.id, category.id)
        .await?;
    let image = test.catalog().insert_image(product.id, false).await?;
    let thumbnail = test.catalog().insert_image(product.id, true).await?;
    let strip = test.catalog().insert_unit(product.id, "Strip", false, 10.0).await?;
    let tablet = test.catalog().insert_unit(product.id, "Tablet", true, 1.0).await?;
    let box_unit = test.catalog().insert_unit(product.id, "Box", false, 100.0).await?;
    UnitRepository::new(&test.db).soft_delete(box_unit.id).await?;
    let media = test.media_client();

    let details = ProductService::new(&test.db, &media)
        .get_product_details("paracetamol")
        .await
        .map_err(service_err)?
        .data;

    let image_ids: Vec<i32> = details.images.iter().map(|i| i.id).collect();
    let unit_ids: Vec<i32> = details.units.iter().map(|u| u.id).collect();
    assert_eq!(details.product.id, product.id);
    assert_eq!(details.product.category_ids, vec![category.id]);
    assert_eq!(image_ids, vec![thumbnail.id, image.id]);
    assert_eq!(unit_ids, vec![tablet.id, strip.id]);
    assert_eq!(details.categories[0].name, "Demam");

    Ok(())
}

/// Tests that drafts and deleted products have no detail view.
///
/// Expected: NotFound for a draft slug and for a deleted product's slug
#[tokio::test]
async fn hides_details_of_draft_and_deleted_products() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_product("Ibuprofen", false).await?;
    test.catalog().insert_deleted_product("Aspirin").await?;
    let media = test.media_client();

    let service = ProductService::new(&test.db, &media);
    let draft = service.get_product_details("ibuprofen").await;
    let deleted = service.get_product_details("aspirin").await;

    assert!(matches!(
        draft,
        Err(Error::LookupError(LookupError::ProductSlugNotFound(_)))
    ));
    assert!(matches!(
        deleted,
        Err(Error::LookupError(LookupError::ProductSlugNotFound(_)))
    ));

    Ok(())
}
