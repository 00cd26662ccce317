//! Tests for ProductImageService covering thumbnail handling, the image delete guards
//! and media store interaction.

use apotek::server::{
    error::{invariant::InvariantError, lookup::LookupError, Error},
    service::image::ProductImageService,
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;
use crate::util::png;

async fn thumbnail_count(test: &TestContext, product_id: i32) -> Result<u64, TestError> {
    Ok(ProductImage::find()
        .filter(entity::product_image::Column::ProductId.eq(product_id))
        .filter(entity::product_image::Column::IsThumbnail.eq(true))
        .count(&test.db)
        .await?)
}

/// Tests thumbnail assignment across uploads.
///
/// Verifies that the first upload becomes the thumbnail without asking, and that a
/// later upload flagged as thumbnail takes the flag over.
///
/// Expected: second image is the single thumbnail
#[tokio::test]
async fn moves_thumbnail_to_flagged_upload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_upload_endpoint("https://cdn.test/product/front.png", 2)
        .build()
        .await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let media = test.media_client();
    let service = ProductImageService::new(&test.db, &media);

    let first = service
        .upload_product_image(product.id, png("front.png"), false)
        .await
        .map_err(service_err)?
        .data;
    assert!(first.is_thumbnail);
    assert_eq!(first.image_url, "https://cdn.test/product/front.png");

    let second = service
        .upload_product_image(product.id, png("back.png"), true)
        .await
        .map_err(service_err)?
        .data;
    assert!(second.is_thumbnail);

    let first = ProductImage::find_by_id(first.id).one(&test.db).await?.unwrap();
    assert!(!first.is_thumbnail);
    assert_eq!(thumbnail_count(&test, product.id).await?, 1);
    test.assert_mocks();

    Ok(())
}

/// Tests that the image limit is checked before anything is uploaded.
///
/// Expected: Err with ImageLimit and no upload request
#[tokio::test]
async fn rejects_upload_over_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_upload_endpoint("https://cdn.test/product/extra.png", 0)
        .build()
        .await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    test.catalog().insert_image(product.id, true).await?;
    for _ in 0..4 {
        test.catalog().insert_image(product.id, false).await?;
    }
    let media = test.media_client();

    let result = ProductImageService::new(&test.db, &media)
        .upload_product_image(product.id, png("extra.png"), false)
        .await;

    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::ImageLimit(5)))
    ));
    test.assert_mocks();

    Ok(())
}

/// Tests switching the thumbnail to another image.
///
/// Expected: chosen image is the single thumbnail
#[tokio::test]
async fn updates_thumbnail() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", true).await?;
    test.catalog().insert_image(product.id, true).await?;
    let other = test.catalog().insert_image(product.id, false).await?;
    let media = test.media_client();

    let updated = ProductImageService::new(&test.db, &media)
        .update_to_thumbnail(other.id)
        .await
        .map_err(service_err)?
        .data;

    assert!(updated.is_thumbnail);
    assert_eq!(thumbnail_count(&test, product.id).await?, 1);

    Ok(())
}

/// Tests deleting the only image of an unpublished product.
///
/// Verifies that neither the thumbnail nor the last image guard applies to a draft with
/// a single image, and that the file is removed from the media store.
///
/// Expected: Ok with the product left without images
#[tokio::test]
async fn deletes_only_image_of_draft() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_destroy_endpoint(1)
        .build()
        .await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    let image = test.catalog().insert_image(product.id, true).await?;
    let media = test.media_client();

    let result = ProductImageService::new(&test.db, &media)
        .delete_product_image(image.id)
        .await;

    assert!(result.is_ok());
    let remaining = ProductImage::find()
        .filter(entity::product_image::Column::ProductId.eq(product.id))
        .count(&test.db)
        .await?;
    assert_eq!(remaining, 0);
    test.assert_mocks();

    Ok(())
}

/// Tests the thumbnail delete guards.
///
/// Expected: CannotDeleteThumbnail while other images exist, then
/// CannotDeletePublishedThumbnail once it is the last image of a published product
#[tokio::test]
async fn rejects_deleting_thumbnail() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_product("Paracetamol", true).await?;
    let thumbnail = test.catalog().insert_image(product.id, true).await?;
    let other = test.catalog().insert_image(product.id, false).await?;
    let media = test.media_client();
    let service = ProductImageService::new(&test.db, &media);

    let result = service.delete_product_image(thumbnail.id).await;
    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::CannotDeleteThumbnail))
    ));

    ProductImage::delete_by_id(other.id).exec(&test.db).await?;

    let result = service.delete_product_image(thumbnail.id).await;
    assert!(matches!(
        result,
        Err(Error::InvariantError(InvariantError::CannotDeletePublishedThumbnail))
    ));

    Ok(())
}

/// Tests deleting an image of a soft-deleted product.
///
/// Expected: Err with ProductGone
#[tokio::test]
async fn rejects_image_of_deleted_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let product = test.catalog().insert_deleted_product("Paracetamol").await?;
    test.catalog().insert_image(product.id, true).await?;
    let other = test.catalog().insert_image(product.id, false).await?;
    let media = test.media_client();

    let result = ProductImageService::new(&test.db, &media)
        .delete_product_image(other.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::LookupError(LookupError::ProductGone(_)))
    ));

    Ok(())
}

/// Tests that a failing file removal does not undo a committed image delete.
///
/// Expected: Ok with the image row gone despite the media store answering 500
#[tokio::test]
async fn delete_survives_media_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_failing_destroy_endpoint(1)
        .build()
        .await?;
    let product = test.catalog().insert_product("Paracetamol", false).await?;
    test.catalog().insert_image(product.id, true).await?;
    let other = test.catalog().insert_image(product.id, false).await?;
    let media = test.media_client();

    let result = ProductImageService::new(&test.db, &media)
        .delete_product_image(other.id)
        .await;

    assert!(result.is_ok());
    assert!(ProductImage::find_by_id(other.id)
        .one(&test.db)
        .await?
        .is_none());
    test.assert_mocks();

    Ok(())
}
