//! Uniqueness and existence checks shared by every operation service.
//!
//! Lookups return the live row or a typed [`LookupError`]; name checks distinguish a name
//! held by a live record from one only held by a deleted record, since deleted pharmacy
//! and product names stay reserved.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::server::{
    data::{
        admin::AdminRepository, category::CategoryRepository, image::ProductImageRepository,
        pharmacy::PharmacyRepository, product::ProductRepository, unit::UnitRepository,
    },
    error::{conflict::ConflictError, invariant::InvariantError, lookup::LookupError, Error},
};

pub struct Validator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Validator<'a, C> {
    /// Creates a new instance of [`Validator`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ensures no other pharmacy, live or deleted, uses the name
    pub async fn pharmacy_name(&self, name: &str, exclude_id: Option<i32>) -> Result<(), Error> {
        let matches = PharmacyRepository::new(self.db)
            .find_by_name(name, exclude_id)
            .await?;

        check_name_conflict(
            "Pharmacy",
            name,
            matches.iter().map(|p| p.deleted_at.is_none()),
        )
    }

    /// Ensures no other product, live or deleted, uses the name
    pub async fn product_name(&self, name: &str, exclude_id: Option<i32>) -> Result<(), Error> {
        let matches = ProductRepository::new(self.db)
            .find_by_name(name, exclude_id)
            .await?;

        check_name_conflict(
            "Product",
            name,
            matches.iter().map(|p| p.deleted_at.is_none()),
        )
    }

    /// Ensures no other live unit of the product uses the name
    pub async fn unit_name(
        &self,
        product_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<(), Error> {
        let matches = UnitRepository::new(self.db)
            .find_live_by_name(product_id, name, exclude_id)
            .await?;

        check_name_conflict("Unit", name, matches.iter().map(|_| true))
    }

    /// Ensures no other category uses the name
    pub async fn category_name(&self, name: &str, exclude_id: Option<i32>) -> Result<(), Error> {
        let matches = CategoryRepository::new(self.db)
            .find_by_name(name, exclude_id)
            .await?;

        check_name_conflict("Category", name, matches.iter().map(|_| true))
    }

    pub async fn product_slug(&self, slug: &str, exclude_id: Option<i32>) -> Result<(), Error> {
        let existing = ProductRepository::new(self.db)
            .find_by_slug(slug, exclude_id)
            .await?;

        match existing {
            Some(_) => Err(ConflictError::SlugTaken(slug.to_string()).into()),
            None => Ok(()),
        }
    }

    pub async fn live_pharmacy(&self, id: i32) -> Result<entity::pharmacy::Model, Error> {
        let pharmacy = PharmacyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(LookupError::PharmacyNotFound(id))?;

        if pharmacy.deleted_at.is_some() {
            return Err(LookupError::PharmacyGone(id).into());
        }

        Ok(pharmacy)
    }

    pub async fn live_product(&self, id: i32) -> Result<entity::product::Model, Error> {
        let product = ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(LookupError::ProductNotFound(id))?;

        if product.deleted_at.is_some() {
            return Err(LookupError::ProductGone(id).into());
        }

        Ok(product)
    }

    pub async fn live_unit(&self, id: i32) -> Result<entity::unit_product::Model, Error> {
        let unit = UnitRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(LookupError::UnitNotFound(id))?;

        if unit.deleted_at.is_some() {
            return Err(LookupError::UnitGone(id).into());
        }

        Ok(unit)
    }

    pub async fn image(&self, id: i32) -> Result<entity::product_image::Model, Error> {
        let image = ProductImageRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(LookupError::ImageNotFound(id))?;

        Ok(image)
    }

    pub async fn category(&self, id: i32) -> Result<entity::category::Model, Error> {
        let category = CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(LookupError::CategoryNotFound(id))?;

        Ok(category)
    }

    /// Ensures every category id exists
    pub async fn categories_exist(&self, ids: &[i32]) -> Result<(), Error> {
        let existing: HashSet<i32> = CategoryRepository::new(self.db)
            .get_existing_ids(ids)
            .await?
            .into_iter()
            .collect();

        let missing = missing_ids(ids, &existing);
        if !missing.is_empty() {
            return Err(LookupError::CategoriesNotFound(missing).into());
        }

        Ok(())
    }

    /// Returns the admins, failing when any id is unknown or deleted
    pub async fn live_admins(&self, ids: &[i32]) -> Result<Vec<entity::admin::Model>, Error> {
        let admins: Vec<entity::admin::Model> = AdminRepository::new(self.db)
            .find_by_ids(ids)
            .await?
            .into_iter()
            .filter(|a| a.deleted_at.is_none())
            .collect();

        let live: HashSet<i32> = admins.iter().map(|a| a.id).collect();

        let missing = missing_ids(ids, &live);
        if !missing.is_empty() {
            return Err(LookupError::AdminsNotFound(missing).into());
        }

        Ok(admins)
    }
}

/// Rejects names that are empty once trimmed
pub fn require_name(field: &'static str, value: &str) -> Result<(), InvariantError> {
    if value.trim().is_empty() {
        return Err(InvariantError::InvalidField {
            field,
            rule: "a non-empty string",
        });
    }

    Ok(())
}

pub fn require_positive(field: &'static str, value: f64) -> Result<(), InvariantError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(InvariantError::InvalidField {
            field,
            rule: "greater than zero",
        });
    }

    Ok(())
}

pub fn require_non_negative(field: &'static str, value: i64) -> Result<(), InvariantError> {
    if value < 0 {
        return Err(InvariantError::InvalidField {
            field,
            rule: "zero or more",
        });
    }

    Ok(())
}

/// Rejects coordinates outside the valid latitude and longitude ranges
pub fn require_coordinates(lat: Option<f64>, lng: Option<f64>) -> Result<(), InvariantError> {
    if lat.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
        return Err(InvariantError::InvalidField {
            field: "lat",
            rule: "between -90 and 90",
        });
    }
    if lng.is_some_and(|lng| !(-180.0..=180.0).contains(&lng)) {
        return Err(InvariantError::InvalidField {
            field: "lng",
            rule: "between -180 and 180",
        });
    }

    Ok(())
}

/// Maps the liveness of every row matching a name onto the conflict it causes
fn check_name_conflict(
    entity: &'static str,
    name: &str,
    matches: impl Iterator<Item = bool>,
) -> Result<(), Error> {
    let mut held_by_deleted = false;

    for is_live in matches {
        if is_live {
            return Err(ConflictError::NameTaken {
                entity,
                name: name.trim().to_string(),
            }
            .into());
        }
        held_by_deleted = true;
    }

    if held_by_deleted {
        return Err(ConflictError::NameHeldByDeleted {
            entity,
            name: name.trim().to_string(),
        }
        .into());
    }

    Ok(())
}

/// Maps a unique-index violation raised by a write onto the conflict it stands for
///
/// The name checks run before every write, so this only fires when a concurrent
/// transaction committed the same name in between. `conflict` receives the database's
/// description of the violated constraint.
pub fn unique_violation(err: DbErr, conflict: impl FnOnce(&str) -> ConflictError) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => conflict(&detail).into(),
        _ => err.into(),
    }
}

/// [`unique_violation`] for writes whose only unique column is the name
pub fn name_violation<'a>(entity: &'static str, name: &'a str) -> impl FnOnce(DbErr) -> Error + 'a {
    move |err| {
        unique_violation(err, |_| ConflictError::NameTaken {
            entity,
            name: name.trim().to_string(),
        })
    }
}

fn missing_ids(requested: &[i32], found: &HashSet<i32>) -> Vec<i32> {
    let mut missing: Vec<i32> = requested
        .iter()
        .filter(|id| !found.contains(id))
        .copied()
        .collect();
    missing.sort_unstable();
    missing.dedup();

    missing
}
