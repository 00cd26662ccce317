use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::ApiResponse,
        product::{CreateUnitDto, UnitDeletedDto, UnitDto, UnitPatch},
    },
    server::{
        data::unit::UnitRepository,
        error::{invariant::InvariantError, Error},
        service::{
            cascade::CascadeDeleter,
            flag::{guard_demotion, UnitMain},
            validation::{
                name_violation, require_name, require_non_negative, require_positive, Validator,
            },
        },
    },
};

/// Most live units a product may carry
pub const MAX_UNITS_PER_PRODUCT: u64 = 5;

pub struct UnitProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitProductService<'a> {
    /// Creates a new instance of [`UnitProductService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a unit to a product
    ///
    /// The first unit of a product becomes its main unit. A unit created with `is_main`
    /// takes over as main unit: its `ratio_to_main` is read relative to the current main
    /// unit and every ratio of the product is rebased onto the new unit.
    pub async fn create_unit_product(
        &self,
        product_id: i32,
        input: CreateUnitDto,
    ) -> Result<ApiResponse<UnitDto>, Error> {
        require_name("name", &input.name)?;
        require_positive("weight", input.weight)?;
        require_non_negative("price", input.price)?;
        require_positive("ratio_to_main", input.ratio_to_main)?;

        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);
        let unit_repo = UnitRepository::new(&txn);

        validator.live_product(product_id).await?;
        if unit_repo.count_live_by_product(product_id).await? >= MAX_UNITS_PER_PRODUCT {
            return Err(InvariantError::UnitLimit(MAX_UNITS_PER_PRODUCT).into());
        }
        validator.unit_name(product_id, &input.name, None).await?;

        let unit = unit_repo
            .create(product_id, &input)
            .await
            .map_err(name_violation("Unit", &input.name))?;

        let main = UnitMain::new(&txn);
        if input.is_main || main.holder(product_id).await?.is_none() {
            main.promote(product_id, &unit).await?;
        }

        let unit = validator.live_unit(unit.id).await?;

        txn.commit().await?;

        tracing::info!(unit_id = unit.id, product_id, is_main = unit.is_main, "Created unit");

        Ok(ApiResponse::new(unit.into(), "Unit product created successfully"))
    }

    /// Applies the patch; `is_main: Some(true)` promotes the unit using its (patched)
    /// ratio to rebase the product's other units
    pub async fn update_unit_product(
        &self,
        id: i32,
        patch: UnitPatch,
    ) -> Result<ApiResponse<UnitDto>, Error> {
        if let Some(name) = &patch.name {
            require_name("name", name)?;
        }
        if let Some(weight) = patch.weight {
            require_positive("weight", weight)?;
        }
        if let Some(price) = patch.price {
            require_non_negative("price", price)?;
        }
        if let Some(ratio_to_main) = patch.ratio_to_main {
            require_positive("ratio_to_main", ratio_to_main)?;
        }

        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        let unit = validator.live_unit(id).await?;
        let product_id = unit.product_id;
        validator.live_product(product_id).await?;

        guard_demotion::<entity::unit_product::Entity>(unit.is_main, patch.is_main)?;
        if unit.is_main && patch.ratio_to_main.is_some_and(|ratio| ratio != 1.0) {
            return Err(InvariantError::InvalidField {
                field: "ratio_to_main",
                rule: "1 for the main unit",
            }
            .into());
        }

        if let Some(name) = &patch.name {
            validator.unit_name(product_id, name, Some(id)).await?;
        }

        let name = patch.name.clone().unwrap_or_else(|| unit.name.clone());
        let updated = UnitRepository::new(&txn)
            .update(unit, &patch)
            .await
            .map_err(name_violation("Unit", &name))?;

        if patch.is_main == Some(true) {
            UnitMain::new(&txn).promote(product_id, &updated).await?;
        }

        let unit = validator.live_unit(id).await?;

        txn.commit().await?;

        tracing::info!(unit_id = id, product_id, "Updated unit");

        Ok(ApiResponse::new(unit.into(), "Unit product updated successfully"))
    }

    /// Deletes a unit; units referenced by orders are soft-deleted
    pub async fn delete_unit_product(&self, id: i32) -> Result<ApiResponse<UnitDeletedDto>, Error> {
        let txn = self.db.begin().await?;
        let validator = Validator::new(&txn);

        let unit = validator.live_unit(id).await?;
        let product = validator.live_product(unit.product_id).await?;
        let outcome = CascadeDeleter::new(&txn).delete_unit(&product, &unit).await?;

        txn.commit().await?;

        Ok(ApiResponse::new(
            UnitDeletedDto {
                id,
                soft_deleted: outcome.soft_deleted,
                canceled_orders: outcome.canceled_orders,
            },
            "Unit product deleted successfully",
        ))
    }
}
