//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, along with the conversions from those models into the
//! DTOs returned by the API.

use entity::sea_orm_active_enums::{Acquisition, Golongan};

use crate::model::{
    category::CategoryDto,
    pharmacy::{AdminDto, PharmacyDto},
    product::{AcquisitionDto, GolonganDto, ProductDto, ProductImageDto, UnitDto},
};

/// Type alias for pharmacy database model.
///
/// # Fields (from `entity::pharmacy::Model`)
/// - `is_main` - At most one live pharmacy holds this flag
/// - `is_open` - Whether at least one live admin is assigned
/// - `deleted_at` - Set when the pharmacy was soft-deleted
pub type PharmacyModel = entity::pharmacy::Model;

/// Type alias for product database model.
pub type ProductModel = entity::product::Model;

/// Type alias for product unit database model.
///
/// `ratio_to_main` expresses how many main units one of this unit holds; the main unit
/// itself always has a ratio of 1.
pub type UnitModel = entity::unit_product::Model;

/// Type alias for product image database model.
pub type ProductImageModel = entity::product_image::Model;

pub type CategoryModel = entity::category::Model;

/// Type alias for per-pharmacy stock database model.
pub type StockModel = entity::stock::Model;

/// Type alias for admin database model.
pub type AdminModel = entity::admin::Model;

impl From<PharmacyModel> for PharmacyDto {
    fn from(model: PharmacyModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            picture: model.picture,
            is_open: model.is_open,
            is_main: model.is_main,
            detail_location: model.detail_location,
            lat: model.lat,
            lng: model.lng,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AdminModel> for AdminDto {
    fn from(model: AdminModel) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            pharmacy_id: model.pharmacy_id,
        }
    }
}

impl From<UnitModel> for UnitDto {
    fn from(model: UnitModel) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            name: model.name,
            is_main: model.is_main,
            ratio_to_main: model.ratio_to_main,
            weight: model.weight,
            price: model.price,
        }
    }
}

impl From<ProductImageModel> for ProductImageDto {
    fn from(model: ProductImageModel) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            image_url: model.image_url,
            is_thumbnail: model.is_thumbnail,
        }
    }
}

impl From<CategoryModel> for CategoryDto {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl From<Golongan> for GolonganDto {
    fn from(value: Golongan) -> Self {
        match value {
            Golongan::ObatBebas => Self::ObatBebas,
            Golongan::ObatBebasTerbatas => Self::ObatBebasTerbatas,
            Golongan::ObatKeras => Self::ObatKeras,
        }
    }
}

impl From<GolonganDto> for Golongan {
    fn from(value: GolonganDto) -> Self {
        match value {
            GolonganDto::ObatBebas => Self::ObatBebas,
            GolonganDto::ObatBebasTerbatas => Self::ObatBebasTerbatas,
            GolonganDto::ObatKeras => Self::ObatKeras,
        }
    }
}

impl From<Acquisition> for AcquisitionDto {
    fn from(value: Acquisition) -> Self {
        match value {
            Acquisition::Generik => Self::Generik,
            Acquisition::NonGenerik => Self::NonGenerik,
            Acquisition::Herbal => Self::Herbal,
        }
    }
}

impl From<AcquisitionDto> for Acquisition {
    fn from(value: AcquisitionDto) -> Self {
        match value {
            AcquisitionDto::Generik => Self::Generik,
            AcquisitionDto::NonGenerik => Self::NonGenerik,
            AcquisitionDto::Herbal => Self::Herbal,
        }
    }
}

/// Builds a [`ProductDto`] from the product row and its category ids.
pub fn product_dto(model: ProductModel, category_ids: Vec<i32>) -> ProductDto {
    ProductDto {
        id: model.id,
        name: model.name,
        name_mims: model.name_mims,
        slug: model.slug,
        golongan: model.golongan.into(),
        acquisition: model.acquisition.into(),
        nomor_edar: model.nomor_edar,
        needs_prescription: model.needs_prescription,
        description: model.description,
        composition: model.composition,
        dose: model.dose,
        side_effects: model.side_effects,
        indication: model.indication,
        brand: model.brand,
        published: model.published,
        category_ids,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
