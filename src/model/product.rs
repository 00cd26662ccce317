use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::category::CategoryDto;

/// Indonesian drug classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GolonganDto {
    ObatBebas,
    ObatBebasTerbatas,
    ObatKeras,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcquisitionDto {
    Generik,
    NonGenerik,
    Herbal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub name_mims: String,
    pub slug: String,
    pub golongan: GolonganDto,
    pub acquisition: AcquisitionDto,
    pub nomor_edar: String,
    pub needs_prescription: bool,
    pub description: String,
    pub composition: String,
    pub dose: String,
    pub side_effects: String,
    pub indication: String,
    pub brand: Option<String>,
    pub published: bool,
    pub category_ids: Vec<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateProductDto {
    pub name: String,
    pub name_mims: String,
    pub golongan: GolonganDto,
    pub acquisition: AcquisitionDto,
    pub nomor_edar: String,
    #[serde(default)]
    pub needs_prescription: bool,
    pub description: String,
    pub composition: String,
    pub dose: String,
    pub side_effects: String,
    pub indication: String,
    pub brand: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

/// Field-by-field update of a product, `None` keeps the stored value
///
/// A new `name` regenerates the slug. `category_ids`, when given, replaces the
/// product's categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductPatch {
    pub name: Option<String>,
    pub name_mims: Option<String>,
    pub golongan: Option<GolonganDto>,
    pub acquisition: Option<AcquisitionDto>,
    pub nomor_edar: Option<String>,
    pub needs_prescription: Option<bool>,
    pub description: Option<String>,
    pub composition: Option<String>,
    pub dose: Option<String>,
    pub side_effects: Option<String>,
    pub indication: Option<String>,
    pub brand: Option<String>,
    pub category_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PublishedProductDto {
    pub product: ProductDto,
    /// Stock rows created for pharmacies that did not carry the product yet
    pub stock_rows_created: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductDeletedDto {
    pub id: i32,
    pub soft_deleted: bool,
    pub canceled_orders: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UnitDto {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub is_main: bool,
    pub ratio_to_main: f64,
    pub weight: f64,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateUnitDto {
    pub name: String,
    #[serde(default)]
    pub is_main: bool,
    pub weight: f64,
    pub price: i64,
    pub ratio_to_main: f64,
}

/// Field-by-field update of a unit, `None` keeps the stored value
///
/// `is_main: Some(true)` promotes the unit and forces its ratio to 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UnitPatch {
    pub name: Option<String>,
    pub is_main: Option<bool>,
    pub weight: Option<f64>,
    pub price: Option<i64>,
    pub ratio_to_main: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UnitDeletedDto {
    pub id: i32,
    pub soft_deleted: bool,
    pub canceled_orders: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductImageDto {
    pub id: i32,
    pub product_id: i32,
    pub image_url: String,
    pub is_thumbnail: bool,
}

/// A live, published product with everything its detail page shows
///
/// Images list the thumbnail first and units list the main unit first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductDetailsDto {
    pub product: ProductDto,
    pub images: Vec<ProductImageDto>,
    pub units: Vec<UnitDto>,
    pub categories: Vec<CategoryDto>,
}
