//! Test fixture modules for database and HTTP mock creation.
//!
//! - `catalog` - Pharmacies, products, units, images, stock, categories and admins
//! - `order` - Orders, order lines, order activity and cart rows
//! - `media` - Mock media store endpoints

pub mod catalog;
pub mod media;
pub mod order;
