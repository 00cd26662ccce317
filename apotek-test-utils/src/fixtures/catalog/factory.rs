//! Factory functions for generating mock catalog database models.
//!
//! Pure functions returning in-memory model instances with standard test values, for unit
//! tests that don't need a database.

use chrono::Utc;

/// Create a live pharmacy model for testing.
pub fn mock_pharmacy_model(id: i32, name: &str, is_main: bool) -> entity::pharmacy::Model {
    let now = Utc::now().naive_utc();
    entity::pharmacy::Model {
        id,
        name: name.to_string(),
        description: "Test pharmacy".to_string(),
        picture: String::new(),
        is_open: false,
        is_main,
        detail_location: "Jl. Sudirman No. 1".to_string(),
        lat: -6.2,
        lng: 106.8,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// Create a live unit model for testing.
pub fn mock_unit_model(
    id: i32,
    product_id: i32,
    is_main: bool,
    ratio_to_main: f64,
) -> entity::unit_product::Model {
    let now = Utc::now().naive_utc();
    entity::unit_product::Model {
        id,
        product_id,
        name: format!("Unit {}", id),
        is_main,
        ratio_to_main,
        weight: 10.0,
        price: 15_000,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
