//! Data transfer objects shared by the HTTP API.

pub mod api;
pub mod category;
pub mod pharmacy;
pub mod product;
