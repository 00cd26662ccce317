//! HTTP controller endpoints for the Apotek web API.
//!
//! Thin Axum handlers over the operation services: each one extracts its inputs, calls a
//! single service method and returns the `{data, message}` envelope. Errors are returned
//! as [`Error`](crate::server::error::Error), whose `IntoResponse` picks the status code.
//! Every handler is documented with utoipa for the OpenAPI specification.

pub mod admin;
pub mod category;
pub mod image;
pub mod pharmacy;
pub mod product;
pub mod unit;
pub mod util;
