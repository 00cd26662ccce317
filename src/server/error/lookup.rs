use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, ErrorKind};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Pharmacy {0} not found")]
    PharmacyNotFound(i32),
    #[error("Pharmacy {0} has been deleted")]
    PharmacyGone(i32),
    #[error("Product {0} not found")]
    ProductNotFound(i32),
    #[error("Product {0} has been deleted")]
    ProductGone(i32),
    /// No live, published product carries the slug
    #[error("Product {0:?} not found")]
    ProductSlugNotFound(String),
    #[error("Unit {0} not found")]
    UnitNotFound(i32),
    #[error("Unit {0} has been deleted")]
    UnitGone(i32),
    #[error("Product image {0} not found")]
    ImageNotFound(i32),
    #[error("Admin {0} not found")]
    AdminNotFound(i32),
    #[error("Admins not found: {0:?}")]
    AdminsNotFound(Vec<i32>),
    #[error("Category {0} not found")]
    CategoryNotFound(i32),
    #[error("Categories not found: {0:?}")]
    CategoriesNotFound(Vec<i32>),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PharmacyGone(_) | Self::ProductGone(_) | Self::UnitGone(_) => ErrorKind::Gone,
            _ => ErrorKind::NotFound,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self.kind() {
            ErrorKind::Gone => StatusCode::GONE,
            _ => StatusCode::NOT_FOUND,
        };

        error_response(status, &self)
    }
}
