use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Requests rejected because they would break a structural rule of the catalog.
///
/// Nothing is written when one of these is returned.
#[derive(Error, Debug)]
pub enum InvariantError {
    #[error("Cannot demote main {0} directly, designate a replacement")]
    CannotDemoteMain(&'static str),
    #[error("Cannot delete the main pharmacy, designate another main pharmacy first")]
    CannotDeleteMainPharmacy,
    #[error("Cannot delete the main unit while the product has other units")]
    CannotDeleteMainUnit,
    #[error("Cannot delete the last unit of a published product")]
    CannotDeleteLastUnit,
    #[error("Cannot delete the thumbnail while the product has other images")]
    CannotDeleteThumbnail,
    #[error("Cannot delete the thumbnail of a published product")]
    CannotDeletePublishedThumbnail,
    #[error("Cannot delete the last image of a published product")]
    CannotDeleteLastImage,
    #[error("Product {0} is already published")]
    AlreadyPublished(i32),
    #[error("Product needs at least one unit before it can be published")]
    PublishRequiresUnit,
    #[error("Product needs at least one image before it can be published")]
    PublishRequiresImage,
    #[error("A product can have at most {0} images")]
    ImageLimit(u64),
    #[error("A product can have at most {0} units")]
    UnitLimit(u64),
    #[error("At least one admin must be given")]
    NoAdminsGiven,
    #[error("Admin {0} is not assigned to any pharmacy")]
    AdminNotAssigned(i32),
    #[error("{field} must be {rule}")]
    InvalidField {
        field: &'static str,
        rule: &'static str,
    },
}

impl IntoResponse for InvariantError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, &self)
    }
}
