use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ConflictError {
    #[error("{entity} name {name:?} already exists")]
    NameTaken { entity: &'static str, name: String },
    /// The name belongs to a soft-deleted record and stays reserved.
    #[error("{entity} name {name:?} already exists but is deleted")]
    NameHeldByDeleted { entity: &'static str, name: String },
    #[error("Product slug {0:?} already exists")]
    SlugTaken(String),
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NameHeldByDeleted { .. } => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, &self)
            }
            _ => error_response(StatusCode::CONFLICT, &self),
        }
    }
}
