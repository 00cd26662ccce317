//! Error types for the Apotek server application.
//!
//! Each domain gets its own `thiserror` enum (lookups, name conflicts, structural
//! invariants, media store, configuration), aggregated into [`Error`]. Every error maps
//! onto one [`ErrorKind`] of the public taxonomy, and implements `IntoResponse` so
//! controllers can return it directly.

pub mod config;
pub mod conflict;
pub mod invariant;
pub mod lookup;
pub mod media;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, conflict::ConflictError, invariant::InvariantError,
        lookup::LookupError, media::MediaError,
    },
};

/// Main error type for the Apotek server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Lookup errors (entity missing or soft-deleted)
/// - Conflict errors (name or slug already held by a live or deleted record)
/// - Invariant errors (operation would break main/thumbnail/stock rules)
/// - Media store errors (upload or removal failed)
/// - Configuration errors (missing/invalid environment variables)
/// - External library errors (database)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Requested entity is missing or has been soft-deleted.
    #[error(transparent)]
    LookupError(#[from] LookupError),
    /// Name or slug is already taken.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Operation would violate a structural invariant.
    #[error(transparent)]
    InvariantError(#[from] InvariantError),
    /// Media store failure (upload, removal, unexpected response).
    #[error(transparent)]
    MediaError(#[from] MediaError),
    /// Parse error (failed to parse a value from a request body or multipart field).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Apotek's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error with Apotek's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Error taxonomy exposed to callers of the consistency engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Entity does not exist.
    NotFound,
    /// Entity exists but has been soft-deleted.
    Gone,
    /// Name or slug already used, by a live or a deleted record.
    Conflict,
    /// Request violates a structural invariant.
    InvalidOperation,
    /// Media store or persistence failure.
    UpstreamFailure,
}

impl Error {
    /// Classifies the error into the [`ErrorKind`] taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LookupError(err) => err.kind(),
            Self::ConflictError(_) => ErrorKind::Conflict,
            Self::InvariantError(_) | Self::ParseError(_) => ErrorKind::InvalidOperation,
            Self::MediaError(_)
            | Self::DbErr(_)
            | Self::ConfigError(_)
            | Self::InternalError(_) => ErrorKind::UpstreamFailure,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invariant violations and unparseable input
/// - 404 Not Found / 410 Gone - Missing or soft-deleted entities
/// - 409 Conflict / 422 Unprocessable Entity - Names held by live / deleted records
/// - 502 Bad Gateway - Media store failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::LookupError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            Self::InvariantError(err) => err.into_response(),
            Self::MediaError(err) => err.into_response(),
            Self::ParseError(reason) => {
                tracing::debug!(reason = %reason, "Rejected unparseable request");

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: format!("Invalid request: {}", reason),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the error's display text as the message.
pub(crate) fn error_response(status: StatusCode, err: &impl std::fmt::Display) -> Response {
    (
        status,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}
