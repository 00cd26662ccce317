use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("MEDIA_URL must be an http(s) URL, got {0:?}")]
    InvalidMediaUrl(String),
    #[error("BIND_ADDRESS must be a socket address such as 0.0.0.0:8080, got {0:?}")]
    InvalidBindAddress(String),
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
