use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Media store request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Media store responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Media store upload response did not contain a URL")]
    MissingUrl,
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Failed to store media, please try again".to_string(),
            }),
        )
            .into_response()
    }
}
