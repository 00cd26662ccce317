//! HTTP client for the external image host.
//!
//! The host exposes two endpoints: `POST {base}/upload` taking a multipart `file` part and
//! answering `{"secure_url": "..."}`, and `POST {base}/destroy` taking `{"url": "..."}`.
//! Both are authenticated with a bearer API key.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::server::error::media::MediaError;

/// A file received from a client, ready to be forwarded to the media store.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

#[derive(Serialize)]
struct DestroyRequest<'a> {
    url: &'a str,
}

#[derive(Clone)]
pub struct MediaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MediaClient {
    /// Creates a new instance of [`MediaClient`]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Uploads a file and returns the URL it is served from
    pub async fn upload(&self, file: MediaFile) -> Result<String, MediaError> {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type {
            part = part.mime_str(&content_type)?;
        }
        let form = Form::new().part("file", part);

        let resp = self
            .http
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(MediaError::UnexpectedStatus { status, body });
        }

        let body: UploadResponse = resp.json().await?;
        let url = body.secure_url.ok_or(MediaError::MissingUrl)?;

        tracing::debug!(url = %url, "Uploaded file to media store");

        Ok(url)
    }

    /// Removes a previously uploaded file
    pub async fn remove(&self, url: &str) -> Result<(), MediaError> {
        let resp = self
            .http
            .post(format!("{}/destroy", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&DestroyRequest { url })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(MediaError::UnexpectedStatus { status, body });
        }

        tracing::debug!(url = %url, "Removed file from media store");

        Ok(())
    }

    /// Removes files after the metadata change that orphaned them has committed.
    ///
    /// Failures are logged and swallowed; the committed change stands.
    pub async fn remove_best_effort(&self, urls: &[String]) {
        for url in urls.iter().filter(|url| !url.is_empty()) {
            if let Err(err) = self.remove(url).await {
                tracing::warn!(url = %url, error = %err, "Failed to remove file from media store");
            }
        }
    }
}
