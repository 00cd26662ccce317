use std::collections::HashMap;

use axum::extract::Multipart;
use serde::de::DeserializeOwned;

use crate::server::{error::Error, media::MediaFile};

/// A multipart body split into text fields and files
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, MediaFile>,
}

impl MultipartForm {
    /// Reads every part of the body, keeping parts with a file name as files
    pub async fn read(mut multipart: Multipart) -> Result<Self, Error> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| Error::ParseError(format!("multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| Error::ParseError(format!("field {}: {}", name, e)))?;

                    if bytes.is_empty() {
                        continue;
                    }

                    form.files.insert(
                        name,
                        MediaFile {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| Error::ParseError(format!("field {}: {}", name, e)))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Deserializes a JSON text field
    pub fn json<T: DeserializeOwned>(&self, name: &str) -> Result<T, Error> {
        let raw = self
            .fields
            .get(name)
            .ok_or_else(|| Error::ParseError(format!("missing field {}", name)))?;

        serde_json::from_str(raw).map_err(|e| Error::ParseError(format!("field {}: {}", name, e)))
    }

    /// Deserializes a JSON text field, falling back to the default when absent
    pub fn json_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, Error> {
        match self.fields.contains_key(name) {
            true => self.json(name),
            false => Ok(T::default()),
        }
    }

    /// Reads a `true`/`false` text field, absent meaning `false`
    pub fn flag(&self, name: &str) -> Result<bool, Error> {
        match self.fields.get(name).map(|v| v.trim()) {
            None | Some("") => Ok(false),
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| Error::ParseError(format!("field {} must be true or false", name))),
        }
    }

    pub fn take_file(&mut self, name: &str) -> Option<MediaFile> {
        self.files.remove(name)
    }
}
