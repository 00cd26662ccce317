use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    /// Base URL of the image host, without a trailing slash
    pub media_url: String,
    pub media_api_key: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            media_url: media_url(&required("MEDIA_URL")?)?,
            media_api_key: required("MEDIA_API_KEY")?,
            bind_address: bind_address
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddress(bind_address.clone()))?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn media_url(value: &str) -> Result<String, ConfigError> {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::InvalidMediaUrl(value.to_string()));
    }

    Ok(value.trim_end_matches('/').to_string())
}
