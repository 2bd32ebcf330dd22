//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{ClientConfig, ConfigError, DEFAULT_API_BASE_URL};

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Handed to every SSR render and echoed to the browser.
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build typed config from the environment.
    ///
    /// Optional:
    /// - `API_BASE_URL`: remote auth API root, default `http://localhost:18080`
    ///
    /// Leptos site options (`LEPTOS_SITE_ADDR`, `LEPTOS_SITE_ROOT`, ...) are
    /// read separately by `get_configuration`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_base_url(std::env::var(API_BASE_URL_VAR).ok().as_deref())
    }

    pub(crate) fn from_api_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let client = ClientConfig::new(raw.unwrap_or(DEFAULT_API_BASE_URL))?;
        Ok(Self { client })
    }
}
