//! Client configuration: the remote API base URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server parses `API_BASE_URL`, provides the resulting [`ClientConfig`]
//! to the SSR render via context, and the shell echoes it into a
//! `<meta name="api-base-url">` tag. After hydration the browser reads the
//! tag back, so both sides resolve the same value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;

/// Local backend default.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:18080";

/// `name` attribute of the meta tag carrying the base URL to the browser.
pub const API_BASE_META: &str = "api-base-url";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    Empty,

    #[error("API base URL must start with http:// or https://, got {0:?}")]
    UnsupportedScheme(String),

    #[error("API base URL has no host, got {0:?}")]
    MissingHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Normalized base URL without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build a config from a raw base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the value is blank, not an http(s) URL, or
    /// has no host.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self { api_base_url: normalize_base_url(raw)? })
    }

    /// Absolute URL for an API path such as `/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }

    /// Config for the current render: server context first, then the shell
    /// meta tag in the browser, then the default.
    #[must_use]
    pub fn resolve() -> Self {
        if let Some(config) = use_context::<Self>() {
            return config;
        }
        read_meta_base_url()
            .and_then(|raw| Self::new(&raw).ok())
            .unwrap_or_default()
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty);
    }
    let lower = trimmed.to_ascii_lowercase();
    let scheme_len = if lower.starts_with("https://") {
        "https://".len()
    } else if lower.starts_with("http://") {
        "http://".len()
    } else {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
    };
    let base = trimmed.trim_end_matches('/');
    if base.len() <= scheme_len || base[scheme_len..].starts_with('/') {
        return Err(ConfigError::MissingHost(trimmed.to_owned()));
    }
    Ok(base.to_owned())
}

fn read_meta_base_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_BASE_META}\"]");
        let element = document.query_selector(&selector).ok().flatten()?;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
