//! REST API plumbing for the remote auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`BrowserTransport`] reports
//! [`TransportError::Unavailable`]; flows are exercised through the
//! [`Transport`] trait instead.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status is not an error at this layer: callers receive the full
//! [`ApiReply`] and decide. Only failures to obtain a reply at all surface as
//! [`TransportError`]. No timeouts or retries are applied.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{Credentials, MessageBody};
use crate::config::ClientConfig;

/// Failure to get any HTTP reply from the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Network, DNS, CORS or connection failure reported by the browser.
    #[error("request failed: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body could not be read.
    #[error("response read failed: {0}")]
    Read(String),

    /// HTTP is only performed in the hydrated browser build.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request against one of the backend endpoints.
///
/// The credentials body stays typed until the transport serializes it, so an
/// encoding failure surfaces as [`TransportError::Encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub bearer: Option<String>,
    pub body: Option<Credentials>,
}

impl ApiRequest {
    /// `POST /register` with a JSON credentials body.
    #[must_use]
    pub fn register(credentials: &Credentials) -> Self {
        Self::with_credentials("/register", credentials)
    }

    /// `POST /login` with a JSON credentials body.
    #[must_use]
    pub fn login(credentials: &Credentials) -> Self {
        Self::with_credentials("/login", credentials)
    }

    /// `GET /dashboard` authorized by the session token.
    #[must_use]
    pub fn dashboard(token: &str) -> Self {
        Self { method: Method::Get, path: "/dashboard", bearer: Some(token.to_owned()), body: None }
    }

    /// `POST /logout` authorized by the session token.
    #[must_use]
    pub fn logout(token: &str) -> Self {
        Self { method: Method::Post, path: "/logout", bearer: Some(token.to_owned()), body: None }
    }

    fn with_credentials(path: &'static str, credentials: &Credentials) -> Self {
        Self { method: Method::Post, path, bearer: None, body: Some(credentials.clone()) }
    }

    /// Value for the `Authorization` header, if the request is authorized.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_deref().map(|token| format!("Bearer {token}"))
    }
}

/// Snapshot of an HTTP response: status, content type and full body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiReply {
    /// Reply with a JSON body.
    #[must_use]
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self { status, content_type: Some("application/json".to_owned()), body: body.into() }
    }

    /// Reply with a plain-text body.
    #[must_use]
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self { status, content_type: Some("text/plain".to_owned()), body: body.into() }
    }

    /// `true` for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `true` when the content type is `application/json` or a `+json` type.
    #[must_use]
    pub fn is_json(&self) -> bool {
        let Some(raw) = self.content_type.as_deref() else {
            return false;
        };
        let essence = raw.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        essence == "application/json" || essence.ends_with("+json")
    }

    /// Decode the body as JSON, ignoring the content type header.
    #[must_use]
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_str(&self.body).ok()
    }

    /// Human-readable message carried by the reply.
    ///
    /// Prefers the `message` field of a JSON body; otherwise the trimmed body
    /// text. The backend answers with either shape.
    #[must_use]
    pub fn message(&self) -> String {
        if let Some(body) = self.decode::<MessageBody>() {
            return body.message;
        }
        self.body.trim().to_owned()
    }

    /// Message for a failed reply, falling back to the status code when the
    /// body is empty.
    #[must_use]
    pub fn error_detail(&self) -> String {
        let message = self.message();
        if message.is_empty() { format!("HTTP {}", self.status) } else { message }
    }
}

/// Sends [`ApiRequest`]s to the backend.
///
/// The browser implementation is [`BrowserTransport`]; tests script replies.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiReply, TransportError>>;
}

/// `gloo-net` transport bound to the configured API base URL.
#[derive(Debug, Clone)]
pub struct BrowserTransport {
    config: ClientConfig,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.config.endpoint(request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(value) = request.authorization() {
                builder = builder.header("Authorization", &value);
            }
            let resp = match &request.body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| TransportError::Encode(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = resp.status();
            let content_type = resp.headers().get("content-type");
            let body = resp.text().await.map_err(|e| TransportError::Read(e.to_string()))?;
            Ok(ApiReply { status, content_type, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(TransportError::Unavailable)
        }
    }
}
