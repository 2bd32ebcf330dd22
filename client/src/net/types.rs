//! Wire DTOs for the remote auth API.
//!
//! DESIGN
//! ======
//! Response fields are optional where the backend is known to vary (plain
//! text vs JSON), so decoding never fails just because a field is missing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation failures for the credentials form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("username is required")]
    MissingUsername,

    #[error("password is required")]
    MissingPassword,
}

/// Username/password pair sent to `/register` and `/login`.
///
/// Only constructible through [`Credentials::parse`], so a request body can
/// never carry a blank field.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Validate raw form input.
    ///
    /// The username is trimmed; the password is sent exactly as typed and only
    /// has to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError`] naming the first missing field.
    pub fn parse(username: &str, password: &str) -> Result<Self, CredentialsError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CredentialsError::MissingUsername);
        }
        if password.is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        Ok(Self { username: username.to_owned(), password: password.to_owned() })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Generic `{ "message": ... }` payload used by every endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// `POST /login` success payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}
