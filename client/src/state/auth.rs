//! Login and registration flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages validate input into [`Credentials`], flip their busy flag, then await
//! one of these flows and apply the returned [`FormOutcome`]. The flows own
//! every decision about messages, session writes and navigation so they can
//! be tested without a DOM.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiReply, ApiRequest, Transport};
use crate::net::types::{Credentials, LoginResponse};
use crate::routes::Route;
use crate::state::session::Session;
use crate::util::messages;

/// What a form view should display and where it should go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub message: String,
    pub navigate_to: Option<Route>,
}

impl FormOutcome {
    fn stay(message: impl Into<String>) -> Self {
        Self { message: message.into(), navigate_to: None }
    }

    fn navigate(message: impl Into<String>, route: Route) -> Self {
        Self { message: message.into(), navigate_to: Some(route) }
    }
}

/// Interpretation of a `POST /login` reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginResult {
    /// 2xx JSON reply carrying a token.
    Authenticated { token: String },
    /// 2xx reply without a usable token (plain text, or JSON lacking `token`).
    /// Navigation proceeds with the session store emptied.
    Legacy,
    /// Non-2xx reply with the server's message.
    Rejected { message: String },
}

impl LoginResult {
    #[must_use]
    pub fn from_reply(reply: &ApiReply) -> Self {
        if !reply.is_success() {
            return Self::Rejected { message: reply.error_detail() };
        }
        if !reply.is_json() {
            return Self::Legacy;
        }
        match reply.decode::<LoginResponse>().and_then(|body| body.token) {
            Some(token) if !token.is_empty() => Self::Authenticated { token },
            _ => Self::Legacy,
        }
    }
}

/// Submit credentials to `POST /login`.
///
/// On success the token is written to `session` (or any previous token is
/// cleared when the reply carries none) and the outcome navigates to the
/// dashboard. Rejections and transport failures stay on the
/// login view with a message. No retry.
pub async fn submit_login<T: Transport>(transport: &T, session: &Session, credentials: &Credentials) -> FormOutcome {
    let reply = match transport.send(ApiRequest::login(credentials)).await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("login request failed: {e}");
            return FormOutcome::stay(messages::CONNECTION_FAILED);
        }
    };

    match LoginResult::from_reply(&reply) {
        LoginResult::Authenticated { token } => {
            session.set(&token);
            log::debug!("login succeeded for {}", credentials.username());
            FormOutcome::navigate(messages::LOGIN_SUCCESS, Route::Dashboard)
        }
        LoginResult::Legacy => {
            session.clear();
            log::warn!("login succeeded without a session token (status {})", reply.status);
            FormOutcome::navigate(messages::LOGIN_SUCCESS, Route::Dashboard)
        }
        LoginResult::Rejected { message } => FormOutcome::stay(messages::failure(&message)),
    }
}

/// Submit credentials to `POST /register`.
///
/// Success shows the server message and navigates to the login view; there is
/// no automatic login. Failures stay on the register view.
pub async fn submit_register<T: Transport>(transport: &T, credentials: &Credentials) -> FormOutcome {
    match transport.send(ApiRequest::register(credentials)).await {
        Ok(reply) if reply.is_success() => {
            let message = reply.message();
            let message = if message.is_empty() { messages::REGISTER_SUCCESS.to_owned() } else { message };
            log::debug!("registered {}", credentials.username());
            FormOutcome::navigate(message, Route::Login)
        }
        Ok(reply) => FormOutcome::stay(messages::failure(&reply.error_detail())),
        Err(e) => {
            log::error!("register request failed: {e}");
            FormOutcome::stay(messages::CONNECTION_FAILED)
        }
    }
}
