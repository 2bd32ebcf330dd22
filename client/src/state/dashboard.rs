//! Dashboard state machine: `Loading → {Authenticated, Redirecting}`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page starts in [`DashboardPhase::Loading`], awaits
//! [`load_dashboard`] once per mount, and navigates to `/login` whenever the
//! result is [`DashboardPhase::Redirecting`]. Logout is split into a
//! synchronous [`begin_logout`] (clear + navigate) and a fire-and-forget
//! [`notify_logout`] whose outcome nothing depends on.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::{ApiRequest, Transport};
use crate::routes::Route;
use crate::state::session::Session;
use crate::util::messages;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardPhase {
    #[default]
    Loading,
    /// The protected endpoint accepted the token; `message` is its payload.
    Authenticated { message: String },
    /// Terminal for this mount: navigate to login.
    Redirecting,
}

impl DashboardPhase {
    /// Logout is only offered once the dashboard has rendered.
    #[must_use]
    pub fn can_logout(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            Self::Redirecting => Some(Route::Login),
            Self::Loading | Self::Authenticated { .. } => None,
        }
    }
}

/// Resolve the mount-time phase.
///
/// No token redirects without any request. A rejected or failed
/// `GET /dashboard` clears the session before redirecting.
pub async fn load_dashboard<T: Transport>(transport: &T, session: &Session) -> DashboardPhase {
    let Some(token) = session.get() else {
        log::debug!("dashboard mounted without a session token");
        return DashboardPhase::Redirecting;
    };

    match transport.send(ApiRequest::dashboard(&token)).await {
        Ok(reply) if reply.is_success() => DashboardPhase::Authenticated { message: reply.message() },
        Ok(reply) => {
            log::warn!("{}", messages::dashboard_failure(&reply.error_detail()));
            session.clear();
            DashboardPhase::Redirecting
        }
        Err(e) => {
            log::error!("{} {e}", messages::DASHBOARD_CONNECTION_FAILED);
            session.clear();
            DashboardPhase::Redirecting
        }
    }
}

/// Result of a user-triggered logout.
#[derive(Clone, Debug, PartialEq)]
pub struct Logout {
    pub navigate_to: Route,
    /// Best-effort server notification, present when a token was held.
    pub notify: Option<ApiRequest>,
}

/// Clear the session and decide the navigation, before any network I/O.
pub fn begin_logout(session: &Session) -> Logout {
    let notify = session.get().map(|token| ApiRequest::logout(&token));
    session.clear();
    Logout { navigate_to: Route::Login, notify }
}

/// Send the logout notification. Failures are logged and otherwise ignored.
pub async fn notify_logout<T: Transport>(transport: &T, request: ApiRequest) {
    match transport.send(request).await {
        Ok(reply) if !reply.is_success() => log::debug!("logout returned status {}", reply.status),
        Ok(_) => {}
        Err(e) => log::debug!("logout notification failed: {e}"),
    }
}
