//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `session` is the token slot, `auth` drives the
//! login/register forms, `dashboard` is the protected view's state machine.

pub mod auth;
pub mod dashboard;
pub mod session;
