//! Networking modules for the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction, reply inspection and the browser
//! transport; `types` defines the JSON wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
