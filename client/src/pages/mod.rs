//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wires context (`Session`, `ClientConfig`), local view state and
//! navigation around a flow from `state`; the flows make every decision.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
