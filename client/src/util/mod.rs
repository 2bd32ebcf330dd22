//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate user-facing text from page and flow logic so the
//! flows can be asserted against exact messages.

pub mod messages;
