//! # client
//!
//! Leptos + WASM frontend for the auth portal: landing, register, login and a
//! token-protected dashboard backed by a remote REST API.
//!
//! This crate contains the route table, pages, the shared credentials form,
//! the session token store, and the HTTP transport used by the auth flows.
//! The `auth-portal` binary renders it on the server and hydrates it in the
//! browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
