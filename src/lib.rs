//! # picschedule-web
//!
//! Leptos + WASM front-end shell for PicSchedule: the site header with its
//! authentication-aware navigation, the promotional badge, and the handful of
//! route pages that host them.
//!
//! The same crate is compiled twice: with `hydrate` for the browser bundle and
//! with `ssr` for the Axum host binary that renders pages server-side.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
