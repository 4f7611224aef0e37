//! # portfolio-client
//!
//! Leptos + WASM single-page portfolio: hero, case-study showcase with
//! expandable blueprints, the Solo Lab carousel, impact and testimonials, and
//! the contact / résumé-access overlays.
//!
//! Interaction logic lives in `state` as plain data so it is testable on the
//! host. Browser effects are isolated in `util::browser` and only active with
//! the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting portfolio at {}", config::BasePath::from_build_env().as_str());
    leptos::mount::mount_to_body(app::App);
}
