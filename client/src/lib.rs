//! # recipes-client
//!
//! Leptos + WASM frontend for the Video Recipes site: a layout shell with a
//! collapsible navigation sidebar, header, breadcrumb, and footer around a
//! routed content area of static section pages.
//!
//! The same crate compiles twice: with `ssr` it is linked into the axum host
//! for server rendering, with `hydrate` it becomes the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: attach the reactive app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating video recipes shell");
    leptos::mount::hydrate_body(app::App);
}
