//! dealboard: searchable, paginated bookings and proposals list views.
//!
//! ARCHITECTURE
//! ============
//! `pages` own route-scoped orchestration, `components` are stateless
//! rendering units, `net` talks to the external dashboard API, `state` holds
//! per-view data, and `util` holds the pure list pipeline the views derive
//! their render state from. Everything outside the `hydrate` feature builds
//! and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client to server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
