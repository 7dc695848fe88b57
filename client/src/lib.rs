//! # client
//!
//! WASM client for the portfolio site: theme switching, page effects, the
//! contact form, and same-origin SPA navigation.
//!
//! Decision logic lives in platform-free modules that build and test on the
//! host. The [`web`] module (feature `hydrate`) adapts them to the browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | SPA navigation sequencing behind [`nav::NavigationHost`] |
//! | [`routes`] | Route table, link classification, path helpers |
//! | [`page`] | `<main>`/`<title>` extraction from fetched HTML |
//! | [`theme`] | Light/dark preference behind [`theme::ThemeHost`] |
//! | [`form`] | Contact form submission behind [`form::FormHost`] |
//! | [`counter`] | Stat counter frames |
//! | [`filter`] | Portfolio grid visibility |
//! | [`effects`] | FAQ icon, nav-scroll, eased scrolling |
//! | [`transition`] | Generation tokens for delayed effects |
//! | [`consts`] | Timings, selectors, endpoint |

pub mod consts;
pub mod counter;
pub mod effects;
pub mod error;
pub mod filter;
pub mod form;
pub mod nav;
pub mod page;
pub mod routes;
pub mod theme;
pub mod transition;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    if let Err(err) = web::app::install() {
        log::error!("failed to start page services: {err:?}");
    }
}

/// Tear down listeners and observers; exported for hosts that unload the module.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn shutdown() {
    web::app::shutdown();
}
