//! Browser glue, compiled only with the `hydrate` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is a thin adapter from web-sys onto the platform-free
//! modules at the crate root. Decisions stay in those modules so they can be
//! tested natively.

pub mod alert;
pub mod app;
pub mod dom;
pub mod features;
pub mod listener;
pub mod nav_host;
