//! Thin web-sys helpers shared by the browser glue.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, Event, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// All elements under `root` matching `selector`; empty on an invalid selector.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// The nearest ancestor-or-self of the event target matching `selector`.
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}

pub fn add_classes(el: &Element, classes: &[&str]) {
    let list = el.class_list();
    for class in classes {
        let _ = list.add_1(class);
    }
}

pub fn remove_classes(el: &Element, classes: &[&str]) {
    let list = el.class_list();
    for class in classes {
        let _ = list.remove_1(class);
    }
}

pub fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) {
    let _ = style.set_property(property, value);
}

/// Set an inline style on any element that is an `HtmlElement`.
pub fn set_element_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
        set_style(&el.style(), property, value);
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after<F: FnOnce() + 'static>(ms: u32, f: F) {
    Timeout::new(ms, f).forget();
}

pub async fn sleep(ms: u32) {
    gloo_timers::future::sleep(Duration::from_millis(u64::from(ms))).await;
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or_default()
}
