//! Portfolio grid filtering.
//!
//! Visibility is a pure function of the selected filter and each item's
//! space-delimited `data-category` list.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::FILTER_ALL;

/// Whether an item with `categories` stays visible under `filter`.
#[must_use]
pub fn is_visible(filter: &str, categories: &str) -> bool {
    filter == FILTER_ALL || categories.split_whitespace().any(|c| c == filter)
}

/// Visibility of every item, in input order.
#[must_use]
pub fn plan<'a, I>(filter: &str, items: I) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().map(|categories| is_visible(filter, categories)).collect()
}

#[cfg(feature = "hydrate")]
pub use web::apply_filter;

#[cfg(feature = "hydrate")]
mod web {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    use super::is_visible;
    use crate::consts::{
        FILTER_ACTIVE_CLASSES, FILTER_BUTTON_SELECTOR, FILTER_HIDE_DELAY_MS, FILTER_IDLE_CLASSES,
        FILTER_SHOW_DELAY_MS, PORTFOLIO_ITEM_SELECTOR,
    };
    use crate::transition::Generation;
    use crate::web::dom;

    /// Handle a click on `button`: restyle the button row and fade items in or out.
    pub fn apply_filter(button: &web_sys::Element, generation: &Rc<Generation>) {
        let filter = button.get_attribute("data-filter").unwrap_or_default();
        let Some(document) = dom::document() else {
            return;
        };

        for other in dom::query_all(&document, FILTER_BUTTON_SELECTOR) {
            dom::remove_classes(&other, &FILTER_ACTIVE_CLASSES);
            dom::add_classes(&other, &FILTER_IDLE_CLASSES);
        }
        dom::remove_classes(button, &FILTER_IDLE_CLASSES);
        dom::add_classes(button, &FILTER_ACTIVE_CLASSES);

        let ticket = generation.advance();
        for item in dom::query_all(&document, PORTFOLIO_ITEM_SELECTOR) {
            let Ok(item) = item.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            let categories = item.get_attribute("data-category").unwrap_or_default();
            let style = item.style();
            if is_visible(&filter, &categories) {
                dom::set_style(&style, "display", "block");
                let generation = Rc::clone(generation);
                dom::after(FILTER_SHOW_DELAY_MS, move || {
                    if generation.is_current(ticket) {
                        dom::set_style(&style, "opacity", "1");
                        dom::set_style(&style, "transform", "scale(1)");
                    }
                });
            } else {
                dom::set_style(&style, "opacity", "0");
                dom::set_style(&style, "transform", "scale(0.8)");
                let generation = Rc::clone(generation);
                dom::after(FILTER_HIDE_DELAY_MS, move || {
                    if generation.is_current(ticket) {
                        dom::set_style(&style, "display", "none");
                    }
                });
            }
        }
    }
}
