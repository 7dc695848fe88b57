//! Page feature wiring that must be redone after every content swap.
//!
//! Click-driven features (FAQ, mobile menu, scroll helpers) are plain methods
//! called from the delegated document listener in [`super::app`]. The two
//! intersection observers are long-lived: [`PageFeatures::init_page`]
//! disconnects them and points them at the elements of the current `<main>`.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::consts::{
    CASE_STUDY_ID, CASE_STUDY_SCROLL_MS, COUNTER_TICK_MS, FADE_IN_SELECTOR, FAQ_ICON_SELECTOR,
    MOBILE_MENU_ID, STAT_SELECTOR,
};
use crate::counter::CounterAnimation;
use crate::effects::{self, ScrollTween};
use crate::theme::{ThemeManager, WebThemeHost};
use crate::transition::Generation;

const SCROLL_FRAME_MS: u32 = 16;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An intersection observer and the closure it calls back into.
struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observer {
    fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(&Element) + 'static,
    {
        let callback: ObserverCallback =
            Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target());
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _callback: callback })
    }

    /// Drop all current targets and observe everything matching `selector`.
    fn reobserve(&self, selector: &str) {
        self.observer.disconnect();
        let Some(document) = dom::document() else {
            return;
        };
        for el in dom::query_all(&document, selector) {
            self.observer.observe(&el);
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub struct PageFeatures {
    theme: Rc<ThemeManager<WebThemeHost>>,
    fade_in: Observer,
    counters: Observer,
    scroll: Rc<Generation>,
}

impl PageFeatures {
    /// Build the observers. Nothing is observed until [`Self::init_page`].
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if an observer cannot be created.
    pub fn new(theme: Rc<ThemeManager<WebThemeHost>>) -> Result<Self, JsValue> {
        let fade_in = Observer::new(0.1, Some("0px 0px -50px 0px"), |el| {
            dom::add_classes(el, &["visible"]);
        })?;
        let counters = Observer::new(0.5, None, start_counter)?;
        Ok(Self { theme, fade_in, counters, scroll: Rc::new(Generation::new()) })
    }

    /// Wire the current document: theme, observers, forms, nav state.
    pub fn init_page(&self) {
        self.theme.reapply();
        self.fade_in.reobserve(FADE_IN_SELECTOR);
        self.counters.reobserve(STAT_SELECTOR);
        neutralize_form_actions();
        self.on_scroll();
    }

    /// Open or close the panel following `toggle` and rotate its icon.
    pub fn toggle_faq(&self, toggle: &Element) {
        let Some(panel) = toggle.next_element_sibling() else {
            return;
        };
        let Ok(hidden) = panel.class_list().toggle("hidden") else {
            return;
        };
        if let Ok(Some(icon)) = toggle.query_selector(FAQ_ICON_SELECTOR) {
            dom::set_element_style(&icon, "transform", effects::faq_icon_transform(!hidden));
        }
    }

    pub fn toggle_mobile_menu(&self) {
        if let Some(menu) = mobile_menu() {
            let list = menu.class_list();
            let _ = list.toggle("hidden");
            let _ = list.toggle("show");
        }
    }

    pub fn close_mobile_menu(&self) {
        if let Some(menu) = mobile_menu() {
            dom::add_classes(&menu, &["hidden"]);
            dom::remove_classes(&menu, &["show"]);
        }
    }

    /// Sync the `nav` bar's `scrolled` class with the page offset.
    pub fn on_scroll(&self) {
        let Some(nav) = dom::document().and_then(|d| dom::query(&d, "nav")) else {
            return;
        };
        if effects::nav_is_scrolled(dom::scroll_y()) {
            dom::add_classes(&nav, &["scrolled"]);
        } else {
            dom::remove_classes(&nav, &["scrolled"]);
        }
    }

    /// Smoothly bring the element named by a `#fragment` href into view.
    /// Returns `false` when nothing matches.
    pub fn scroll_to_fragment(&self, fragment: &str) -> bool {
        let Some(target) = dom::document().and_then(|d| dom::query(&d, fragment)) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    /// Eased scroll to the featured case study. A newer scroll supersedes it.
    pub fn scroll_to_case_study(&self) {
        let Some(section) = dom::document().and_then(|d| d.get_element_by_id(CASE_STUDY_ID)) else {
            return;
        };
        let from = dom::scroll_y();
        let tween = ScrollTween {
            from,
            to: section.get_bounding_client_rect().top() + from,
            duration_ms: f64::from(CASE_STUDY_SCROLL_MS),
        };
        let ticket = self.scroll.advance();
        let generation = Rc::clone(&self.scroll);
        spawn_local(async move {
            let Some(window) = dom::window() else {
                return;
            };
            let started = js_sys::Date::now();
            while generation.is_current(ticket) {
                match tween.sample(js_sys::Date::now() - started) {
                    Some(y) => window.scroll_to_with_x_and_y(0.0, y),
                    None => {
                        window.scroll_to_with_x_and_y(0.0, tween.to);
                        break;
                    }
                }
                dom::sleep(SCROLL_FRAME_MS).await;
            }
        });
    }
}

fn mobile_menu() -> Option<Element> {
    dom::document()?.get_element_by_id(MOBILE_MENU_ID)
}

/// Animate one `.stat-number` the first time it becomes visible.
fn start_counter(el: &Element) {
    if el.class_list().contains("counted") {
        return;
    }
    let Some(animation) = CounterAnimation::from_data(
        el.get_attribute("data-target").as_deref(),
        el.get_attribute("data-suffix").as_deref(),
    ) else {
        return;
    };
    dom::add_classes(el, &["counted"]);

    let el = el.clone();
    spawn_local(async move {
        for frame in animation.frames() {
            el.set_text_content(Some(&frame));
            dom::sleep(COUNTER_TICK_MS).await;
        }
    });
}

/// Forms are submitted by script; keep the browser from posting them itself.
fn neutralize_form_actions() {
    let Some(document) = dom::document() else {
        return;
    };
    for form in dom::query_all(&document, "form[action]") {
        let _ = form.set_attribute("action", "#");
    }
}
