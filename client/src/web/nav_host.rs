//! Browser implementation of [`NavigationHost`].

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{AbortController, HtmlElement};

use super::dom;
use super::features::PageFeatures;
use crate::consts::{LOADER_ID, MOBILE_NAV_LINK_SELECTOR, NAV_ACTIVE_CLASSES, NAV_IDLE_CLASSES, NAV_LINK_SELECTOR, TRANSITION_MS};
use crate::error::NavError;
use crate::nav::NavigationHost;
use crate::routes::{self, HistoryState};

const LOADER_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
    background:var(--bg-primary,#fff);display:flex;justify-content:center;align-items:center;\
    z-index:9999;transition:opacity 0.15s ease;";

const LOADER_MARKUP: &str = "<div style=\"width:32px;height:32px;border:3px solid #328990;\
    border-top-color:transparent;border-radius:50%;animation:spa-spin 0.8s linear infinite;\"></div>\
    <style>@keyframes spa-spin { to { transform: rotate(360deg); } }</style>";

/// Aborts the wrapped request when the fetch future is dropped, e.g. when the
/// timeout wins the race.
struct AbortOnDrop(AbortController);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub struct WebNavigationHost {
    features: Rc<PageFeatures>,
}

impl WebNavigationHost {
    #[must_use]
    pub fn new(features: Rc<PageFeatures>) -> Self {
        Self { features }
    }

    fn main_element() -> Option<HtmlElement> {
        let main = dom::query(&dom::document()?, "main")?;
        main.dyn_into::<HtmlElement>().ok()
    }

    fn loader(create: bool) -> Option<HtmlElement> {
        let document = dom::document()?;
        if let Some(existing) = document.get_element_by_id(LOADER_ID) {
            return existing.dyn_into::<HtmlElement>().ok();
        }
        if !create {
            return None;
        }
        let loader = document.create_element("div").ok()?;
        loader.set_id(LOADER_ID);
        let _ = loader.set_attribute("style", LOADER_STYLE);
        loader.set_inner_html(LOADER_MARKUP);
        let _ = document.body()?.append_child(&loader);
        loader.dyn_into::<HtmlElement>().ok()
    }
}

impl NavigationHost for WebNavigationHost {
    async fn fetch_page(&self, path: &str) -> Result<String, NavError> {
        let controller = AbortController::new().map_err(|_| NavError::Unavailable("AbortController"))?;
        let signal = controller.signal();
        let _abort = AbortOnDrop(controller);

        let resp = gloo_net::http::Request::get(path)
            .cache(web_sys::RequestCache::NoStore)
            .abort_signal(Some(&signal))
            .send()
            .await
            .map_err(|e| NavError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(NavError::Status(resp.status()));
        }
        resp.text().await.map_err(|e| NavError::Network(e.to_string()))
    }

    async fn sleep(&self, ms: u32) {
        dom::sleep(ms).await;
    }

    fn show_loader(&self) {
        if let Some(loader) = Self::loader(true) {
            dom::set_style(&loader.style(), "opacity", "1");
            dom::set_style(&loader.style(), "display", "flex");
        }
    }

    fn fade_loader(&self) {
        if let Some(loader) = Self::loader(false) {
            dom::set_style(&loader.style(), "opacity", "0");
        }
    }

    fn hide_loader(&self) {
        if let Some(loader) = Self::loader(false) {
            dom::set_style(&loader.style(), "display", "none");
        }
    }

    fn set_main_opacity(&self, opacity: &str) {
        if let Some(main) = Self::main_element() {
            let style = main.style();
            dom::set_style(&style, "transition", &format!("opacity {TRANSITION_MS}ms ease"));
            dom::set_style(&style, "opacity", opacity);
        }
    }

    fn replace_main(&self, html: &str) -> Result<(), NavError> {
        let main = Self::main_element().ok_or(NavError::Unavailable("main"))?;
        main.set_inner_html(html);
        Ok(())
    }

    fn set_title(&self, title: &str) {
        if let Some(document) = dom::document() {
            document.set_title(title);
        }
    }

    fn push_history(&self, state: &HistoryState) {
        let Some(history) = dom::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let payload = serde_json::to_string(state)
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(wasm_bindgen::JsValue::NULL);
        if let Err(err) = history.push_state_with_url(&payload, "", Some(&state.path)) {
            log::warn!("history push for {} failed: {err:?}", state.path);
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = dom::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn highlight_nav(&self, page: &str) {
        let Some(document) = dom::document() else {
            return;
        };
        for link in dom::query_all(&document, NAV_LINK_SELECTOR) {
            if routes::link_matches_page(link.get_attribute("href").as_deref(), page) {
                dom::add_classes(&link, &NAV_ACTIVE_CLASSES);
                dom::remove_classes(&link, &NAV_IDLE_CLASSES);
            } else {
                dom::remove_classes(&link, &NAV_ACTIVE_CLASSES);
                dom::add_classes(&link, &NAV_IDLE_CLASSES);
            }
        }
        for link in dom::query_all(&document, MOBILE_NAV_LINK_SELECTOR) {
            if routes::link_matches_page(link.get_attribute("href").as_deref(), page) {
                dom::add_classes(&link, &NAV_ACTIVE_CLASSES);
            } else {
                dom::remove_classes(&link, &NAV_ACTIVE_CLASSES);
            }
        }
    }

    fn init_page(&self) {
        self.features.init_page();
    }

    fn assign_location(&self, path: &str) {
        if let Some(window) = dom::window() {
            if let Err(err) = window.location().set_href(path) {
                log::error!("full navigation to {path} failed: {err:?}");
            }
        }
    }
}
