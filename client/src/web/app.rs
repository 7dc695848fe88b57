//! Long-lived page services and the listeners that feed them.
//!
//! ARCHITECTURE
//! ============
//! [`App::start`] builds every service once and binds a handful of listeners
//! to stable targets (document, window, the dark-scheme media query). Clicks
//! are dispatched by delegation so nothing needs rebinding after a swap.
//! Dropping the [`App`] detaches every listener and disconnects the observers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlFormElement, MediaQueryListEvent};

use super::alert::AlertBanner;
use super::dom;
use super::features::PageFeatures;
use super::listener::Listener;
use super::nav_host::WebNavigationHost;
use crate::consts::{
    ALERT_BANNER_ID, ALERT_DISMISS_MS, DARK_SCHEME_QUERY, FAQ_TOGGLE_SELECTOR, FILTER_BUTTON_SELECTOR,
    LINK_MARKER_SELECTOR, MOBILE_MENU_BUTTON_ID, MOBILE_MENU_ID, PORTFOLIO_DETAIL_SELECTOR,
    THEME_TOGGLE_SELECTOR,
};
use crate::filter;
use crate::form::{self, WebForm};
use crate::nav::{NavigationHost, NavigationManager};
use crate::routes::{self, LinkAction};
use crate::theme::{ThemeManager, WebThemeHost};
use crate::transition::Generation;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Build the page services and keep them alive until [`shutdown`].
///
/// # Errors
///
/// Returns the browser's exception if a listener or observer cannot be set up.
pub fn install() -> Result<(), JsValue> {
    let app = App::start()?;
    log::debug!("page services installed (spa: {})", app.spa_enabled());
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Detach every listener and observer installed by [`install`].
pub fn shutdown() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        log::debug!("page services shut down");
    }
}

/// Services shared by the listener closures.
struct Services {
    theme: Rc<ThemeManager<WebThemeHost>>,
    features: Rc<PageFeatures>,
    nav: Option<Rc<NavigationManager<WebNavigationHost>>>,
    banner: Rc<AlertBanner>,
    filter: Rc<Generation>,
}

pub struct App {
    _listeners: Vec<Listener>,
    services: Rc<Services>,
}

impl App {
    /// Initialize the theme and the current page, then attach listeners.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if a listener or observer cannot be set up.
    pub fn start() -> Result<Self, JsValue> {
        let window = dom::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;

        let theme = Rc::new(ThemeManager::new(WebThemeHost));
        let initial = theme.init();
        let features = Rc::new(PageFeatures::new(Rc::clone(&theme))?);

        let location = window.location();
        let protocol = location.protocol()?;
        let nav = if routes::is_network_protocol(&protocol) {
            let host = WebNavigationHost::new(Rc::clone(&features));
            Some(Rc::new(NavigationManager::new(host)))
        } else {
            log::info!("page opened over {protocol}; SPA navigation disabled");
            None
        };

        let services = Rc::new(Services {
            theme,
            features,
            nav,
            banner: Rc::new(AlertBanner::new()),
            filter: Rc::new(Generation::new()),
        });

        let mut listeners = Vec::new();
        let on_click = Rc::clone(&services);
        listeners.push(Listener::new(&document, "click", move |event| on_click.on_click(&event))?);
        let on_submit = Rc::clone(&services);
        listeners.push(Listener::new(&document, "submit", move |event| on_submit.on_submit(&event))?);
        let on_scroll = Rc::clone(&services);
        listeners.push(Listener::new(&window, "scroll", move |_| on_scroll.features.on_scroll())?);

        if let Some(nav) = &services.nav {
            let nav = Rc::clone(nav);
            listeners.push(Listener::new(&window, "popstate", move |_| {
                let Some(pathname) = dom::window().and_then(|w| w.location().pathname().ok()) else {
                    return;
                };
                let nav = Rc::clone(&nav);
                spawn_local(async move {
                    nav.on_popstate(&pathname).await;
                });
            })?);
        }

        if let Some(query) = window.match_media(DARK_SCHEME_QUERY)? {
            let on_scheme = Rc::clone(&services);
            listeners.push(Listener::new(&query, "change", move |event| {
                if let Some(change) = event.dyn_ref::<MediaQueryListEvent>() {
                    on_scheme.theme.on_scheme_change(change.matches());
                }
            })?);
        }

        services.features.init_page();
        if let Some(nav) = &services.nav {
            let path = routes::path_from_location(&location.pathname()?);
            nav.host().highlight_nav(routes::page_id(&path));
        }
        log::debug!("initial theme: {}", initial.as_str());

        Ok(Self { _listeners: listeners, services })
    }

    #[must_use]
    pub fn spa_enabled(&self) -> bool {
        self.services.nav.is_some()
    }
}

impl Services {
    fn on_click(&self, event: &Event) {
        if dom::closest(event, THEME_TOGGLE_SELECTOR).is_some() {
            self.theme.toggle_theme();
            return;
        }
        if dom::closest(event, &format!("#{MOBILE_MENU_BUTTON_ID}")).is_some() {
            self.features.toggle_mobile_menu();
            return;
        }
        if let Some(toggle) = dom::closest(event, FAQ_TOGGLE_SELECTOR) {
            self.features.toggle_faq(&toggle);
            return;
        }
        if let Some(button) = dom::closest(event, FILTER_BUTTON_SELECTOR) {
            filter::apply_filter(&button, &self.filter);
            return;
        }
        if dom::closest(event, &format!("#{ALERT_BANNER_ID} button")).is_some() {
            self.banner.dismiss();
            return;
        }
        if dom::closest(event, PORTFOLIO_DETAIL_SELECTOR).is_some() {
            event.prevent_default();
            self.features.scroll_to_case_study();
            return;
        }
        self.on_link_click(event);
    }

    fn on_link_click(&self, event: &Event) {
        let Some(anchor) = dom::closest(event, "a") else {
            return;
        };
        if anchor.closest(&format!("#{MOBILE_MENU_ID}")).ok().flatten().is_some() {
            self.features.close_mobile_menu();
        }

        if let (Some(nav), Some(link)) = (&self.nav, dom::closest(event, LINK_MARKER_SELECTOR)) {
            match nav.intercept(link.get_attribute("href").as_deref()) {
                LinkAction::Native => {}
                LinkAction::Drop => {
                    event.prevent_default();
                    return;
                }
                LinkAction::Navigate(path) => {
                    event.prevent_default();
                    let nav = Rc::clone(nav);
                    spawn_local(async move {
                        nav.navigate_to(&path, true).await;
                    });
                    return;
                }
            }
        }

        let href = anchor.get_attribute("href").unwrap_or_default();
        if href.len() > 1 && href.starts_with('#') && self.features.scroll_to_fragment(&href) {
            event.prevent_default();
        }
    }

    fn on_submit(&self, event: &Event) {
        let Some(form) = event.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
            return;
        };
        event.prevent_default();
        event.stop_propagation();

        let form = WebForm::new(form, Rc::clone(&self.banner));
        let banner = Rc::clone(&self.banner);
        spawn_local(async move {
            if form::submit(&form).await.auto_dismiss() {
                banner.dismiss_after(ALERT_DISMISS_MS);
            }
        });
    }
}
