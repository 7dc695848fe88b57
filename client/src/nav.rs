//! Same-origin SPA navigation.
//!
//! ARCHITECTURE
//! ============
//! [`NavigationManager`] owns the single-flight flag and sequences one
//! navigation as explicit async steps: show the overlay, fetch under a
//! timeout, swap `<main>`, update title/history/scroll, re-run page setup,
//! hide the overlay. Every browser effect goes through [`NavigationHost`] so
//! the sequencing is testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Any failure before or during the swap degrades to a full browser load of
//! the same path. The overlay is hidden and the flag cleared on every path.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::Cell;
use std::pin::pin;

use futures::future::{self, Either};

use crate::consts::{FETCH_TIMEOUT_MS, TRANSITION_MS};
use crate::error::NavError;
use crate::page::PageParts;
use crate::routes::{self, HistoryState, LinkAction};

/// Browser effects needed by a navigation.
#[allow(async_fn_in_trait)]
pub trait NavigationHost {
    /// GET `path` and return the body of a 2xx response. Dropping the future
    /// must abort the request.
    async fn fetch_page(&self, path: &str) -> Result<String, NavError>;
    async fn sleep(&self, ms: u32);

    /// Make the full-screen overlay visible at full opacity.
    fn show_loader(&self);
    /// Start the overlay's fade-out.
    fn fade_loader(&self);
    /// Take the faded overlay out of layout.
    fn hide_loader(&self);

    /// Set the live `<main>` opacity, with a transition of [`TRANSITION_MS`].
    fn set_main_opacity(&self, opacity: &str);
    /// Replace the live `<main>` inner markup.
    ///
    /// # Errors
    ///
    /// Fails when the live document has no `<main>` to replace.
    fn replace_main(&self, html: &str) -> Result<(), NavError>;
    fn set_title(&self, title: &str);
    fn push_history(&self, state: &HistoryState);
    fn scroll_to_top(&self);
    /// Mark the desktop and mobile nav links that point at `page`.
    fn highlight_nav(&self, page: &str);
    /// Re-run the page feature initializers against the new content.
    fn init_page(&self);
    /// Full browser navigation; the fallback for every failure.
    fn assign_location(&self, path: &str);
}

/// How a navigation request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// Content swapped in place.
    Swapped,
    /// Swap failed; a full page load was started instead.
    FellBack(NavError),
    /// Another navigation was in flight; nothing happened.
    Dropped,
}

/// Clears the in-flight flag when the navigation scope ends, however it ends.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn enter(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Owns SPA navigation for the lifetime of the page.
pub struct NavigationManager<H> {
    host: H,
    navigating: Cell<bool>,
}

impl<H: NavigationHost> NavigationManager<H> {
    pub fn new(host: H) -> Self {
        Self { host, navigating: Cell::new(false) }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.navigating.get()
    }

    /// Decide what a click on a `data-link` anchor with this href does.
    #[must_use]
    pub fn intercept(&self, href: Option<&str>) -> LinkAction {
        routes::classify_link(href, self.is_navigating())
    }

    /// Replay the page for a restored history entry, without pushing history.
    pub async fn on_popstate(&self, pathname: &str) -> NavOutcome {
        let path = routes::path_from_location(pathname);
        self.navigate_to(&path, false).await
    }

    /// Fetch `path` and swap it into the live document.
    pub async fn navigate_to(&self, path: &str, use_history: bool) -> NavOutcome {
        let Some(_in_flight) = InFlight::enter(&self.navigating) else {
            log::debug!("navigation to {path} dropped: another is in flight");
            return NavOutcome::Dropped;
        };

        self.host.show_loader();
        let outcome = match self.load(path).await {
            Ok(parts) => match self.swap(path, &parts, use_history).await {
                Ok(()) => NavOutcome::Swapped,
                Err(err) => self.fall_back(path, err),
            },
            Err(err) => self.fall_back(path, err),
        };

        self.host.fade_loader();
        self.host.sleep(TRANSITION_MS).await;
        self.host.hide_loader();
        outcome
    }

    async fn load(&self, path: &str) -> Result<PageParts, NavError> {
        let fetch = pin!(self.host.fetch_page(path));
        let timer = pin!(self.host.sleep(FETCH_TIMEOUT_MS));
        let body = match future::select(fetch, timer).await {
            Either::Left((result, _)) => result?,
            Either::Right(((), _)) => return Err(NavError::Timeout(FETCH_TIMEOUT_MS)),
        };
        PageParts::extract(&body)
    }

    async fn swap(&self, path: &str, parts: &PageParts, use_history: bool) -> Result<(), NavError> {
        self.host.set_main_opacity("0");
        self.host.sleep(TRANSITION_MS).await;
        let replaced = self.host.replace_main(&parts.main_html);
        self.host.set_main_opacity("1");
        replaced?;

        if let Some(title) = &parts.title {
            self.host.set_title(title);
        }
        if use_history {
            self.host.push_history(&HistoryState { path: routes::clean_url(path) });
        }
        self.host.scroll_to_top();
        self.host.init_page();
        self.host.highlight_nav(routes::page_id(path));

        log::debug!("navigated to {} ({path})", routes::route_name(path).unwrap_or("unlisted page"));
        Ok(())
    }

    fn fall_back(&self, path: &str, err: NavError) -> NavOutcome {
        log::warn!("SPA navigation to {path} failed, falling back to full load: {err}");
        self.host.assign_location(path);
        NavOutcome::FellBack(err)
    }
}
