//! Light/dark theme preference.
//!
//! The preference lives under one local storage key. Only explicit choices
//! are written; the OS scheme supplies the default and keeps driving the
//! theme for visitors who never chose one.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A host whose storage is unavailable simply never
//! remembers the choice and the defaults apply on every load.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

/// The two themes the stylesheet knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; anything but `light`/`dark` is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Opacity of the sun and moon icons while this theme is active.
    #[must_use]
    pub fn icon_opacity(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("1", "0"),
            Self::Dark => ("0", "1"),
        }
    }
}

/// Browser surface the theme manager drives.
pub trait ThemeHost {
    /// Raw stored preference, `None` when absent or storage is unavailable.
    fn stored(&self) -> Option<String>;
    /// Persist the preference; failures are ignored.
    fn store(&self, theme: Theme);
    /// Whether the OS currently prefers a dark scheme.
    fn prefers_dark(&self) -> bool;
    /// Set the document attribute and icon visibility.
    fn render(&self, theme: Theme);
}

/// Owns the active theme for the lifetime of the page.
pub struct ThemeManager<H> {
    host: H,
    current: Cell<Theme>,
    /// Set once the visitor picks a theme, whether or not storage kept it.
    chosen: Cell<bool>,
}

impl<H: ThemeHost> ThemeManager<H> {
    pub fn new(host: H) -> Self {
        Self { host, current: Cell::new(Theme::default()), chosen: Cell::new(false) }
    }

    /// Apply the stored theme, else the OS default. Does not write storage.
    pub fn init(&self) -> Theme {
        let theme = self.resolve();
        self.apply(theme);
        theme
    }

    /// Apply and persist an explicit choice.
    pub fn set_theme(&self, theme: Theme) {
        self.apply(theme);
        self.chosen.set(true);
        self.host.store(theme);
    }

    /// Flip to the other theme and persist it.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current.get().toggled();
        self.set_theme(next);
        next
    }

    /// React to an OS scheme change; ignored once the visitor has chosen.
    pub fn on_scheme_change(&self, prefers_dark: bool) {
        if self.chosen.get() || self.stored_theme().is_some() {
            return;
        }
        self.apply(Theme::from_prefers_dark(prefers_dark));
    }

    /// Re-render the theme already in effect, e.g. after page content was
    /// swapped. Storage is not consulted again, so a choice that could not be
    /// persisted survives in-page navigation.
    pub fn reapply(&self) -> Theme {
        let theme = self.current.get();
        self.host.render(theme);
        theme
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    fn resolve(&self) -> Theme {
        self.stored_theme()
            .unwrap_or_else(|| Theme::from_prefers_dark(self.host.prefers_dark()))
    }

    fn stored_theme(&self) -> Option<Theme> {
        self.host.stored().as_deref().and_then(Theme::parse)
    }

    fn apply(&self, theme: Theme) {
        self.current.set(theme);
        self.host.render(theme);
    }
}

#[cfg(feature = "hydrate")]
pub use web::WebThemeHost;

#[cfg(feature = "hydrate")]
mod web {
    use wasm_bindgen::JsCast;

    use super::{Theme, ThemeHost};
    use crate::consts::{DARK_SCHEME_QUERY, MOON_ICON_SELECTOR, SUN_ICON_SELECTOR, THEME_STORAGE_KEY};

    /// `localStorage` + `<html data-theme>` implementation.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WebThemeHost;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn set_icon_opacity(document: &web_sys::Document, selector: &str, opacity: &str) {
        let Ok(Some(el)) = document.query_selector(selector) else {
            return;
        };
        if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = el.style().set_property("opacity", opacity);
        }
    }

    impl ThemeHost for WebThemeHost {
        fn stored(&self) -> Option<String> {
            storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
        }

        fn store(&self, theme: Theme) {
            if let Some(storage) = storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
            }
        }

        fn prefers_dark(&self) -> bool {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .is_some_and(|mq| mq.matches())
        }

        fn render(&self, theme: Theme) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
            let (sun, moon) = theme.icon_opacity();
            if document.query_selector(SUN_ICON_SELECTOR).ok().flatten().is_some()
                && document.query_selector(MOON_ICON_SELECTOR).ok().flatten().is_some()
            {
                set_icon_opacity(&document, SUN_ICON_SELECTOR, sun);
                set_icon_opacity(&document, MOON_ICON_SELECTOR, moon);
            }
        }
    }
}
