//! Route table and path helpers for SPA navigation.
//!
//! Dispatch never consults [`ROUTES`]; the anchor's href is authoritative.
//! The table only names known pages for logging.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::Serialize;

/// A known page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
}

pub const ROUTES: [Route; 6] = [
    Route { path: "index.html", name: "Home" },
    Route { path: "about.html", name: "About" },
    Route { path: "services.html", name: "Services" },
    Route { path: "portfolio.html", name: "Portfolio" },
    Route { path: "reviews.html", name: "Reviews" },
    Route { path: "contact.html", name: "Contact" },
];

const HTML_SUFFIX: &str = ".html";
const INDEX_PAGE: &str = "index";

/// Display name of a known page, matched on its final path segment.
#[must_use]
pub fn route_name(path: &str) -> Option<&'static str> {
    let page = page_id(path);
    ROUTES
        .iter()
        .find(|route| page_id(route.path) == page)
        .map(|route| route.name)
}

/// What a click on a `data-link` anchor should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Not ours: let the browser follow the link.
    Native,
    /// Ours, but a navigation is already in flight.
    Drop,
    /// Intercept and navigate to this normalized `.html` path.
    Navigate(String),
}

/// Classify a marked link click by its raw `href` attribute.
#[must_use]
pub fn classify_link(href: Option<&str>, navigating: bool) -> LinkAction {
    let Some(href) = href.map(str::trim) else {
        return LinkAction::Native;
    };
    if href.is_empty() || href.starts_with('#') || is_external(href) {
        return LinkAction::Native;
    }
    if navigating {
        return LinkAction::Drop;
    }
    LinkAction::Navigate(normalize_path(href))
}

/// Whether `href` carries a scheme (`https:`, `mailto:`) or is protocol-relative.
#[must_use]
pub fn is_external(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Normalize an internal href so it names an `.html` document.
///
/// Query strings and fragments are dropped; `/about/` becomes `/about.html`
/// and an empty or root href becomes `index.html`.
#[must_use]
pub fn normalize_path(href: &str) -> String {
    let path = strip_query_and_fragment(href);
    if path.ends_with(HTML_SUFFIX) {
        return path.to_owned();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return format!("{INDEX_PAGE}{HTML_SUFFIX}");
    }
    format!("{trimmed}{HTML_SUFFIX}")
}

/// Address-bar form of a page path: suffix stripped, index mapped to its directory.
#[must_use]
pub fn clean_url(path: &str) -> String {
    let stripped = strip_query_and_fragment(path).trim_start_matches('/');
    let stripped = stripped.strip_suffix(HTML_SUFFIX).unwrap_or(stripped);
    if stripped.is_empty() || stripped == INDEX_PAGE {
        return "/".to_owned();
    }
    if let Some(dir) = stripped.strip_suffix("/index") {
        return format!("/{dir}/");
    }
    format!("/{stripped}")
}

/// Identifier of a page: its final path segment without the `.html` suffix.
///
/// The site root and an empty segment both identify the index page.
#[must_use]
pub fn page_id(path: &str) -> &str {
    let path = strip_query_and_fragment(path);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let segment = segment.strip_suffix(HTML_SUFFIX).unwrap_or(segment);
    if segment.is_empty() { INDEX_PAGE } else { segment }
}

/// Page path to replay when the browser restores a history entry.
///
/// The inverse of [`clean_url`]: `/about` replays `about.html`, `/` replays
/// `index.html`, and a directory URL such as `/blog/` replays its absolute
/// `/blog/index.html`.
#[must_use]
pub fn path_from_location(pathname: &str) -> String {
    let segment = pathname.rsplit('/').next().unwrap_or_default();
    if !segment.is_empty() {
        return normalize_path(segment);
    }
    let dir = pathname.trim_end_matches('/');
    if dir.is_empty() {
        return format!("{INDEX_PAGE}{HTML_SUFFIX}");
    }
    format!("{dir}/{INDEX_PAGE}{HTML_SUFFIX}")
}

/// Whether a nav link with this href points at `page`.
#[must_use]
pub fn link_matches_page(href: Option<&str>, page: &str) -> bool {
    href.is_some_and(|href| page_id(href) == page)
}

/// SPA navigation is only reliable when the page was served over HTTP(S).
#[must_use]
pub fn is_network_protocol(protocol: &str) -> bool {
    matches!(protocol, "http:" | "https:")
}

/// Payload stored with each pushed history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryState {
    pub path: String,
}

fn strip_query_and_fragment(href: &str) -> &str {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    &href[..end]
}
