//! Extraction of the swappable regions from a fetched HTML document.
//!
//! Only two regions matter: the inner markup of the first `<main>` element
//! and the text of the document `<title>`. The body is parsed the way a
//! browser would, so comments, script text and inline SVG titles never leak
//! into either region.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use scraper::{ElementRef, Html, Selector};

use crate::error::NavError;

/// The parts of a fetched page that replace the live document's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParts {
    pub main_html: String,
    pub title: Option<String>,
}

impl PageParts {
    /// Pull `<main>` and `<title>` out of a full HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::MissingMain`] if the document has no `<main>`
    /// element.
    pub fn extract(html: &str) -> Result<Self, NavError> {
        let doc = Html::parse_document(html);
        let main = select(&doc, "main").next().ok_or(NavError::MissingMain)?;
        let title = select(&doc, "title")
            .find(|el| !in_svg(*el))
            .map(|el| el.text().collect::<String>().trim().to_owned());
        Ok(Self { main_html: main.inner_html(), title })
    }
}

/// Elements matching `css` in document order; empty if `css` does not parse.
fn select<'a>(doc: &'a Html, css: &str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let selector = Selector::parse(css).ok();
    let matches: Vec<ElementRef<'a>> = selector.map(|s| doc.select(&s).collect()).unwrap_or_default();
    matches.into_iter()
}

/// `<svg><title>` is an accessible name, not the document title.
fn in_svg(el: ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "svg")
}
