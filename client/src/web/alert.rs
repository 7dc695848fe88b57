//! The `#alert-banner` status banner.

use std::rc::Rc;

use super::dom;
use crate::consts::ALERT_BANNER_ID;
use crate::form::{Alert, AlertKind};
use crate::transition::Generation;

/// Owns the banner and invalidates pending auto-dismissals when it changes.
#[derive(Default)]
pub struct AlertBanner {
    generation: Generation,
}

impl AlertBanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `alert` into the banner and reveal it.
    pub fn show(&self, alert: &Alert) {
        self.generation.advance();
        let Some(document) = dom::document() else {
            return;
        };
        let Some(banner) = document.get_element_by_id(ALERT_BANNER_ID) else {
            return;
        };

        let classes: Vec<&str> = AlertKind::ALL.iter().map(|kind| kind.class()).collect();
        dom::remove_classes(&banner, &["hidden"]);
        dom::remove_classes(&banner, &classes);
        dom::add_classes(&banner, &["alert-banner", alert.kind.class()]);

        banner.set_text_content(None);
        let Ok(content) = document.create_element("div") else {
            return;
        };
        content.set_class_name("alert-banner-content");
        for (class, text) in [("alert-banner-title", alert.title), ("alert-banner-message", alert.message)] {
            if let Ok(line) = document.create_element("div") {
                line.set_class_name(class);
                line.set_text_content(Some(text));
                let _ = content.append_child(&line);
            }
        }
        let _ = banner.append_child(&content);

        if let Ok(close) = document.create_element("button") {
            let _ = close.set_attribute("aria-label", "Close alert");
            let _ = close.set_attribute("type", "button");
            close.set_text_content(Some("✕"));
            let _ = banner.append_child(&close);
        }
    }

    /// Hide the banner now.
    pub fn dismiss(&self) {
        self.generation.advance();
        if let Some(banner) = dom::document().and_then(|d| d.get_element_by_id(ALERT_BANNER_ID)) {
            dom::add_classes(&banner, &["hidden"]);
        }
    }

    /// Hide the banner after `ms` unless it was shown or dismissed again meanwhile.
    pub fn dismiss_after(self: &Rc<Self>, ms: u32) {
        let ticket = self.generation.ticket();
        let banner = Rc::clone(self);
        dom::after(ms, move || {
            if banner.generation.is_current(ticket) {
                banner.dismiss();
            }
        });
    }
}
