//! Contact form submission to Formspree.
//!
//! ERROR HANDLING
//! ==============
//! Invalid forms never reach the network. Transport and HTTP failures become
//! an error banner that points the visitor at a direct contact address; the
//! submit button is restored on every path.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::consts::FORM_ENDPOINT;
use crate::error::FormError;

/// Placeholder label shown on the submit button while posting.
pub const SENDING_LABEL: &str = "⏳ Sending...";

/// Banner severity; doubles as the CSS class on `#alert-banner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
    Warning,
}

impl AlertKind {
    pub const ALL: [Self; 4] = [Self::Success, Self::Error, Self::Info, Self::Warning];

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Content of the status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Alert {
    #[must_use]
    pub fn sent() -> Self {
        Self {
            kind: AlertKind::Success,
            title: "Message Sent",
            message: "Your message has been sent successfully! I'll get back to you within 24 hours.",
        }
    }

    #[must_use]
    pub fn failed() -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Submission Error",
            message: "Something went wrong. Please try again or contact me directly at ademola@example.com",
        }
    }

    #[must_use]
    pub fn invalid() -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Validation Error",
            message: "Please fill in all required fields.",
        }
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Constraint validation failed; nothing was sent.
    Invalid,
    Sent,
    Failed(FormError),
}

impl SubmitOutcome {
    /// Success banners dismiss themselves; errors stay until closed.
    #[must_use]
    pub fn auto_dismiss(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// One form being submitted, plus the transport that posts it.
#[allow(async_fn_in_trait)]
pub trait FormHost {
    /// Run browser constraint validation, reporting problems inline.
    fn validate(&self) -> bool;
    /// Disable the submit button and show `label`; returns the previous label.
    fn begin_busy(&self, label: &str) -> Option<String>;
    /// Re-enable the submit button with its previous label.
    fn end_busy(&self, previous: Option<String>);
    fn reset(&self);
    fn show_alert(&self, alert: &Alert);
    /// POST the form's fields as multipart data, accepting JSON.
    async fn post(&self, endpoint: &str) -> Result<(), FormError>;
}

/// Validate, post, and report on a form.
pub async fn submit<H: FormHost>(host: &H) -> SubmitOutcome {
    if !host.validate() {
        host.show_alert(&Alert::invalid());
        return SubmitOutcome::Invalid;
    }

    let previous = host.begin_busy(SENDING_LABEL);
    let outcome = match host.post(FORM_ENDPOINT).await {
        Ok(()) => {
            log::info!("form submission succeeded");
            host.show_alert(&Alert::sent());
            host.reset();
            SubmitOutcome::Sent
        }
        Err(err) => {
            log::error!("form submission failed: {err}");
            host.show_alert(&Alert::failed());
            SubmitOutcome::Failed(err)
        }
    };
    host.end_busy(previous);
    outcome
}

#[cfg(feature = "hydrate")]
pub use web::WebForm;

#[cfg(feature = "hydrate")]
mod web {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    use super::FormHost;
    use crate::error::FormError;
    use crate::form::Alert;
    use crate::web::alert::AlertBanner;

    /// A live `<form>` element and its submit button.
    pub struct WebForm {
        form: web_sys::HtmlFormElement,
        button: Option<web_sys::HtmlButtonElement>,
        banner: Rc<AlertBanner>,
    }

    impl WebForm {
        #[must_use]
        pub fn new(form: web_sys::HtmlFormElement, banner: Rc<AlertBanner>) -> Self {
            let button = form
                .query_selector("button[type=\"submit\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web_sys::HtmlButtonElement>().ok());
            Self { form, button, banner }
        }
    }

    impl FormHost for WebForm {
        fn validate(&self) -> bool {
            self.form.report_validity()
        }

        fn begin_busy(&self, label: &str) -> Option<String> {
            let button = self.button.as_ref()?;
            let previous = button.text_content();
            button.set_disabled(true);
            button.set_text_content(Some(label));
            previous
        }

        fn end_busy(&self, previous: Option<String>) {
            if let Some(button) = &self.button {
                button.set_disabled(false);
                button.set_text_content(previous.as_deref());
            }
        }

        fn reset(&self) {
            self.form.reset();
        }

        fn show_alert(&self, alert: &Alert) {
            self.banner.show(alert);
        }

        async fn post(&self, endpoint: &str) -> Result<(), FormError> {
            let data = web_sys::FormData::new_with_form(&self.form)
                .map_err(|e| FormError::Network(format!("{e:?}")))?;
            let resp = gloo_net::http::Request::post(endpoint)
                .header("Accept", "application/json")
                .body(data)
                .map_err(|e| FormError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| FormError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(FormError::Status(resp.status()));
            }
            Ok(())
        }
    }
}
