//! Error types for page navigation and form submission.
//!
//! Neither error is ever surfaced as a crash: navigation errors trigger the
//! full-page fallback and form errors become an error banner.

use thiserror::Error;

/// Why an SPA navigation could not swap content in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("network error: {0}")]
    Network(String),
    #[error("timed out after {0} ms")]
    Timeout(u32),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("fetched document has no <main> region")]
    MissingMain,
    #[error("browser object unavailable: {0}")]
    Unavailable(&'static str),
}

/// Why a contact form post failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("network error: {0}")]
    Network(String),
    #[error("form submission failed: HTTP {0}")]
    Status(u16),
}
