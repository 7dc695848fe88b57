//! Shared constants for the client crate: timings, storage keys, endpoints,
//! and the selectors/classes that form the contract with the site markup.

// ── Timing ──────────────────────────────────────────────────────

/// Upper bound on an SPA page fetch before falling back to a full load.
pub const FETCH_TIMEOUT_MS: u32 = 3000;

/// Fade duration for the main region and the loading overlay.
pub const TRANSITION_MS: u32 = 150;

/// Total duration of a stat counter animation.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Interval between stat counter frames.
pub const COUNTER_TICK_MS: u32 = 16;

/// Delay before a revealed portfolio item starts its fade-in.
pub const FILTER_SHOW_DELAY_MS: u32 = 10;

/// Delay before a faded portfolio item is removed from layout.
pub const FILTER_HIDE_DELAY_MS: u32 = 300;

/// Success banners close themselves after this long.
pub const ALERT_DISMISS_MS: u32 = 5000;

/// Duration of the animated scroll to the featured case study.
pub const CASE_STUDY_SCROLL_MS: u32 = 800;

/// Scroll offset past which the nav bar gets the `scrolled` class.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;

// ── Storage / network ───────────────────────────────────────────

/// The one local storage key this site writes.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Formspree endpoint receiving contact form posts.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xgolboen";

/// Media query used to derive the OS default theme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Markup contract ─────────────────────────────────────────────

pub const LINK_MARKER_SELECTOR: &str = "[data-link]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const MOBILE_NAV_LINK_SELECTOR: &str = ".mobile-menu-item";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-button";
pub const LOADER_ID: &str = "spa-loader";
pub const ALERT_BANNER_ID: &str = "alert-banner";
pub const CASE_STUDY_ID: &str = "featured-case-study";
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const SUN_ICON_SELECTOR: &str = ".sun-icon";
pub const MOON_ICON_SELECTOR: &str = ".moon-icon";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const STAT_SELECTOR: &str = ".stat-number";
pub const FAQ_TOGGLE_SELECTOR: &str = ".faq-toggle";
pub const FAQ_ICON_SELECTOR: &str = ".faq-icon";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
pub const PORTFOLIO_DETAIL_SELECTOR: &str = ".portfolio-item button";

/// Classes a matching desktop nav link gains (non-matching links lose them).
pub const NAV_ACTIVE_CLASSES: [&str; 2] = ["text-primary", "font-semibold"];

/// Classes a non-matching desktop nav link gains.
pub const NAV_IDLE_CLASSES: [&str; 2] = ["text-gray-700", "hover:text-primary"];

pub const FILTER_ACTIVE_CLASSES: [&str; 3] = ["active", "border-primary", "text-primary"];
pub const FILTER_IDLE_CLASSES: [&str; 2] = ["border-gray-300", "text-gray-600"];

/// Filter value that shows every portfolio item.
pub const FILTER_ALL: &str = "all";
