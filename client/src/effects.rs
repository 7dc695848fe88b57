//! Small visual rules shared by the page features: accordion icon rotation,
//! the scrolled nav bar, and the eased scroll to the case study.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::consts::NAV_SCROLL_THRESHOLD_PX;

/// CSS transform for an FAQ indicator.
#[must_use]
pub fn faq_icon_transform(open: bool) -> &'static str {
    if open { "rotate(180deg)" } else { "rotate(0deg)" }
}

/// Whether the nav bar should carry the `scrolled` class at this offset.
#[must_use]
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

/// Quadratic ease-in-out: position at `elapsed` of a move from `start` by
/// `distance` lasting `duration`.
#[must_use]
pub fn ease_in_out_quad(elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + distance;
    }
    let t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return distance / 2.0 * t * t + start;
    }
    let t = t - 1.0;
    -distance / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// An eased vertical scroll, sampled by elapsed milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollTween {
    /// Scroll offset at `elapsed_ms`, or `None` once the tween is finished.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> Option<f64> {
        if elapsed_ms >= self.duration_ms {
            return None;
        }
        Some(ease_in_out_quad(elapsed_ms.max(0.0), self.from, self.to - self.from, self.duration_ms))
    }
}
