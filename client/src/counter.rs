//! Stat counter animation frames.
//!
//! A counter climbs from 0 to its target in equal increments, one frame per
//! tick, and always finishes on the exact target followed by its suffix.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// Counter configuration read from a `.stat-number` element.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    suffix: String,
    increment: f64,
}

impl CounterAnimation {
    /// Parse `data-target` / `data-suffix`. Returns `None` for a missing or
    /// non-numeric target, which leaves the element untouched.
    #[must_use]
    pub fn from_data(target: Option<&str>, suffix: Option<&str>) -> Option<Self> {
        let target = parse_leading_int(target?)?;
        Some(Self::new(target, suffix.unwrap_or_default()))
    }

    #[must_use]
    pub fn new(target: u32, suffix: &str) -> Self {
        let ticks = f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_TICK_MS);
        Self { target, suffix: suffix.to_owned(), increment: f64::from(target) / ticks }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Frame texts in display order; the last one is always `target + suffix`.
    pub fn frames(&self) -> Frames<'_> {
        Frames { animation: self, value: 0.0, done: false }
    }

    fn label(&self, value: u32) -> String {
        format!("{value}{}", self.suffix)
    }
}

/// Iterator over the texts shown on each counter tick.
pub struct Frames<'a> {
    animation: &'a CounterAnimation,
    value: f64,
    done: bool,
}

impl Iterator for Frames<'_> {
    type Item = String;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.value += self.animation.increment;
        let target = self.animation.target;
        if self.value >= f64::from(target) || self.animation.increment <= 0.0 {
            self.done = true;
            return Some(self.animation.label(target));
        }
        Some(self.animation.label(self.value.floor() as u32))
    }
}

/// `parseInt`-style parse: optional whitespace and sign, leading digits, rest
/// ignored. Out-of-range values saturate, so a negative target counts to 0.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = &unsigned[..unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len())];
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}
