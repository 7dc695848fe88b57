//! Generation tokens for delayed visual effects.
//!
//! A delayed step (hide after a fade, auto-dismiss a banner) captures a
//! [`Ticket`] when it is scheduled and re-checks it when it wakes. Any newer
//! [`Generation::advance`] makes older tickets stale so a superseded step
//! cannot clobber the newer state.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::cell::Cell;

/// Monotonic counter owned by whatever the delayed steps mutate.
#[derive(Debug, Default)]
pub struct Generation {
    current: Cell<u64>,
}

/// Snapshot of a [`Generation`] taken when a step was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding ticket and return a fresh one.
    pub fn advance(&self) -> Ticket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Ticket(next)
    }

    /// Ticket for the current generation without invalidating others.
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        Ticket(self.current.get())
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.0
    }
}
