use super::*;

#[test]
fn fresh_ticket_is_current() {
    let generation = Generation::new();
    let ticket = generation.advance();
    assert!(generation.is_current(ticket));
}

#[test]
fn advance_makes_older_tickets_stale() {
    let generation = Generation::new();
    let first = generation.advance();
    let second = generation.advance();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn ticket_does_not_invalidate() {
    let generation = Generation::new();
    let scheduled = generation.advance();
    let peek = generation.ticket();
    assert_eq!(scheduled, peek);
    assert!(generation.is_current(scheduled));
}
