use super::*;

#[test]
fn tickets_increase_monotonically() {
    let mut seq = RenderSequencer::new();
    let a = seq.issue();
    let b = seq.issue();
    let c = seq.issue();
    assert!(a < b && b < c);
    assert!(seq.is_current(c));
    assert_eq!(c.value(), 3);
}

#[test]
fn only_latest_ticket_is_current() {
    let mut seq = RenderSequencer::new();
    let first = seq.issue();
    assert!(seq.is_current(first));
    let second = seq.issue();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn stale_result_arriving_late_is_discarded() {
    let mut seq = RenderSequencer::new();
    let slow = seq.issue();
    let fast = seq.issue();

    // The newer render finishes first and is applied.
    assert_eq!(seq.accept(fast, "new"), Some("new"));
    // The older render finishes afterwards and must not overwrite it.
    assert_eq!(seq.accept(slow, "old"), None);
}

#[test]
fn accept_after_later_issue_rejects_everything_prior() {
    let mut seq = RenderSequencer::new();
    let tickets: Vec<_> = (0..5).map(|_| seq.issue()).collect();
    let accepted: Vec<_> = tickets.iter().filter_map(|t| seq.accept(*t, t.value())).collect();
    assert_eq!(accepted, vec![5]);
}
