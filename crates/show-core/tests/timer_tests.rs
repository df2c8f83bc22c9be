use show_core::TimerSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Key {
    A,
    B,
}

#[test]
fn schedule_replaces_existing_deadline() {
    let mut t = TimerSet::new();
    t.schedule(Key::A, 100.0);
    t.schedule(Key::A, 300.0);
    assert_eq!(t.deadline(Key::A), Some(300.0));
    assert!(t.pop_due(200.0).is_none());
    assert_eq!(t.pop_due(300.0), Some((Key::A, 300.0)));
    assert!(t.is_empty());
}

#[test]
fn pop_due_returns_earliest_first() {
    let mut t = TimerSet::new();
    t.schedule(Key::B, 50.0);
    t.schedule(Key::A, 20.0);
    assert_eq!(t.next_deadline(), Some(20.0));
    assert_eq!(t.pop_due(100.0), Some((Key::A, 20.0)));
    assert_eq!(t.pop_due(100.0), Some((Key::B, 50.0)));
    assert_eq!(t.pop_due(100.0), None);
}

#[test]
fn cancel_reports_whether_a_timer_was_pending() {
    let mut t = TimerSet::new();
    assert!(!t.cancel(Key::A));
    t.schedule(Key::A, 10.0);
    assert!(t.is_pending(Key::A));
    assert!(t.cancel(Key::A));
    assert!(t.pop_due(1_000.0).is_none());
}
