use crate::{Event, TimedTask};

/// A fresh task is alive with an empty accumulator
#[test]
fn new_task_starts_at_zero() {
    let task = TimedTask::new(100, Event::new("blink"));
    assert!(task.alive());
    assert_eq!(task.period_ms(), 100);
    assert_eq!(task.current(), 0);
    assert_eq!(task.event().label(), "blink");
}

/// The accumulator grows monotonically between fires and resets on firing
#[test]
fn accumulator_grows_then_resets() {
    let mut task = TimedTask::new(100, Event::new("blink"));

    assert!(!task.advance(40));
    assert_eq!(task.current(), 40);
    assert!(!task.advance(40));
    assert_eq!(task.current(), 80);

    // Third 40 ms delta crosses the 100 ms threshold.
    assert!(task.advance(40));
    assert_eq!(task.current(), 0);
}

/// Overshoot past the period is discarded, not carried into the next cycle
#[test]
fn surplus_is_discarded() {
    let mut task = TimedTask::new(100, Event::new("blink"));

    // One oversized delta fires exactly once.
    assert!(task.advance(250));
    assert_eq!(task.current(), 0);

    // The next cycle restarts from 0, not from the 150 ms surplus.
    assert!(!task.advance(99));
    assert!(task.advance(1));
}

/// A default-constructed task is a dead slot that never advances
#[test]
fn dead_task_never_fires() {
    let mut task = TimedTask::default();
    assert!(!task.alive());
    assert!(!task.advance(1_000_000));
    assert_eq!(task.current(), 0);
}

/// A zero-period task is due on every evaluation
#[test]
fn zero_period_fires_every_advance() {
    let mut task = TimedTask::new(0, Event::new("spin"));
    assert!(task.advance(0));
    assert!(task.advance(0));
}
