use crate::Event;

/// A recurring, period-based event replay registration.
///
/// The task accumulates elapsed milliseconds fed in by
/// [`EventManager::tick`](crate::EventManager::tick); whenever the
/// accumulator reaches the period it resets to 0 and the stored event is
/// re-triggered. Tasks fire forever once alive; nothing transitions a live
/// task to dead. A dead task (only obtainable via [`TimedTask::default`])
/// occupies its slot but is skipped entirely.
///
/// # Example
/// ```
/// use tick_events::{Event, TimedTask};
///
/// let mut task = TimedTask::new(100, Event::new("blink"));
/// assert!(task.alive());
/// assert!(!task.advance(40));
/// assert!(!task.advance(40));
/// assert!(task.advance(40)); // 120 ms accumulated -> fires
/// assert_eq!(task.current(), 0); // surplus 20 ms is discarded
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedTask {
    ms: u64,
    current: u64,
    alive: bool,
    event: Event,
}

impl TimedTask {
    /// Creates a live task that replays `event` every `ms` milliseconds.
    ///
    /// The accumulator starts at 0, so the first fire comes one full period
    /// after registration.
    pub fn new(ms: u64, event: Event) -> Self {
        Self {
            ms,
            current: 0,
            alive: true,
            event,
        }
    }

    /// The configured period in milliseconds.
    pub fn period_ms(&self) -> u64 {
        self.ms
    }

    /// Milliseconds accumulated since the last fire (or registration).
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Whether the scheduler evaluates this task at all.
    pub fn alive(&self) -> bool {
        self.alive
    }

    /// The event replayed when the period elapses.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Advances the accumulator by `elapsed_ms` and reports whether the
    /// task is due. On firing the accumulator resets to exactly 0; any
    /// overshoot past the period is discarded rather than carried forward,
    /// so a single oversized delta produces a single fire.
    ///
    /// Dead tasks never advance and never fire.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        if !self.alive {
            return false;
        }
        self.current = self.current.saturating_add(elapsed_ms);
        if self.current >= self.ms {
            self.current = 0;
            return true;
        }
        false
    }
}

impl Default for TimedTask {
    /// An empty, dead slot: period 0, accumulator 0, never fires.
    fn default() -> Self {
        Self {
            ms: 0,
            current: 0,
            alive: false,
            event: Event::default(),
        }
    }
}
