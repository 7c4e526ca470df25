extern crate alloc;
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::cell::{Cell, RefCell};

use crate::{
    Event, EventError, HandlerRef, Subscriber, TimedTask, DEFAULT_INTERVAL_SLOTS,
    DEFAULT_SUBSCRIBER_SLOTS, MAX_TRIGGER_DEPTH,
};

/// Fixed-capacity event registry and dispatcher with interval scheduling.
///
/// Holds a bounded list of [`Subscriber`]s and a bounded list of
/// [`TimedTask`]s. `trigger` performs a linear scan over the subscribers and
/// invokes every matching handler synchronously, in registration order;
/// `tick` advances the timed tasks by wall-clock delta and forwards due
/// events back through `trigger`.
///
/// # Implementation Notes
/// - Single-threaded by design: state lives in `RefCell`/`Cell`, all
///   methods take `&self`, and handlers run on the caller's stack.
/// - Handlers may re-trigger events from inside `execute`; the matching
///   handler set is snapshotted before invocation so reentrant calls do not
///   hold a borrow, and nesting is bounded by
///   [`MAX_TRIGGER_DEPTH`](crate::MAX_TRIGGER_DEPTH).
/// - Capacity overflow is reported, never silently dropped.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tick_events::{Event, EventManager};
///
/// let manager = EventManager::new(4, 2);
/// manager.subscribe("alarm", Arc::new(|_: &Event| {})).unwrap();
/// assert_eq!(manager.subscriber_count("alarm"), 1);
/// ```
pub struct EventManager {
    /// Subscriber slots available, fixed at construction.
    max_subscribers: usize,
    /// Interval-task slots available, fixed at construction.
    max_intervals: usize,
    /// Registered subscribers, in registration order.
    subscribers: RefCell<Vec<Subscriber>>,
    /// Registered timed tasks, in registration order. Dead slots are inert.
    intervals: RefCell<Vec<TimedTask>>,
    /// Millisecond reading of the previous `tick`; `None` until the
    /// baseline-establishing first call.
    previous_ms: Cell<Option<u64>>,
    /// Current trigger nesting depth.
    depth: Cell<usize>,
}

impl EventManager {
    /// Creates a manager with explicit slot counts.
    ///
    /// # Example
    /// ```
    /// use tick_events::EventManager;
    ///
    /// let manager = EventManager::new(8, 3);
    /// assert_eq!(manager.subscriber_capacity(), 8);
    /// assert_eq!(manager.interval_capacity(), 3);
    /// ```
    pub fn new(max_subscribers: usize, max_intervals: usize) -> Self {
        Self {
            max_subscribers,
            max_intervals,
            subscribers: RefCell::new(Vec::with_capacity(max_subscribers)),
            intervals: RefCell::new(Vec::with_capacity(max_intervals)),
            previous_ms: Cell::new(None),
            depth: Cell::new(0),
        }
    }

    /// Registers a handler for every future trigger of `label`.
    ///
    /// The same label may be subscribed any number of times (up to
    /// capacity); all matching handlers fire on trigger, in registration
    /// order. There is no duplicate detection and no unsubscribe.
    ///
    /// # Returns
    /// * `Ok(())` if a slot was available.
    /// * `Err(EventError::SubscribersFull)` when every slot is taken; the
    ///   registration is dropped and existing subscribers are untouched.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use tick_events::{Event, EventError, EventManager};
    ///
    /// let manager = EventManager::new(1, 0);
    /// manager.subscribe("alarm", Arc::new(|_: &Event| {})).unwrap();
    /// let err = manager.subscribe("alarm", Arc::new(|_: &Event| {}));
    /// assert_eq!(err, Err(EventError::SubscribersFull));
    /// ```
    pub fn subscribe(&self, label: &str, handler: HandlerRef) -> Result<(), EventError> {
        self.subscribe_with(Subscriber::new(label, handler))
    }

    /// Registers a pre-built [`Subscriber`].
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use tick_events::{Event, EventManager, Subscriber};
    ///
    /// let manager = EventManager::default();
    /// let sub = Subscriber::new("alarm", Arc::new(|_: &Event| {}));
    /// manager.subscribe_with(sub).unwrap();
    /// assert!(manager.has_subscriber("alarm"));
    /// ```
    pub fn subscribe_with(&self, subscriber: Subscriber) -> Result<(), EventError> {
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.len() >= self.max_subscribers {
            log::warn!(
                "subscriber slots exhausted ({}); dropping subscription to {:?}",
                self.max_subscribers,
                subscriber.label()
            );
            return Err(EventError::SubscribersFull);
        }
        subscribers.push(subscriber);
        Ok(())
    }

    /// Triggers an event: scans every subscriber in registration order and
    /// synchronously invokes each whose label matches exactly.
    ///
    /// No match is a normal no-op (`Ok(0)`), not an error. Handlers
    /// registered from inside a handler do not see the trigger already in
    /// flight; they fire from the next one.
    ///
    /// # Returns
    /// * `Ok(n)` - the number of handlers invoked.
    /// * `Err(EventError::TriggerDepthExceeded)` when called reentrantly
    ///   from handlers nested [`MAX_TRIGGER_DEPTH`](crate::MAX_TRIGGER_DEPTH)
    ///   deep; no handlers are invoked for the refused call.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use tick_events::{Event, EventManager};
    ///
    /// let manager = EventManager::default();
    /// manager.subscribe("alarm", Arc::new(|_: &Event| {})).unwrap();
    /// manager.subscribe("alarm", Arc::new(|_: &Event| {})).unwrap();
    ///
    /// assert_eq!(manager.trigger(&Event::new("alarm")).unwrap(), 2);
    /// assert_eq!(manager.trigger(&Event::new("unknown")).unwrap(), 0);
    /// ```
    pub fn trigger(&self, event: &Event) -> Result<usize, EventError> {
        let depth = self.depth.get();
        if depth >= MAX_TRIGGER_DEPTH {
            return Err(EventError::TriggerDepthExceeded);
        }

        // Snapshot matching handlers so the borrow is released before any
        // handler runs; a handler holding a reference to this manager can
        // then subscribe or re-trigger without panicking the RefCell.
        let matched: Vec<HandlerRef> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|sub| sub.label() == event.label())
            .map(|sub| sub.handler().clone())
            .collect();

        self.depth.set(depth + 1);
        for handler in &matched {
            handler.execute(event);
        }
        self.depth.set(depth);

        Ok(matched.len())
    }

    /// Schedules `event` to re-trigger every `period_ms` milliseconds of
    /// accumulated [`tick`](Self::tick) time.
    ///
    /// The task starts alive with its accumulator at 0, so the first fire
    /// comes one full period after registration. Tasks fire forever; there
    /// is no cancellation.
    ///
    /// # Returns
    /// * `Ok(())` if a slot was available.
    /// * `Err(EventError::IntervalsFull)` when every slot is taken.
    ///
    /// # Example
    /// ```
    /// use tick_events::{Event, EventError, EventManager};
    ///
    /// let manager = EventManager::new(0, 1);
    /// manager.trigger_interval(100, Event::new("blink")).unwrap();
    /// let err = manager.trigger_interval(100, Event::new("blink"));
    /// assert_eq!(err, Err(EventError::IntervalsFull));
    /// ```
    pub fn trigger_interval(&self, period_ms: u64, event: Event) -> Result<(), EventError> {
        let mut intervals = self.intervals.borrow_mut();
        if intervals.len() >= self.max_intervals {
            log::warn!(
                "interval slots exhausted ({}); dropping task for {:?}",
                self.max_intervals,
                event.label()
            );
            return Err(EventError::IntervalsFull);
        }
        intervals.push(TimedTask::new(period_ms, event));
        Ok(())
    }

    /// Advances all timed tasks by wall-clock time.
    ///
    /// `now_ms` is the host's monotonic millisecond counter (e.g. millis
    /// since boot); the manager owns no clock of its own. The elapsed delta
    /// is the difference from the previous call. The very first call only
    /// establishes the baseline and advances nothing, so a large initial
    /// counter value cannot fire tasks spuriously.
    ///
    /// Returns the number of tasks that fired.
    ///
    /// # Example
    /// ```
    /// use tick_events::{Event, EventManager};
    ///
    /// let manager = EventManager::default();
    /// manager.trigger_interval(100, Event::new("blink")).unwrap();
    ///
    /// assert_eq!(manager.tick(5_000), 0); // baseline only
    /// assert_eq!(manager.tick(5_090), 0); // 90 ms accumulated
    /// assert_eq!(manager.tick(5_110), 1); // 110 ms -> fires, resets to 0
    /// ```
    pub fn tick(&self, now_ms: u64) -> usize {
        let elapsed = match self.previous_ms.get() {
            Some(previous) => now_ms.wrapping_sub(previous),
            None => 0,
        };
        self.previous_ms.set(Some(now_ms));
        self.advance(elapsed)
    }

    /// Advances all timed tasks by a raw elapsed delta in milliseconds.
    ///
    /// [`tick`](Self::tick) delegates here after computing the delta; hosts
    /// that already track elapsed time per loop iteration can call this
    /// directly. Tasks are evaluated in registration order; each due task
    /// fires at most once per call, resets its accumulator to 0, and any
    /// overshoot past the period is discarded.
    ///
    /// Returns the number of tasks that fired.
    pub fn advance(&self, elapsed_ms: u64) -> usize {
        // Collect due events first so no borrow is held while handlers run.
        let mut due: Vec<Event> = Vec::new();
        {
            let mut intervals = self.intervals.borrow_mut();
            for task in intervals.iter_mut() {
                if task.advance(elapsed_ms) {
                    due.push(task.event().clone());
                }
            }
        }

        let mut fired = 0;
        for event in &due {
            log::trace!("interval task due: {:?}", event.label());
            match self.trigger(event) {
                Ok(_) => fired += 1,
                Err(err) => log::warn!("dropped interval fire for {:?}: {}", event.label(), err),
            }
        }
        fired
    }

    /// Labels that currently have one or more subscribers, first-seen order.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use tick_events::{Event, EventManager};
    ///
    /// let manager = EventManager::default();
    /// manager.subscribe("alarm", Arc::new(|_: &Event| {})).unwrap();
    /// manager.subscribe("blink", Arc::new(|_: &Event| {})).unwrap();
    /// manager.subscribe("alarm", Arc::new(|_: &Event| {})).unwrap();
    ///
    /// assert_eq!(manager.labels(), vec!["alarm".to_string(), "blink".to_string()]);
    /// ```
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for sub in self.subscribers.borrow().iter() {
            if !labels.iter().any(|label| label == sub.label()) {
                labels.push(sub.label().to_string());
            }
        }
        labels
    }

    /// Number of subscribers registered under `label` (0 when none).
    pub fn subscriber_count(&self, label: &str) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|sub| sub.label() == label)
            .count()
    }

    /// Whether `label` has at least one subscriber.
    pub fn has_subscriber(&self, label: &str) -> bool {
        self.subscriber_count(label) > 0
    }

    /// Total subscriber slots, fixed at construction.
    pub fn subscriber_capacity(&self) -> usize {
        self.max_subscribers
    }

    /// Total interval-task slots, fixed at construction.
    pub fn interval_capacity(&self) -> usize {
        self.max_intervals
    }

    /// Number of interval tasks registered so far.
    pub fn interval_count(&self) -> usize {
        self.intervals.borrow().len()
    }
}

impl Default for EventManager {
    /// Creates a manager with the reference sizing: 10 subscriber slots and
    /// 5 interval-task slots.
    ///
    /// # Example
    /// ```
    /// use tick_events::EventManager;
    ///
    /// let manager = EventManager::default();
    /// assert_eq!(manager.subscriber_capacity(), 10);
    /// assert_eq!(manager.interval_capacity(), 5);
    /// ```
    fn default() -> Self {
        Self::new(DEFAULT_SUBSCRIBER_SLOTS, DEFAULT_INTERVAL_SLOTS)
    }
}

impl core::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventManager")
            .field("subscribers", &self.subscribers.borrow().len())
            .field("max_subscribers", &self.max_subscribers)
            .field("intervals", &self.intervals.borrow().len())
            .field("max_intervals", &self.max_intervals)
            .finish()
    }
}
