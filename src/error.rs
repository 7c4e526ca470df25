/// Errors that can occur in the event system.
///
/// - `SubscribersFull`: no subscriber slots left.
/// - `IntervalsFull`: no interval-task slots left.
/// - `TriggerDepthExceeded`: reentrant trigger nesting hit the guard.
///
/// Triggering an event nobody subscribed to is a normal no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// Subscribing:
    /// - Trying to register more subscribers than the manager has slots for.
    SubscribersFull,

    /// Scheduling:
    /// - Trying to register more interval tasks than the manager has slots for.
    IntervalsFull,

    /// Triggering:
    /// - A handler chain re-triggered events deeper than
    ///   [`MAX_TRIGGER_DEPTH`](crate::MAX_TRIGGER_DEPTH); the innermost
    ///   trigger was refused and no handlers were invoked for it.
    TriggerDepthExceeded,
}

impl core::fmt::Display for EventError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EventError::SubscribersFull => write!(f, "No subscriber slots remaining"),
            EventError::IntervalsFull => write!(f, "No interval task slots remaining"),
            EventError::TriggerDepthExceeded => write!(f, "Reentrant trigger depth exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EventError {}
