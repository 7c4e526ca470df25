use crate::Event;

/// A dispatchable capability: anything that can react to an [`Event`].
///
/// Implement this on a struct when the handler carries state of its own;
/// for stateless reactions a plain closure works through the blanket
/// implementation below.
///
/// # Example
/// ```
/// use tick_events::{Event, Handler};
///
/// struct Relay {
///     pin: u8,
/// }
///
/// impl Handler for Relay {
///     fn execute(&self, evt: &Event) {
///         // drive the output pin for this event
///         let _ = (self.pin, evt.label());
///     }
/// }
/// ```
pub trait Handler {
    /// Reacts to a triggered event. Runs synchronously on the caller's
    /// stack; a slow handler delays every handler after it.
    fn execute(&self, event: &Event);
}

/// Any `Fn(&Event)` closure is a handler.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tick_events::{Event, EventManager};
///
/// let manager = EventManager::default();
/// manager
///     .subscribe("sensor", Arc::new(|evt: &Event| {
///         let _ = evt.extra();
///     }))
///     .unwrap();
/// ```
impl<F> Handler for F
where
    F: Fn(&Event),
{
    fn execute(&self, event: &Event) {
        self(event)
    }
}
