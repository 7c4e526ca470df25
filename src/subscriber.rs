extern crate alloc;
use alloc::{
    string::{String, ToString},
    sync::Arc,
};

use crate::HandlerRef;

/// A registered (event label, handler) pair.
///
/// The subscriber co-owns its handler through an `Arc`, so the registry
/// never dangles even if the caller drops its own copy.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tick_events::{Event, Subscriber};
///
/// let sub = Subscriber::new("alarm", Arc::new(|_: &Event| {}));
/// assert_eq!(sub.label(), "alarm");
/// ```
#[derive(Clone)]
pub struct Subscriber {
    label: String,
    handler: HandlerRef,
}

impl Subscriber {
    /// Creates a subscriber listening for `label`.
    pub fn new(label: &str, handler: HandlerRef) -> Self {
        Self {
            label: label.to_string(),
            handler,
        }
    }

    /// The event label this subscriber matches.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The handler invoked on a matching trigger.
    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }
}

impl core::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscriber")
            .field("label", &self.label)
            .finish()
    }
}

impl PartialEq for Subscriber {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && Arc::ptr_eq(&self.handler, &other.handler)
    }
}
impl Eq for Subscriber {}
