extern crate alloc;
use alloc::string::{String, ToString};

/// A named occurrence, optionally carrying a string payload.
///
/// Events are plain values: the `label` is the identity key subscribers
/// match on, and `extra` is an opaque payload delivered untouched to every
/// matching handler. Labels are not required to be unique across
/// registrations; every subscriber whose label matches fires.
///
/// # Example
/// ```
/// use tick_events::Event;
///
/// let plain = Event::new("door_open");
/// assert_eq!(plain.label(), "door_open");
/// assert_eq!(plain.extra(), None);
///
/// let tagged = Event::with_extra("door_open", "garage");
/// assert_eq!(tagged.extra(), Some("garage"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    label: String,
    extra: Option<String>,
}

impl Event {
    /// Creates an event with no payload.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            extra: None,
        }
    }

    /// Creates an event carrying an extra payload string.
    pub fn with_extra(label: &str, extra: &str) -> Self {
        Self {
            label: label.to_string(),
            extra: Some(extra.to_string()),
        }
    }

    /// The event name subscribers match on.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The optional payload string.
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }
}
