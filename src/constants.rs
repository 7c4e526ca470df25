extern crate alloc;
use alloc::sync::Arc;

use crate::Handler;

/// Type alias for a shared handler pointer.
///
/// Handlers are reference counted so the registry co-owns them with the
/// caller; there is no "keep it alive yourself" contract.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tick_events::{Event, HandlerRef};
///
/// let handler: HandlerRef = Arc::new(|evt: &Event| {
///     let _ = evt.label();
/// });
/// ```
pub type HandlerRef = Arc<dyn Handler>;

/// Default number of subscriber slots in [`EventManager::default`](crate::EventManager).
pub const DEFAULT_SUBSCRIBER_SLOTS: usize = 10;

/// Default number of interval-task slots in [`EventManager::default`](crate::EventManager).
pub const DEFAULT_INTERVAL_SLOTS: usize = 5;

/// Maximum nesting depth for reentrant triggers.
///
/// A handler may trigger further events from inside its `execute` call;
/// once the nesting reaches this depth, the inner trigger is refused with
/// [`EventError::TriggerDepthExceeded`](crate::EventError) instead of
/// recursing until the stack runs out.
pub const MAX_TRIGGER_DEPTH: usize = 8;
