#![cfg_attr(not(feature = "std"), no_std)]

//! # tick-events
//!
//! A minimal, synchronous event-dispatch facility for embedded-style targets.
//!
//! - **Event**: a named occurrence, optionally carrying a string payload.
//! - **Handler**: anything exposing `execute(&Event)`; plain closures work.
//! - **EventManager**: fixed-capacity registry of subscribers and timed
//!   tasks, with synchronous in-order fan-out on trigger.
//!
//! The crate is `no_std + alloc`; the `std` feature (on by default) adds
//! `std::error::Error` for [`EventError`].
//!
//! The host owns the clock: it calls [`EventManager::tick`] from its main
//! loop with a monotonic millisecond counter, and the manager advances every
//! registered interval task by the elapsed delta, re-triggering each task's
//! event when its period elapses. There is no internal thread or timer
//! interrupt; everything runs on the caller's stack.
//!
//! ```
//! use std::sync::Arc;
//! use tick_events::{Event, EventManager};
//!
//! let manager = EventManager::default();
//! manager
//!     .subscribe("door_open", Arc::new(|evt: &Event| {
//!         let _ = evt.extra();
//!     }))
//!     .unwrap();
//!
//! // Fires every registered handler whose label matches, in order.
//! let fired = manager.trigger(&Event::new("door_open")).unwrap();
//! assert_eq!(fired, 1);
//!
//! // Recurring trigger: "blink" every 100 ms, driven by the host loop.
//! manager.trigger_interval(100, Event::new("blink")).unwrap();
//! manager.tick(0);    // first call only establishes the baseline
//! manager.tick(120);  // 120 ms elapsed -> "blink" fires once
//! ```

mod constants;
mod error;
mod event;
mod handler;
mod manager;
mod subscriber;
mod timed;

pub use constants::{
    HandlerRef, DEFAULT_INTERVAL_SLOTS, DEFAULT_SUBSCRIBER_SLOTS, MAX_TRIGGER_DEPTH,
};
pub use error::EventError;
pub use event::Event;
pub use handler::Handler;
pub use manager::EventManager;
pub use subscriber::Subscriber;
pub use timed::TimedTask;

#[cfg(test)]
mod tests;
