//! Example: synchronous fan-out to multiple subscribers of one label
use std::sync::Arc;

use tick_events::{Event, EventManager, Handler};

struct Siren;

impl Handler for Siren {
    fn execute(&self, evt: &Event) {
        println!("siren on: {}", evt.extra().unwrap_or("unknown door"));
    }
}

fn main() {
    let manager = EventManager::default();

    // Struct handler and closure handler under the same label; both fire,
    // in registration order.
    manager.subscribe("door_open", Arc::new(Siren)).unwrap();
    manager
        .subscribe(
            "door_open",
            Arc::new(|_: &Event| println!("logging door event")),
        )
        .unwrap();

    let fired = manager
        .trigger(&Event::with_extra("door_open", "garage"))
        .unwrap();
    println!("{fired} handlers ran");

    // Unmatched labels are a silent no-op, not an error.
    let fired = manager.trigger(&Event::new("door_closed")).unwrap();
    assert_eq!(fired, 0);
}
