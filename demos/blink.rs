//! Example: recurring "blink" event driven by a simulated millis loop
use std::sync::Arc;

use tick_events::{Event, EventManager};

fn main() {
    let manager = EventManager::default();

    manager
        .subscribe(
            "blink",
            Arc::new(|evt: &Event| {
                // In real firmware this would toggle the LED pin.
                println!("blink {}", evt.extra().unwrap_or("?"));
            }),
        )
        .unwrap();

    manager
        .trigger_interval(100, Event::with_extra("blink", "led1"))
        .unwrap();

    // Stand-in for the board's monotonic millis() counter.
    let mut now_ms = 0u64;
    manager.tick(now_ms); // first call establishes the baseline

    for _ in 0..12 {
        now_ms += 40;
        let fired = manager.tick(now_ms);
        if fired > 0 {
            println!("  (fired at t={now_ms} ms)");
        }
    }
}
