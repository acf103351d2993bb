//! The process-wide [`EventBus`].
//!
//! `extern "C"` callbacks (Carbon, ObjC methods, blocks) cannot carry Rust
//! state, so the bus lives in statics: its [`EventPublisher`] in a
//! `OnceLock` for `publish()` from anywhere, the bus itself behind a
//! `Mutex` for the main-thread dispatcher.
//!
//! ```ignore
//! events::init_event_bus();
//! events::publish(AppEvent::HotkeyPressed);
//! while let Some(event) = events::take_event() {
//!     // dispatch...
//! }
//! ```

use std::sync::{Mutex, MutexGuard, OnceLock};

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

static BUS: OnceLock<Mutex<EventBus>> = OnceLock::new();

/// Create the global bus.
///
/// Returns false (and changes nothing) if it already exists.
pub fn init_event_bus() -> bool {
    let bus = EventBus::new();
    if PUBLISHER.set(bus.publisher()).is_err() {
        return false;
    }
    BUS.set(Mutex::new(bus)).is_ok()
}

/// Queue an event on the global bus.
///
/// Events published before [`init_event_bus`] are dropped with a warning.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => tracing::warn!(?event, "event bus not initialized, event dropped"),
    }
}

fn lock_bus() -> Option<MutexGuard<'static, EventBus>> {
    let bus = BUS.get()?;
    Some(match bus.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    })
}

/// Next pending event, if any.
///
/// The dispatcher takes one at a time so it can stop mid-queue.
pub fn take_event() -> Option<AppEvent> {
    lock_bus()?.try_recv()
}

/// Every pending event, oldest first.
pub fn drain_events() -> Vec<AppEvent> {
    lock_bus().map(|bus| bus.drain()).unwrap_or_default()
}
