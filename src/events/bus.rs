//! The event queue: one consumer (the dispatcher), any number of producers.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::AppEvent;

/// FIFO of [`AppEvent`]s over an mpsc channel.
///
/// The bus keeps a sender of its own, so the channel stays open for as
/// long as the bus lives and `try_recv` only ever reports "empty".
///
/// ```
/// use tapthatapp::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// bus.publisher().publish(AppEvent::ShowLauncher);
/// assert_eq!(bus.drain(), vec![AppEvent::ShowLauncher]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A handle producers keep; clone it freely, send it across threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Oldest pending event, without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        self.receiver.try_recv().ok()
    }

    /// Every pending event, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`EventBus`].
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue `event`. Dropped silently once the bus is gone.
    pub fn publish(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("event bus closed, event dropped");
        }
    }
}
