//! Event system for decoupled inter-module communication.
//!
//! Producers publish events without knowing who handles them; the main
//! loop drains the queue and dispatches.
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//! │   Hotkey    │  │ Overlay view│  │ Status bar  │  │  Settings   │
//! │  (Carbon)   │  │ (keys/click)│  │    menu     │  │   window    │
//! └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘
//!        │ publish()      │                │                │
//!        ▼                ▼                ▼                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     EventBus (mpsc channel)                     │
//! └────────────────────────────────┬────────────────────────────────┘
//!                                  │ drain()
//!                                  ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │   Dispatcher (main loop timer) → Launcher / platform actions    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, take_event};
pub use types::AppEvent;
