#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! TapThatApp: a ring of pinned applications around the cursor.
//!
//! Everything outside `platform` is pure Rust with no FFI, so the ring
//! geometry, settings persistence and launcher state machine can be tested
//! as normal integration tests on any host.

pub mod error;
pub mod events;
pub mod launcher;
pub mod layout;
pub mod logging;
pub mod model;
pub mod store;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types most callers need
pub use error::{Error, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use launcher::{AppEntry, Launcher, OverlayHost, OverlayScene};
pub use layout::{Point, Rect, RingLayout, Size};
pub use model::{PinnedAppConfig, Settings};
pub use store::{MemoryPreferences, PinnedAppLoader, PreferencesBackend, SettingsStore};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
