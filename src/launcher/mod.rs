//! Launcher overlay: resolving apps, keyboard navigation and the
//! show/hide state machine.

pub mod apps;
pub mod controller;
pub mod keymap;

pub use apps::{resolve_apps, AppEntry};
pub use controller::{Launcher, OverlayHost, OverlayScene};
pub use keymap::{action_for_key, cycle_index};
