//! Input handling module.
//!
//! - hotkeys.rs: Carbon hotkey registration and handling
//! - observers.rs: System observers (wake, space change, termination)

pub mod hotkeys;
pub mod observers;

pub use hotkeys::{hotkey_event_handler, install_hotkeys, reinstall_hotkeys, uninstall_hotkeys};
pub use observers::{install_termination_observer, install_wakeup_space_observers};
