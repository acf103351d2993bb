//! Settings window, its live ring preview and the actions its controls send.

pub mod actions;
pub mod preview;
pub mod window;

pub use preview::refresh_preview;
pub use window::{open_settings_window, refresh_app_popups};
