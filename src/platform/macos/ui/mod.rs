//! AppKit user interface: the ring overlay, the status item and the
//! settings window.

pub mod overlay;
pub mod settings;
pub mod status_bar;

pub use settings::open_settings_window;
pub use status_bar::install_status_bar;
