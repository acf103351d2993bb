//! Application wiring: the TTAAppHost object and launcher state.

pub mod host;
pub mod state;

pub use host::{create_app_host, start_event_pump};
pub use state::{install_launcher, with_launcher, MacLauncher};
