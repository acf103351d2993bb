//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! user settings, the pinned-app entry and configuration constants.
//!
//! Persistence lives in `store` (and `platform::macos::storage` for
//! NSUserDefaults).

pub mod constants;
pub mod pinned;
pub mod settings;

pub use constants::*;
pub use pinned::{app_display_name, PinnedAppConfig};
pub use settings::Settings;
