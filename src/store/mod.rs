//! Persistence: settings over a key-value backend, the pinned-apps JSON
//! file, and discovery of installed applications.

pub mod backend;
pub mod discovery;
pub mod pinned_apps;
pub mod settings_store;

pub use backend::{MemoryPreferences, PrefValue, PreferencesBackend};
pub use discovery::{discover_applications, is_app_bundle};
pub use pinned_apps::{DisplayNameFn, PinnedAppLoader};
pub use settings_store::{default_seed, default_seed_named, read_settings, SettingsStore};
