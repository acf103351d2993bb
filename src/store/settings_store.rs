//! Settings persistence over a [`PreferencesBackend`].
//!
//! Every mutation is written through immediately; there is no flush step.

use std::path::Path;

use super::backend::PreferencesBackend;
use super::pinned_apps::{DisplayNameFn, PinnedAppLoader};
use crate::model::constants::*;
use crate::model::{app_display_name, Settings};

/// In-memory copy of the settings plus the backend they persist to.
pub struct SettingsStore<B: PreferencesBackend> {
    backend: B,
    settings: Settings,
}

impl<B: PreferencesBackend> SettingsStore<B> {
    /// Open the store, seeding the app list on first run from the stock
    /// apps (or the pinned-apps file when none are installed).
    pub fn open(backend: B) -> Self {
        Self::open_with_seed(backend, default_seed)
    }

    /// Open the store; `seed` provides the app list when none is stored.
    pub fn open_with_seed<F>(backend: B, seed: F) -> Self
    where
        F: FnOnce() -> Vec<String>,
    {
        let settings = read_settings(&backend);
        let mut store = Self { backend, settings };

        if store.settings.selected_app_paths.is_empty() {
            store.settings.selected_app_paths = seed();
            store.settings.validate();
            tracing::info!(
                count = store.settings.selected_app_paths.len(),
                "seeded selected apps"
            );
            store.save_selected_apps();
        }
        store
    }

    /// Re-read everything from the backend.
    pub fn reload(&mut self) -> &Settings {
        self.settings = read_settings(&self.backend);
        &self.settings
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn set_show_names(&mut self, show: bool) {
        self.settings.show_names = show;
        self.backend.set_bool(PREF_SHOW_NAMES, show);
    }

    /// Store a new icon size; returns the value actually kept after clamping.
    pub fn set_icon_size(&mut self, size: f64) -> f64 {
        self.settings.icon_size = size;
        self.settings.validate();
        self.backend.set_f64(PREF_ICON_SIZE, self.settings.icon_size);
        self.settings.icon_size
    }

    /// Store a new ring radius; returns the value actually kept after clamping.
    pub fn set_ring_radius(&mut self, radius: f64) -> f64 {
        self.settings.ring_radius = radius;
        self.settings.validate();
        self.backend.set_f64(PREF_RING_RADIUS, self.settings.ring_radius);
        self.settings.ring_radius
    }

    pub fn set_launch_at_login(&mut self, enabled: bool) {
        self.settings.launch_at_login = enabled;
        self.backend.set_bool(PREF_LAUNCH_AT_LOGIN, enabled);
    }

    pub fn selected_app_paths(&self) -> &[String] {
        &self.settings.selected_app_paths
    }

    pub fn is_app_selected(&self, path: &str) -> bool {
        self.settings.is_app_selected(path)
    }

    /// Add `path` to the ring if absent, remove it if present, and persist.
    ///
    /// Returns true when the path is selected afterwards.
    pub fn toggle_app_selection(&mut self, path: &str) -> bool {
        let selected = self.settings.toggle_app(path);
        tracing::debug!(path, selected, "toggled app selection");
        self.save_selected_apps();
        selected
    }

    fn save_selected_apps(&mut self) {
        self.backend
            .set_string_list(PREF_SELECTED_APP_PATHS, &self.settings.selected_app_paths);
    }
}

/// Build [`Settings`] from whatever the backend holds, defaulting missing keys.
pub fn read_settings<B: PreferencesBackend + ?Sized>(backend: &B) -> Settings {
    let mut settings = Settings {
        show_names: backend
            .get_bool(PREF_SHOW_NAMES)
            .unwrap_or(DEFAULT_SHOW_NAMES),
        icon_size: backend.get_f64(PREF_ICON_SIZE).unwrap_or(DEFAULT_ICON_SIZE),
        ring_radius: backend
            .get_f64(PREF_RING_RADIUS)
            .unwrap_or(DEFAULT_RING_RADIUS),
        launch_at_login: backend
            .get_bool(PREF_LAUNCH_AT_LOGIN)
            .unwrap_or(DEFAULT_LAUNCH_AT_LOGIN),
        selected_app_paths: backend
            .get_string_list(PREF_SELECTED_APP_PATHS)
            .unwrap_or_default(),
    };
    settings.validate();
    settings
}

/// First-run app list: installed stock apps, else the pinned-apps file.
pub fn default_seed() -> Vec<String> {
    default_seed_named(app_display_name)
}

/// [`default_seed`], naming any newly written pinned apps with `display_name`.
pub fn default_seed_named(display_name: DisplayNameFn) -> Vec<String> {
    let stock: Vec<String> = DEFAULT_APP_PATHS
        .iter()
        .filter(|p| Path::new(p).exists())
        .map(|p| p.to_string())
        .collect();
    if !stock.is_empty() {
        return stock;
    }

    match PinnedAppLoader::default_location() {
        Ok(loader) => loader
            .with_display_names(display_name)
            .load()
            .into_iter()
            .map(|app| app.path)
            .collect(),
        Err(err) => {
            tracing::warn!(%err, "no pinned apps fallback");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::{MemoryPreferences, PrefValue};

    fn empty_store() -> SettingsStore<MemoryPreferences> {
        SettingsStore::open_with_seed(MemoryPreferences::new(), Vec::new)
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let store = empty_store();
        assert_eq!(
            *store.settings(),
            Settings {
                selected_app_paths: Vec::new(),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn seed_is_used_and_persisted_on_first_run() {
        let store = SettingsStore::open_with_seed(MemoryPreferences::new(), || {
            vec!["/Applications/Safari.app".to_string()]
        });
        assert_eq!(store.selected_app_paths(), ["/Applications/Safari.app"]);
        assert_eq!(
            store.backend().value(PREF_SELECTED_APP_PATHS),
            Some(&PrefValue::StringList(vec![
                "/Applications/Safari.app".to_string()
            ]))
        );
    }

    #[test]
    fn seed_is_skipped_when_apps_are_stored() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_string_list(PREF_SELECTED_APP_PATHS, &["/x.app".to_string()]);
        let store = SettingsStore::open_with_seed(prefs, || panic!("must not seed"));
        assert_eq!(store.selected_app_paths(), ["/x.app"]);
    }

    #[test]
    fn setters_clamp_and_persist() {
        let mut store = empty_store();
        assert_eq!(store.set_icon_size(4.0), MIN_ICON_SIZE);
        assert_eq!(store.backend().get_f64(PREF_ICON_SIZE), Some(MIN_ICON_SIZE));
        assert_eq!(store.set_ring_radius(190.0), 190.0);
        store.set_show_names(true);
        store.set_launch_at_login(true);

        let reread = read_settings(store.backend());
        assert_eq!(reread.ring_radius, 190.0);
        assert!(reread.show_names);
        assert!(reread.launch_at_login);
    }

    #[test]
    fn reload_picks_up_external_edits() {
        let mut store = empty_store();
        store.backend_mut().set_bool(PREF_SHOW_NAMES, true);
        assert!(!store.settings().show_names);
        assert!(store.reload().show_names);
    }
}
