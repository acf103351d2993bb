//! Tests for the settings store over the in-memory backend.

use tapthatapp::model::constants::*;
use tapthatapp::store::{read_settings, PrefValue};
use tapthatapp::{MemoryPreferences, PreferencesBackend, Settings, SettingsStore};

fn store_with(paths: &[&str]) -> SettingsStore<MemoryPreferences> {
    let mut prefs = MemoryPreferences::new();
    let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
    prefs.set_string_list(PREF_SELECTED_APP_PATHS, &paths);
    SettingsStore::open_with_seed(prefs, Vec::new)
}

// === Selection ===

#[test]
fn toggle_appends_new_path_at_end() {
    let mut store = store_with(&["/A.app", "/B.app"]);
    assert!(store.toggle_app_selection("/C.app"));
    assert_eq!(store.selected_app_paths(), ["/A.app", "/B.app", "/C.app"]);
}

#[test]
fn toggle_removes_existing_path() {
    let mut store = store_with(&["/A.app", "/B.app", "/C.app"]);
    assert!(!store.toggle_app_selection("/B.app"));
    assert_eq!(store.selected_app_paths(), ["/A.app", "/C.app"]);
}

#[test]
fn toggling_twice_restores_contents() {
    let mut store = store_with(&["/A.app", "/B.app"]);
    store.toggle_app_selection("/Z.app");
    store.toggle_app_selection("/Z.app");
    assert_eq!(store.selected_app_paths(), ["/A.app", "/B.app"]);
}

#[test]
fn toggle_persists_immediately() {
    let mut store = store_with(&["/A.app"]);
    let writes = store.backend().write_count();
    store.toggle_app_selection("/B.app");
    assert_eq!(store.backend().write_count(), writes + 1);
    assert_eq!(
        store.backend().value(PREF_SELECTED_APP_PATHS),
        Some(&PrefValue::StringList(vec![
            "/A.app".to_string(),
            "/B.app".to_string()
        ]))
    );
}

#[test]
fn is_app_selected_follows_toggles() {
    let mut store = store_with(&[]);
    assert!(!store.is_app_selected("/A.app"));
    store.toggle_app_selection("/A.app");
    assert!(store.is_app_selected("/A.app"));
}

#[test]
fn stored_duplicates_are_dropped_on_read() {
    let store = store_with(&["/A.app", "/B.app", "/A.app"]);
    assert_eq!(store.selected_app_paths(), ["/A.app", "/B.app"]);
}

// === Numeric values ===

#[test]
fn out_of_range_radius_is_clamped_on_read() {
    let mut prefs = MemoryPreferences::new();
    prefs.insert(PREF_RING_RADIUS, PrefValue::Number(5000.0));
    assert_eq!(read_settings(&prefs).ring_radius, MAX_RING_RADIUS);
}

#[test]
fn wrongly_typed_value_falls_back_to_default() {
    let mut prefs = MemoryPreferences::new();
    prefs.insert(PREF_ICON_SIZE, PrefValue::Bool(true));
    assert_eq!(read_settings(&prefs).icon_size, DEFAULT_ICON_SIZE);
}

#[test]
fn empty_backend_reads_defaults() {
    assert_eq!(read_settings(&MemoryPreferences::new()), Settings::default());
}

#[test]
fn icon_size_presets_stay_in_range() {
    for (_, size) in ICON_SIZE_PRESETS {
        assert!((MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&size));
    }
}
