//! Configuration constants and default values.
//!
//! This module contains all application constants including ring defaults,
//! NSUserDefaults keys, preset tables and validation limits.

// === Ring Defaults ===

/// Default icon edge length in points.
pub const DEFAULT_ICON_SIZE: f64 = 48.0;

/// Default ring radius in points.
pub const DEFAULT_RING_RADIUS: f64 = 160.0;

/// App names are hidden by default.
pub const DEFAULT_SHOW_NAMES: bool = false;

/// Launch at login is off by default.
pub const DEFAULT_LAUNCH_AT_LOGIN: bool = false;

/// Gap kept between neighbouring icons and around the ring edge.
pub const RING_MARGIN: f64 = 16.0;

/// Height reserved for an app name under its icon.
pub const LABEL_HEIGHT: f64 = 16.0;

/// Extra edge length of the highlighted icon.
pub const HIGHLIGHT_GROWTH: f64 = 8.0;

/// Delay between a click and the actual launch, in seconds.
pub const LAUNCH_DELAY_SECS: f64 = 0.18;

// === NSUserDefaults Keys ===

/// Key for the show-names toggle.
pub const PREF_SHOW_NAMES: &str = "showNames";

/// Key for the icon size.
pub const PREF_ICON_SIZE: &str = "iconSize";

/// Key for the ring radius.
pub const PREF_RING_RADIUS: &str = "ringRadius";

/// Key for the launch-at-login toggle.
pub const PREF_LAUNCH_AT_LOGIN: &str = "launchAtLogin";

/// Key for the ordered list of selected application paths.
pub const PREF_SELECTED_APP_PATHS: &str = "selectedAppPaths";

// === Validation Limits ===

/// Smallest accepted icon size.
pub const MIN_ICON_SIZE: f64 = 16.0;

/// Largest accepted icon size.
pub const MAX_ICON_SIZE: f64 = 128.0;

/// Smallest accepted ring radius.
pub const MIN_RING_RADIUS: f64 = 40.0;

/// Largest accepted ring radius.
pub const MAX_RING_RADIUS: f64 = 480.0;

// === Presets (settings window) ===

/// Icon size presets as (label, points).
pub const ICON_SIZE_PRESETS: [(&str, f64); 5] = [
    ("XS", 32.0),
    ("S", 40.0),
    ("M", 48.0),
    ("L", 56.0),
    ("XL", 64.0),
];

/// Ring radius presets as (label, points).
pub const RING_RADIUS_PRESETS: [(&str, f64); 5] = [
    ("XS", 100.0),
    ("S", 130.0),
    ("M", 160.0),
    ("L", 190.0),
    ("XL", 220.0),
];

// === Applications ===

/// Directory scanned for installed applications.
pub const APPLICATIONS_DIR: &str = "/Applications";

/// Apps selected on first run, when present.
pub const DEFAULT_APP_PATHS: [&str; 4] = [
    "/Applications/Safari.app",
    "/Applications/Mail.app",
    "/Applications/Notes.app",
    "/Applications/Calendar.app",
];

/// How many discovered apps the pinned-apps fallback keeps.
pub const DEFAULT_PINNED_APP_COUNT: usize = 8;

/// File name of the pinned-apps list inside the data directory.
pub const PINNED_APPS_FILE: &str = "pinned_apps.json";

/// Directory name used for per-user data.
pub const APP_DATA_DIR_NAME: &str = "TapThatApp";

// === Keyboard (macOS virtual key codes) ===

pub const KEY_RETURN: u16 = 36;
pub const KEY_KEYPAD_ENTER: u16 = 76;
pub const KEY_ESCAPE: u16 = 53;
pub const KEY_LEFT: u16 = 123;
pub const KEY_RIGHT: u16 = 124;
pub const KEY_DOWN: u16 = 125;
pub const KEY_UP: u16 = 126;

/// Position of `value` in `presets`, or `None` for a custom value.
pub fn preset_index(presets: &[(&'static str, f64)], value: f64) -> Option<usize> {
    presets
        .iter()
        .position(|(_, v)| (v - value).abs() < f64::EPSILON)
}

/// Returns the preset label for `value`, or `None` for a custom value.
pub fn preset_label(presets: &[(&'static str, f64)], value: f64) -> Option<&'static str> {
    preset_index(presets, value).map(|i| presets[i].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_presets() {
        assert_eq!(preset_label(&ICON_SIZE_PRESETS, DEFAULT_ICON_SIZE), Some("M"));
        assert_eq!(preset_label(&RING_RADIUS_PRESETS, DEFAULT_RING_RADIUS), Some("M"));
    }

    #[test]
    fn preset_index_follows_table_order() {
        assert_eq!(preset_index(&RING_RADIUS_PRESETS, 220.0), Some(4));
        assert_eq!(preset_index(&RING_RADIUS_PRESETS, 221.0), None);
    }

    #[test]
    fn custom_value_has_no_label() {
        assert_eq!(preset_label(&ICON_SIZE_PRESETS, 50.0), None);
    }

    #[test]
    fn presets_fit_validation_limits() {
        for (_, v) in ICON_SIZE_PRESETS {
            assert!((MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&v));
        }
        for (_, v) in RING_RADIUS_PRESETS {
            assert!((MIN_RING_RADIUS..=MAX_RING_RADIUS).contains(&v));
        }
    }
}
