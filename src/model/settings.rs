//! User settings (pure Rust, no FFI).
//!
//! This module defines the settings structure that is persisted to
//! NSUserDefaults by the settings store.

use super::constants::*;
use crate::clamp;

/// User preferences, read on every overlay show.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Draw the app name under each icon.
    pub show_names: bool,
    /// Icon edge length in points.
    pub icon_size: f64,
    /// Requested ring radius in points.
    pub ring_radius: f64,
    /// Register the app as a login item.
    pub launch_at_login: bool,
    /// Absolute paths of the apps in the ring, in ring order. No duplicates.
    pub selected_app_paths: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_names: DEFAULT_SHOW_NAMES,
            icon_size: DEFAULT_ICON_SIZE,
            ring_radius: DEFAULT_RING_RADIUS,
            launch_at_login: DEFAULT_LAUNCH_AT_LOGIN,
            selected_app_paths: Vec::new(),
        }
    }
}

impl Settings {
    /// Clamps numeric values and drops duplicate paths (first one wins).
    pub fn validate(&mut self) {
        self.icon_size = sanitize(self.icon_size, DEFAULT_ICON_SIZE, MIN_ICON_SIZE, MAX_ICON_SIZE);
        self.ring_radius = sanitize(
            self.ring_radius,
            DEFAULT_RING_RADIUS,
            MIN_RING_RADIUS,
            MAX_RING_RADIUS,
        );
        dedup_in_order(&mut self.selected_app_paths);
    }

    /// Returns true if `path` is in the ring.
    pub fn is_app_selected(&self, path: &str) -> bool {
        self.selected_app_paths.iter().any(|p| p == path)
    }

    /// Removes `path` if present, appends it otherwise.
    ///
    /// Returns true when the path is selected afterwards.
    pub fn toggle_app(&mut self, path: &str) -> bool {
        if let Some(index) = self.selected_app_paths.iter().position(|p| p == path) {
            self.selected_app_paths.remove(index);
            false
        } else {
            self.selected_app_paths.push(path.to_string());
            true
        }
    }
}

fn sanitize(v: f64, default: f64, lo: f64, hi: f64) -> f64 {
    if v.is_finite() {
        clamp(v, lo, hi)
    } else {
        default
    }
}

fn dedup_in_order(paths: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    paths.retain(|p| seen.insert(p.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_keeps_first_duplicate() {
        let mut s = Settings {
            selected_app_paths: vec!["/a".into(), "/b".into(), "/a".into(), "/c".into()],
            ..Settings::default()
        };
        s.validate();
        assert_eq!(s.selected_app_paths, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn validate_replaces_nan() {
        let mut s = Settings {
            icon_size: f64::NAN,
            ring_radius: f64::INFINITY,
            ..Settings::default()
        };
        s.validate();
        assert_eq!(s.icon_size, DEFAULT_ICON_SIZE);
        assert_eq!(s.ring_radius, DEFAULT_RING_RADIUS);
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut s = Settings::default();
        assert!(s.toggle_app("/Applications/Mail.app"));
        assert!(s.is_app_selected("/Applications/Mail.app"));
        assert!(!s.toggle_app("/Applications/Mail.app"));
        assert!(!s.is_app_selected("/Applications/Mail.app"));
    }
}
