//! Tests for the launcher state machine with a recording host.

use std::path::PathBuf;

use tapthatapp::model::constants::PREF_SELECTED_APP_PATHS;
use tapthatapp::{
    AppEntry, AppEvent, Launcher, MemoryPreferences, OverlayHost, OverlayScene, Point,
    PreferencesBackend, Rect, Result, SettingsStore,
};

#[derive(Default)]
struct RecordingHost {
    presented: Vec<OverlayScene>,
    dismissed: usize,
    opened: Vec<PathBuf>,
}

impl OverlayHost for RecordingHost {
    type Surface = ();

    fn cursor_location(&self) -> Point {
        Point::new(640.0, 400.0)
    }

    fn screen_bounds(&self, _cursor: Point) -> Option<Rect> {
        None
    }

    fn present(&mut self, _frame: Rect, scene: &OverlayScene) -> Option<()> {
        self.presented.push(scene.clone());
        Some(())
    }

    fn set_highlight(&mut self, _surface: &mut (), _index: usize) {}

    fn dismiss(&mut self, _surface: ()) {
        self.dismissed += 1;
    }

    fn open_application(&mut self, app: &AppEntry) -> Result<()> {
        self.opened.push(app.path.clone());
        Ok(())
    }
}

struct Fixture {
    _dir: tempfile::TempDir,
    paths: Vec<String>,
    launcher: Launcher<RecordingHost, MemoryPreferences>,
}

/// Launcher whose selection is `names`; names starting with `-` are not
/// created on disk.
fn fixture(names: &[&str]) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<String> = names
        .iter()
        .map(|n| {
            let missing = n.starts_with('-');
            let path = dir.path().join(format!("{}.app", n.trim_start_matches('-')));
            if !missing {
                std::fs::create_dir(&path).unwrap();
            }
            path.to_string_lossy().into_owned()
        })
        .collect();

    let mut prefs = MemoryPreferences::new();
    prefs.set_string_list(PREF_SELECTED_APP_PATHS, &paths);
    let store = SettingsStore::open_with_seed(prefs, Vec::new);
    Fixture {
        _dir: dir,
        paths,
        launcher: Launcher::new(RecordingHost::default(), store),
    }
}

// === Show / hide ===

#[test]
fn show_twice_creates_one_overlay() {
    let mut f = fixture(&["Safari", "Mail"]);
    assert!(f.launcher.show());
    assert!(!f.launcher.show());
    assert_eq!(f.launcher.host().presented.len(), 1);
}

#[test]
fn hide_while_hidden_is_noop() {
    let mut f = fixture(&["Safari"]);
    assert!(!f.launcher.hide());
    assert_eq!(f.launcher.host().dismissed, 0);
    assert!(!f.launcher.is_shown());
}

#[test]
fn show_then_hide_dismisses_once() {
    let mut f = fixture(&["Safari"]);
    f.launcher.show();
    assert!(f.launcher.hide());
    assert!(!f.launcher.hide());
    assert_eq!(f.launcher.host().dismissed, 1);
}

#[test]
fn empty_selection_still_shows_empty_ring() {
    let mut f = fixture(&[]);
    assert!(f.launcher.show());
    assert!(f.launcher.scene().unwrap().apps.is_empty());
}

// === Hotkey ===

#[test]
fn press_shows_and_release_hides() {
    let mut f = fixture(&["Safari"]);
    f.launcher.handle(&AppEvent::HotkeyPressed);
    assert!(f.launcher.is_shown());
    f.launcher.handle(&AppEvent::HotkeyReleased);
    assert!(!f.launcher.is_shown());
}

#[test]
fn release_without_press_does_nothing() {
    let mut f = fixture(&["Safari"]);
    assert!(!f.launcher.hotkey_released());
    assert_eq!(f.launcher.host().dismissed, 0);
}

#[test]
fn auto_repeat_presses_do_not_stack() {
    let mut f = fixture(&["Safari"]);
    for _ in 0..5 {
        f.launcher.handle(&AppEvent::HotkeyPressed);
    }
    assert_eq!(f.launcher.host().presented.len(), 1);
}

// === Resolution ===

#[test]
fn missing_app_is_left_out_of_ring_but_kept_in_settings() {
    let mut f = fixture(&["Safari", "-Deleted", "Mail"]);
    f.launcher.show();

    let names: Vec<_> = f
        .launcher
        .scene()
        .unwrap()
        .apps
        .iter()
        .map(|a| a.name.clone())
        .collect();
    assert_eq!(names, ["Safari", "Mail"]);
    assert_eq!(f.launcher.store().selected_app_paths(), &f.paths[..]);
}

#[test]
fn settings_changes_apply_on_next_show() {
    let mut f = fixture(&["Safari"]);
    f.launcher.show();
    f.launcher.hide();

    f.launcher.store_mut().set_show_names(true);
    f.launcher.store_mut().set_ring_radius(220.0);
    f.launcher.show();

    let scene = f.launcher.scene().unwrap();
    assert!(scene.show_names);
    assert_eq!(scene.layout.radius(), 220.0);
}

// === Activation ===

#[test]
fn clicking_icon_opens_that_app() {
    let mut f = fixture(&["Safari", "Mail", "Notes"]);
    f.launcher.show();
    f.launcher.handle(&AppEvent::ActivateIcon(2));
    assert_eq!(f.launcher.host().opened, [PathBuf::from(&f.paths[2])]);
    assert!(!f.launcher.is_shown());
}

#[test]
fn activation_out_of_range_is_ignored() {
    let mut f = fixture(&["Safari"]);
    f.launcher.show();
    assert!(!f.launcher.activate(3));
    assert!(f.launcher.host().opened.is_empty());
    assert!(f.launcher.is_shown());
}

#[test]
fn activation_while_hidden_is_ignored() {
    let mut f = fixture(&["Safari"]);
    assert!(!f.launcher.activate(0));
    assert!(f.launcher.host().opened.is_empty());
}

#[test]
fn keyboard_navigation_then_return_opens_previous_icon() {
    let mut f = fixture(&["Safari", "Mail", "Notes"]);
    f.launcher.show();
    f.launcher.handle(&AppEvent::MoveHighlight(-1));
    f.launcher.handle(&AppEvent::ConfirmHighlight);
    assert_eq!(f.launcher.host().opened, [PathBuf::from(&f.paths[2])]);
}
