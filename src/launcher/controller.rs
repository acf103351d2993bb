//! Launcher overlay lifecycle.
//!
//! The controller is an explicit two-state machine (hidden / shown) that
//! owns the settings store and talks to the windowing system only through
//! [`OverlayHost`]. The macOS implementation lives in
//! `platform::macos::ui::overlay`; tests use a recording fake.

use super::apps::{resolve_apps, AppEntry};
use super::keymap::cycle_index;
use crate::error::Result;
use crate::events::AppEvent;
use crate::layout::{Point, Rect, RingLayout};
use crate::model::constants::{LABEL_HEIGHT, RING_MARGIN};
use crate::model::Settings;
use crate::store::{PreferencesBackend, SettingsStore};

/// Windowing operations the launcher needs.
pub trait OverlayHost {
    /// Handle to a live overlay surface.
    type Surface;

    /// Cursor position in screen coordinates.
    fn cursor_location(&self) -> Point;

    /// Bounds of the screen containing `cursor`, if known.
    fn screen_bounds(&self, cursor: Point) -> Option<Rect>;

    /// Create and display a surface with `frame` (screen coordinates)
    /// showing `scene`. `None` if the surface could not be created.
    fn present(&mut self, frame: Rect, scene: &OverlayScene) -> Option<Self::Surface>;

    /// Redraw with icon `index` highlighted.
    fn set_highlight(&mut self, surface: &mut Self::Surface, index: usize);

    /// Close and release the surface.
    fn dismiss(&mut self, surface: Self::Surface);

    /// Ask the OS to open `app`.
    fn open_application(&mut self, app: &AppEntry) -> Result<()>;
}

/// Everything needed to draw one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScene {
    pub apps: Vec<AppEntry>,
    pub layout: RingLayout,
    pub show_names: bool,
    pub highlighted: usize,
}

impl OverlayScene {
    /// Resolve the selected apps and lay them out.
    pub fn build(settings: &Settings) -> Self {
        let apps = resolve_apps(&settings.selected_app_paths);
        let mut layout = RingLayout::new(
            apps.len(),
            settings.icon_size,
            settings.ring_radius,
            RING_MARGIN,
        );
        if settings.show_names {
            layout = layout.with_labels(LABEL_HEIGHT);
        }
        Self {
            apps,
            layout,
            show_names: settings.show_names,
            highlighted: 0,
        }
    }

    pub fn highlighted_app(&self) -> Option<&AppEntry> {
        self.apps.get(self.highlighted)
    }
}

struct ActiveOverlay<S> {
    surface: S,
    scene: OverlayScene,
    frame: Rect,
}

/// The launcher: settings, host and (when shown) the live overlay.
pub struct Launcher<H: OverlayHost, B: PreferencesBackend> {
    host: H,
    store: SettingsStore<B>,
    active: Option<ActiveOverlay<H::Surface>>,
}

impl<H: OverlayHost, B: PreferencesBackend> Launcher<H, B> {
    pub fn new(host: H, store: SettingsStore<B>) -> Self {
        Self {
            host,
            store,
            active: None,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.active.is_some()
    }

    /// Scene of the live overlay.
    pub fn scene(&self) -> Option<&OverlayScene> {
        self.active.as_ref().map(|a| &a.scene)
    }

    /// Screen frame of the live overlay.
    pub fn frame(&self) -> Option<Rect> {
        self.active.as_ref().map(|a| a.frame)
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.scene.highlighted)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &SettingsStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SettingsStore<B> {
        &mut self.store
    }

    /// Show the ring around the cursor. No-op if already shown.
    ///
    /// Returns true if a new overlay was created.
    pub fn show(&mut self) -> bool {
        if self.active.is_some() {
            tracing::trace!("overlay already shown");
            return false;
        }

        let settings = self.store.reload().clone();
        let scene = OverlayScene::build(&settings);

        let cursor = self.host.cursor_location();
        let mut frame = Rect::centered_at(cursor, scene.layout.extent());
        if let Some(bounds) = self.host.screen_bounds(cursor) {
            frame = frame.clamped_into(&bounds);
        }

        match self.host.present(frame, &scene) {
            Some(surface) => {
                tracing::debug!(
                    apps = scene.apps.len(),
                    radius = scene.layout.radius(),
                    "overlay shown"
                );
                self.active = Some(ActiveOverlay {
                    surface,
                    scene,
                    frame,
                });
                true
            }
            None => {
                tracing::warn!("overlay surface could not be created");
                false
            }
        }
    }

    /// Dismiss the ring. Always leaves the launcher hidden.
    ///
    /// Returns true if an overlay was actually dismissed.
    pub fn hide(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                self.host.dismiss(active.surface);
                tracing::debug!("overlay hidden");
                true
            }
            None => false,
        }
    }

    pub fn hotkey_pressed(&mut self) -> bool {
        self.show()
    }

    /// Hide on key-up, but only when shown (release events can be spurious).
    pub fn hotkey_released(&mut self) -> bool {
        if !self.is_shown() {
            return false;
        }
        self.hide()
    }

    /// Move the highlight by `step`, wrapping. Returns the new index.
    pub fn move_highlight(&mut self, step: isize) -> Option<usize> {
        let active = self.active.as_mut()?;
        let index = cycle_index(active.scene.highlighted, step, active.scene.apps.len())?;
        active.scene.highlighted = index;
        self.host.set_highlight(&mut active.surface, index);
        Some(index)
    }

    /// Highlight icon `index` if it exists.
    pub fn set_highlight(&mut self, index: usize) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if index >= active.scene.apps.len() {
            return false;
        }
        if active.scene.highlighted != index {
            active.scene.highlighted = index;
            self.host.set_highlight(&mut active.surface, index);
        }
        true
    }

    /// Launch the highlighted app.
    pub fn confirm(&mut self) -> bool {
        match self.highlighted() {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    /// Launch icon `index` and hide the ring.
    ///
    /// Returns true if the launch was handed to the OS. Failures are logged,
    /// never retried.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(app) = self.scene().and_then(|s| s.apps.get(index)).cloned() else {
            return false;
        };

        let result = self.host.open_application(&app);
        self.hide();

        match result {
            Ok(()) => {
                tracing::info!(app = %app.name, "launching");
                true
            }
            Err(err) => {
                tracing::warn!(app = %app.name, %err, "launch failed");
                false
            }
        }
    }

    /// Apply a launcher event. Returns false for events that belong to the
    /// platform dispatcher.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::HotkeyPressed => {
                self.hotkey_pressed();
            }
            AppEvent::HotkeyReleased => {
                self.hotkey_released();
            }
            AppEvent::ShowLauncher => {
                self.show();
            }
            AppEvent::HideLauncher => {
                self.hide();
            }
            AppEvent::MoveHighlight(step) => {
                self.move_highlight(*step);
            }
            AppEvent::HighlightIcon(index) => {
                self.set_highlight(*index);
            }
            AppEvent::ConfirmHighlight => {
                self.confirm();
            }
            AppEvent::ActivateIcon(index) => {
                self.activate(*index);
            }
            AppEvent::OpenSettings
            | AppEvent::SettingsChanged
            | AppEvent::RequestQuit
            | AppEvent::ReinstallHotkeys => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::layout::Size;
    use crate::model::constants::PREF_SELECTED_APP_PATHS;
    use crate::store::MemoryPreferences;
    use std::path::PathBuf;

    #[derive(Default)]
    struct FakeHost {
        cursor: Point,
        screen: Option<Rect>,
        refuse_surface: bool,
        fail_open: bool,
        presented: Vec<Rect>,
        live: Option<usize>,
        highlights: Vec<usize>,
        opened: Vec<PathBuf>,
    }

    impl OverlayHost for FakeHost {
        type Surface = usize;

        fn cursor_location(&self) -> Point {
            self.cursor
        }

        fn screen_bounds(&self, _cursor: Point) -> Option<Rect> {
            self.screen
        }

        fn present(&mut self, frame: Rect, _scene: &OverlayScene) -> Option<usize> {
            if self.refuse_surface {
                return None;
            }
            self.presented.push(frame);
            self.live = Some(self.presented.len());
            self.live
        }

        fn set_highlight(&mut self, _surface: &mut usize, index: usize) {
            self.highlights.push(index);
        }

        fn dismiss(&mut self, surface: usize) {
            assert_eq!(self.live, Some(surface));
            self.live = None;
        }

        fn open_application(&mut self, app: &AppEntry) -> Result<()> {
            self.opened.push(app.path.clone());
            if self.fail_open {
                return Err(Error::Launch {
                    path: app.path.clone(),
                    reason: "refused".into(),
                });
            }
            Ok(())
        }
    }

    fn launcher_with_apps(
        names: &[&str],
    ) -> (tempfile::TempDir, Launcher<FakeHost, MemoryPreferences>) {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<String> = names
            .iter()
            .map(|n| {
                let p = dir.path().join(format!("{n}.app"));
                std::fs::create_dir(&p).unwrap();
                p.to_string_lossy().into_owned()
            })
            .collect();
        let mut prefs = MemoryPreferences::new();
        prefs.set_string_list(PREF_SELECTED_APP_PATHS, &paths);
        let store = SettingsStore::open_with_seed(prefs, Vec::new);
        (dir, Launcher::new(FakeHost::default(), store))
    }

    #[test]
    fn arrows_wrap_and_redraw() {
        let (_dir, mut launcher) = launcher_with_apps(&["A", "B", "C"]);
        assert_eq!(launcher.move_highlight(1), None);

        launcher.show();
        assert_eq!(launcher.move_highlight(-1), Some(2));
        assert_eq!(launcher.move_highlight(1), Some(0));
        assert_eq!(launcher.host().highlights, [2, 0]);
    }

    #[test]
    fn hover_ignores_out_of_range_and_repeats() {
        let (_dir, mut launcher) = launcher_with_apps(&["A", "B"]);
        launcher.show();
        assert!(launcher.set_highlight(1));
        assert!(launcher.set_highlight(1));
        assert!(!launcher.set_highlight(5));
        assert_eq!(launcher.host().highlights, [1]);
        assert_eq!(launcher.highlighted(), Some(1));
    }

    #[test]
    fn confirm_opens_highlighted_and_hides() {
        let (_dir, mut launcher) = launcher_with_apps(&["A", "B"]);
        launcher.show();
        launcher.move_highlight(1);
        assert!(launcher.confirm());

        let opened = &launcher.host().opened;
        assert_eq!(opened.len(), 1);
        assert!(opened[0].ends_with("B.app"));
        assert!(!launcher.is_shown());
    }

    #[test]
    fn failed_launch_still_hides() {
        let (_dir, mut launcher) = launcher_with_apps(&["A"]);
        launcher.host_mut().fail_open = true;
        launcher.show();
        assert!(!launcher.activate(0));
        assert!(!launcher.is_shown());
    }

    #[test]
    fn refused_surface_leaves_launcher_hidden() {
        let (_dir, mut launcher) = launcher_with_apps(&["A"]);
        launcher.host_mut().refuse_surface = true;
        assert!(!launcher.show());
        assert!(!launcher.is_shown());
    }

    #[test]
    fn frame_is_centred_on_cursor_then_kept_on_screen() {
        let (_dir, mut launcher) = launcher_with_apps(&["A", "B", "C", "D"]);
        launcher.host_mut().cursor = Point::new(500.0, 500.0);
        launcher.host_mut().screen = Some(Rect::new(
            Point::new(0.0, 0.0),
            Size::new(1000.0, 800.0),
        ));
        launcher.show();
        let frame = launcher.frame().unwrap();
        assert_eq!(frame.center(), Point::new(500.0, 500.0));
        assert_eq!(frame.size, Size::new(400.0, 400.0));
        launcher.hide();

        launcher.host_mut().cursor = Point::new(10.0, 790.0);
        launcher.show();
        let frame = launcher.frame().unwrap();
        assert_eq!(frame.min_x(), 0.0);
        assert_eq!(frame.max_y(), 800.0);
    }

    #[test]
    fn dispatcher_events_are_left_alone() {
        let (_dir, mut launcher) = launcher_with_apps(&["A"]);
        assert!(!launcher.handle(&AppEvent::OpenSettings));
        assert!(launcher.handle(&AppEvent::ShowLauncher));
        assert!(launcher.is_shown());
        assert!(launcher.handle(&AppEvent::HideLauncher));
        assert!(!launcher.is_shown());
    }
}
