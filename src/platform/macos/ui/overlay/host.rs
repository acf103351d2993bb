//! [`OverlayHost`] backed by an AppKit panel.

use super::panel::create_overlay_panel;
use super::view::{create_ring_view, RingScene, RING_SCENE};
use crate::error::{Error, Result};
use crate::launcher::{AppEntry, OverlayHost, OverlayScene};
use crate::layout::{Point, Rect};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, nsstring_id, sel, YES};
use crate::platform::macos::ffi::{mouse_location, rect_to_ns, visible_frame_at};
use crate::model::constants::LAUNCH_DELAY_SECS;

/// A live ring window.
pub struct OverlaySurface {
    panel: id,
    view: id,
}

/// Shows the ring in a TTAOverlayPanel and launches apps through the
/// app host's delayed `launchPath:`.
pub struct MacOverlayHost {
    app_host: id,
}

impl MacOverlayHost {
    /// `app_host` must be a TTAAppHost that lives for the whole run.
    pub fn new(app_host: id) -> Self {
        Self { app_host }
    }
}

impl OverlayHost for MacOverlayHost {
    type Surface = OverlaySurface;

    fn cursor_location(&self) -> Point {
        mouse_location()
    }

    fn screen_bounds(&self, cursor: Point) -> Option<Rect> {
        unsafe { visible_frame_at(cursor) }
    }

    fn present(&mut self, frame: Rect, scene: &OverlayScene) -> Option<OverlaySurface> {
        unsafe {
            let ring = RingScene::load(scene.clone());
            RING_SCENE.with(|cell| *cell.borrow_mut() = Some(ring));

            let view = create_ring_view(frame.size.width, frame.size.height);
            if view == nil {
                RING_SCENE.with(|cell| cell.borrow_mut().take());
                return None;
            }
            let panel = create_overlay_panel(rect_to_ns(frame), view);
            let _: () = msg_send![view, release];
            if panel == nil {
                RING_SCENE.with(|cell| cell.borrow_mut().take());
                return None;
            }

            let _: () = msg_send![panel, makeKeyAndOrderFront: nil];
            let _: () = msg_send![panel, orderFrontRegardless];
            let _: () = msg_send![view, display];
            Some(OverlaySurface { panel, view })
        }
    }

    fn set_highlight(&mut self, surface: &mut OverlaySurface, index: usize) {
        RING_SCENE.with(|cell| {
            if let Some(ring) = cell.borrow_mut().as_mut() {
                ring.scene.highlighted = index;
            }
        });
        unsafe {
            let _: () = msg_send![surface.view, setNeedsDisplay: YES];
        }
    }

    fn dismiss(&mut self, surface: OverlaySurface) {
        unsafe {
            let _: () = msg_send![surface.panel, orderOut: nil];
            let _: () = msg_send![surface.panel, close];
            let _: () = msg_send![surface.panel, release];
        }
        RING_SCENE.with(|cell| cell.borrow_mut().take());
    }

    fn open_application(&mut self, app: &AppEntry) -> Result<()> {
        if !app.path.exists() {
            return Err(Error::Launch {
                path: app.path.clone(),
                reason: "bundle no longer exists".into(),
            });
        }
        unsafe {
            let path = nsstring_id(&app.path.to_string_lossy());
            let _: () = msg_send![
                self.app_host,
                performSelector: sel!(launchPath:),
                withObject: path,
                afterDelay: LAUNCH_DELAY_SECS
            ];
        }
        Ok(())
    }
}
