//! TTARingView: the NSView subclass that draws the ring.
//!
//! The view is flipped so its coordinate space matches [`RingLayout`]
//! (y-down, origin top-left). It holds no state of its own: the scene it
//! draws lives in [`RING_SCENE`] on the main thread, and input is turned
//! into bus events for the launcher to act on.
//!
//! [`RingLayout`]: crate::layout::RingLayout

use std::cell::RefCell;

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use objc2::sel;

use super::drawing::{draw_highlight, draw_icon, draw_label, icon_draw_rect};
use crate::events::{publish, AppEvent};
use crate::launcher::{action_for_key, OverlayScene};
use crate::layout::Point;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSPoint, NSRect, NSSize, YES};
use crate::platform::macos::workspace::icon_for_path;

/// Scene currently on screen plus the icons loaded for it.
pub struct RingScene {
    pub scene: OverlayScene,
    icons: Vec<id>,
}

impl RingScene {
    /// Load an icon for every app in `scene`.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn load(scene: OverlayScene) -> Self {
        let size = scene.layout.icon_size();
        let icons = scene
            .apps
            .iter()
            .map(|app| icon_for_path(&app.path, size))
            .collect();
        Self { scene, icons }
    }

    /// Draw every icon, its highlight and (if enabled) its name.
    ///
    /// # Safety
    /// Main thread only, inside `drawRect:` of a flipped view.
    pub unsafe fn draw(&self, with_highlight: bool) {
        let scene = &self.scene;
        for (i, app) in scene.apps.iter().enumerate() {
            let highlighted = with_highlight && i == scene.highlighted;
            let rect = icon_draw_rect(scene.layout.icon_rect(i), highlighted);
            if highlighted {
                draw_highlight(rect);
            }
            draw_icon(self.icons.get(i).copied().unwrap_or(nil), rect);
            if scene.show_names {
                draw_label(&app.name, scene.layout.label_rect(i));
            }
        }
    }
}

impl Drop for RingScene {
    fn drop(&mut self) {
        for &icon in &self.icons {
            if icon != nil {
                unsafe {
                    let _: () = msg_send![icon, release];
                }
            }
        }
    }
}

thread_local! {
    /// The ring being displayed, if any. Main thread only.
    pub static RING_SCENE: RefCell<Option<RingScene>> = const { RefCell::new(None) };
}

/// Register TTARingView (once) and create an instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_ring_view(width: f64, height: f64) -> id {
    let class_name = c"TTARingView";
    let cls = match AnyClass::get(class_name) {
        Some(cls) => cls,
        None => register_ring_view_class(),
    };

    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));
    let view: id = msg_send![view, initWithFrame: frame];

    // Hover tracking: MouseMoved | ActiveAlways | InVisibleRect
    let options: u64 = 0x02 | 0x80 | 0x200;
    let area: id = msg_send![objc2::class!(NSTrackingArea), alloc];
    let area: id = msg_send![
        area,
        initWithRect: frame,
        options: options,
        owner: view,
        userInfo: nil
    ];
    let _: () = msg_send![view, addTrackingArea: area];
    let _: () = msg_send![area, release];

    view
}

unsafe fn register_ring_view_class() -> &'static AnyClass {
    let superclass = objc2::class!(NSView);
    let mut builder = match ClassBuilder::new(c"TTARingView", superclass) {
        Some(builder) => builder,
        None => panic!("TTARingView registered twice"),
    };

    builder.add_method(sel!(isFlipped), yes as unsafe extern "C-unwind" fn(_, _) -> _);
    builder.add_method(
        sel!(acceptsFirstResponder),
        yes as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(acceptsFirstMouse:),
        yes_with_arg as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseDown:),
        mouse_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(mouseMoved:),
        mouse_moved as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(keyDown:),
        key_down as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

unsafe extern "C-unwind" fn yes(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn yes_with_arg(_this: &AnyObject, _cmd: Sel, _event: id) -> Bool {
    YES
}

/// Event location in view coordinates.
unsafe fn location_in_view(this: &AnyObject, event: id) -> Point {
    let in_window: NSPoint = msg_send![event, locationInWindow];
    let p: NSPoint = msg_send![this, convertPoint: in_window, fromView: nil];
    Point::new(p.x, p.y)
}

fn icon_at(p: Point) -> Option<usize> {
    RING_SCENE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|ring| ring.scene.layout.hit_test(p))
    })
}

unsafe extern "C-unwind" fn mouse_down(this: &AnyObject, _cmd: Sel, event: id) {
    match icon_at(location_in_view(this, event)) {
        Some(index) => publish(AppEvent::ActivateIcon(index)),
        None => publish(AppEvent::HideLauncher),
    }
}

unsafe extern "C-unwind" fn mouse_moved(this: &AnyObject, _cmd: Sel, event: id) {
    if let Some(index) = icon_at(location_in_view(this, event)) {
        publish(AppEvent::HighlightIcon(index));
    }
}

unsafe extern "C-unwind" fn key_down(_this: &AnyObject, _cmd: Sel, event: id) {
    let keycode: u16 = msg_send![event, keyCode];
    if let Some(action) = action_for_key(keycode) {
        publish(action);
    }
}

unsafe extern "C-unwind" fn draw_rect(_this: &AnyObject, _cmd: Sel, _rect: NSRect) {
    RING_SCENE.with(|cell| {
        if let Some(ring) = cell.borrow().as_ref() {
            ring.draw(true);
        }
    });
}
