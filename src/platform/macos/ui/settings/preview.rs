//! Live ring preview inside the settings window.
//!
//! TTARingPreview draws with the same code as the ring overlay, from its
//! own scene slot, scaled down through the view's bounds so any radius
//! fits the box.

use std::cell::RefCell;

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use objc2::sel;

use crate::launcher::OverlayScene;
use crate::layout::Size;
use crate::platform::macos::app::with_launcher;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, NSRect, ObjectExt, YES,
};
use crate::platform::macos::ffi::rect_to_ns;
use crate::platform::macos::ui::overlay::view::RingScene;

/// Corner radius of the preview backdrop.
const BACKDROP_RADIUS: f64 = 12.0;

thread_local! {
    static PREVIEW_SCENE: RefCell<Option<RingScene>> = const { RefCell::new(None) };
}

/// Create the preview view. Retained (+1).
///
/// # Safety
/// Main thread only.
pub unsafe fn create_preview_view(frame: NSRect) -> id {
    let cls = match AnyClass::get(c"TTARingPreview") {
        Some(cls) => cls,
        None => register_preview_class(),
    };
    let view: id = msg_send![cls, alloc];
    msg_send![view, initWithFrame: frame]
}

unsafe fn register_preview_class() -> &'static AnyClass {
    let mut builder = match ClassBuilder::new(c"TTARingPreview", objc2::class!(NSView)) {
        Some(builder) => builder,
        None => panic!("TTARingPreview registered twice"),
    };
    builder.add_method(
        sel!(isFlipped),
        is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.register()
}

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _rect: NSRect) {
    // Dark backdrop so the white labels read on a light window
    let bounds: NSRect = msg_send![this, bounds];
    let backdrop: id = msg_send![
        get_class("NSBezierPath"),
        bezierPathWithRoundedRect: bounds,
        xRadius: BACKDROP_RADIUS,
        yRadius: BACKDROP_RADIUS
    ];
    let black: id = msg_send![get_class("NSColor"), blackColor];
    let fill: id = msg_send![black, colorWithAlphaComponent: 0.75f64];
    let _: () = msg_send![fill, set];
    let _: () = msg_send![backdrop, fill];

    PREVIEW_SCENE.with(|cell| {
        if let Some(ring) = cell.borrow().as_ref() {
            ring.draw(false);
        }
    });
}

/// Rebuild the preview from the stored settings and redraw it.
///
/// # Safety
/// Main thread only. `host` must be the TTAAppHost.
pub unsafe fn refresh_preview(host: id) {
    let view: id = *(*host).load_ivar::<id>("_previewView");
    if view == nil {
        return;
    }
    let Some(settings) = with_launcher(|launcher| launcher.store().settings().clone()) else {
        return;
    };

    let scene = OverlayScene::build(&settings);
    let frame: NSRect = msg_send![view, frame];
    let bounds = scene
        .layout
        .preview_bounds(Size::new(frame.size.width, frame.size.height));
    let ring = RingScene::load(scene);
    PREVIEW_SCENE.with(|cell| *cell.borrow_mut() = Some(ring));

    let _: () = msg_send![view, setBounds: rect_to_ns(bounds)];
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

/// Release the preview's icons once the window is gone.
pub fn clear_preview() {
    PREVIEW_SCENE.with(|cell| cell.borrow_mut().take());
}
