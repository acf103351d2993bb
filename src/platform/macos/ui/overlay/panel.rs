//! TTAOverlayPanel: borderless, transparent, non-activating NSPanel that
//! can still become key so the ring receives arrow keys.

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use objc2::sel;

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSRect, NO, YES};
use crate::platform::macos::ffi::screen_saver_window_level;

// NSWindowStyleMaskBorderless (0) | NSWindowStyleMaskNonactivatingPanel (1 << 7)
const PANEL_STYLE: u64 = 1 << 7;

// CanJoinAllSpaces | Stationary | FullScreenAuxiliary | IgnoresCycle
const PANEL_COLLECTION_BEHAVIOR: u64 = 1 | 16 | 256 | 64;

unsafe extern "C-unwind" fn can_become_key(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn can_become_main(_this: &AnyObject, _cmd: Sel) -> Bool {
    NO
}

fn panel_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(c"TTAOverlayPanel") {
        return cls;
    }
    let superclass = objc2::class!(NSPanel);
    let mut builder = match ClassBuilder::new(c"TTAOverlayPanel", superclass) {
        Some(builder) => builder,
        None => panic!("TTAOverlayPanel registered twice"),
    };
    unsafe {
        builder.add_method(
            sel!(canBecomeKeyWindow),
            can_become_key as unsafe extern "C-unwind" fn(_, _) -> _,
        );
        builder.add_method(
            sel!(canBecomeMainWindow),
            can_become_main as unsafe extern "C-unwind" fn(_, _) -> _,
        );
    }
    builder.register()
}

/// Create a panel with `frame` (screen coordinates) hosting `content`.
///
/// The panel is retained (+1); ownership passes to the caller.
///
/// # Safety
/// Main thread only. `content` must be an NSView.
pub unsafe fn create_overlay_panel(frame: NSRect, content: id) -> id {
    let panel: id = msg_send![panel_class(), alloc];
    let panel: id = msg_send![
        panel,
        initWithContentRect: frame,
        styleMask: PANEL_STYLE,
        backing: 2u64, // NSBackingStoreBuffered
        defer: NO
    ];

    let _: () = msg_send![panel, setReleasedWhenClosed: NO];
    let _: () = msg_send![panel, setOpaque: NO];
    let clear: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![panel, setBackgroundColor: clear];
    let _: () = msg_send![panel, setHasShadow: NO];
    let _: () = msg_send![panel, setIgnoresMouseEvents: NO];
    let _: () = msg_send![panel, setAcceptsMouseMovedEvents: YES];
    let _: () = msg_send![panel, setHidesOnDeactivate: NO];
    let _: () = msg_send![panel, setLevel: screen_saver_window_level()];
    let _: () = msg_send![panel, setCollectionBehavior: PANEL_COLLECTION_BEHAVIOR];

    let _: () = msg_send![panel, setContentView: content];
    let _: Bool = msg_send![panel, makeFirstResponder: content];
    panel
}
