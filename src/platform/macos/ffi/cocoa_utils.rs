//! Small Cocoa helpers: window levels, mouse position, screens, arrays.

use objc2_app_kit::NSEvent;

use super::bridge::{get_class, id, msg_send, nil, string_from_nsstring, NSRect};
use crate::layout::{Point, Rect, Size};

/// Window level slightly above context menus and Dock.
pub fn nspop_up_menu_window_level() -> i64 {
    201
}

/// Window level for the settings window (above popup menus).
pub fn settings_window_level() -> i64 {
    nspop_up_menu_window_level() + 1
}

/// NSScreenSaverWindowLevel: the ring sits above fullscreen apps.
pub fn screen_saver_window_level() -> i64 {
    1000
}

/// Global mouse position in Cocoa coordinates (origin bottom-left).
pub fn mouse_location() -> Point {
    let p = NSEvent::mouseLocation();
    Point::new(p.x, p.y)
}

pub fn rect_from_ns(r: NSRect) -> Rect {
    Rect::new(
        Point::new(r.origin.x, r.origin.y),
        Size::new(r.size.width, r.size.height),
    )
}

pub fn rect_to_ns(r: Rect) -> NSRect {
    NSRect::new(
        objc2_foundation::NSPoint::new(r.origin.x, r.origin.y),
        objc2_foundation::NSSize::new(r.size.width, r.size.height),
    )
}

/// The screen containing `p`, falling back to the main screen.
///
/// # Safety
/// Main thread only.
pub unsafe fn screen_containing(p: Point) -> id {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    let count: usize = msg_send![screens, count];
    for i in 0..count {
        let screen: id = msg_send![screens, objectAtIndex: i];
        let frame: NSRect = msg_send![screen, frame];
        if rect_from_ns(frame).contains(p) {
            return screen;
        }
    }
    msg_send![get_class("NSScreen"), mainScreen]
}

/// Visible frame (menu bar and Dock excluded) of the screen containing `p`.
///
/// # Safety
/// Main thread only.
pub unsafe fn visible_frame_at(p: Point) -> Option<Rect> {
    let screen = screen_containing(p);
    if screen == nil {
        return None;
    }
    let frame: NSRect = msg_send![screen, visibleFrame];
    Some(rect_from_ns(frame))
}

/// Copy an `NSArray<NSString>` into Rust strings, skipping non-strings.
///
/// # Safety
/// `array` must be nil or an NSArray.
pub unsafe fn strings_from_nsarray(array: id) -> Vec<String> {
    if array == nil {
        return Vec::new();
    }
    let string_cls = get_class("NSString");
    let count: usize = msg_send![array, count];
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let item: id = msg_send![array, objectAtIndex: i];
        let is_string: bool = msg_send![item, isKindOfClass: string_cls];
        if is_string {
            if let Some(s) = string_from_nsstring(item) {
                out.push(s);
            }
        }
    }
    out
}

/// Build an autoreleased `NSArray<NSString>`.
///
/// # Safety
/// Main thread only.
pub unsafe fn nsarray_from_strings(values: &[String]) -> id {
    let array: id = msg_send![get_class("NSMutableArray"), arrayWithCapacity: values.len()];
    for v in values {
        let _: () = msg_send![array, addObject: super::bridge::nsstring_id(v)];
    }
    array
}
