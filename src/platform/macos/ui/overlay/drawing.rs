//! Drawing functions for the ring view.
//!
//! Pure AppKit drawing, called from `drawRect:` with the view's flipped
//! (y-down) coordinate space active.

use crate::layout::Rect;
use crate::model::constants::HIGHLIGHT_GROWTH;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSPoint, NSRect, NSSize, YES,
};
use crate::platform::macos::ffi::rect_to_ns;

/// NSCompositingOperationSourceOver
const SOURCE_OVER: u64 = 2;

/// Point size of the name labels.
const LABEL_FONT_SIZE: f64 = 10.0;

/// Square an icon occupies when drawn; the highlighted one grows.
pub fn icon_draw_rect(base: Rect, highlighted: bool) -> Rect {
    if highlighted {
        base.inset_by(-HIGHLIGHT_GROWTH / 2.0)
    } else {
        base
    }
}

/// Soft accent-coloured disc behind the highlighted icon.
///
/// # Safety
///
/// Must be called from the main thread within a valid drawing context.
pub unsafe fn draw_highlight(rect: Rect) {
    let glow = rect_to_ns(rect.inset_by(-HIGHLIGHT_GROWTH));
    let disc: id = msg_send![get_class("NSBezierPath"), bezierPathWithOvalInRect: glow];

    let accent: id = msg_send![get_class("NSColor"), controlAccentColor];
    let fill: id = msg_send![accent, colorWithAlphaComponent: 0.4f64];
    let _: () = msg_send![fill, set];
    let _: () = msg_send![disc, fill];
}

/// Draw `image` scaled into `rect`.
///
/// # Safety
///
/// Must be called from the main thread within a valid drawing context.
/// `image` must be nil or an NSImage.
pub unsafe fn draw_icon(image: id, rect: Rect) {
    if image == nil {
        draw_placeholder(rect);
        return;
    }
    let zero = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(0.0, 0.0));
    let _: () = msg_send![
        image,
        drawInRect: rect_to_ns(rect),
        fromRect: zero,
        operation: SOURCE_OVER,
        fraction: 1.0f64,
        respectFlipped: YES,
        hints: nil
    ];
}

/// Grey rounded square for apps whose icon could not be loaded.
unsafe fn draw_placeholder(rect: Rect) {
    let radius = rect.size.width / 5.0;
    let path: id = msg_send![
        get_class("NSBezierPath"),
        bezierPathWithRoundedRect: rect_to_ns(rect),
        xRadius: radius,
        yRadius: radius
    ];
    let color: id = msg_send![get_class("NSColor"), colorWithCalibratedWhite: 0.5f64, alpha: 0.6f64];
    let _: () = msg_send![color, set];
    let _: () = msg_send![path, fill];
}

/// Draw `name` centred in `rect`, white at 85% opacity.
///
/// # Safety
///
/// Must be called from the main thread within a valid drawing context.
pub unsafe fn draw_label(name: &str, rect: Rect) {
    let font: id = msg_send![get_class("NSFont"), systemFontOfSize: LABEL_FONT_SIZE];
    let white: id = msg_send![get_class("NSColor"), whiteColor];
    let color: id = msg_send![white, colorWithAlphaComponent: 0.85f64];

    let paragraph: id = msg_send![get_class("NSMutableParagraphStyle"), new];
    // NSTextAlignmentCenter = 1, NSLineBreakByTruncatingTail = 4
    let _: () = msg_send![paragraph, setAlignment: 1i64];
    let _: () = msg_send![paragraph, setLineBreakMode: 4u64];

    let attrs: id = msg_send![get_class("NSMutableDictionary"), dictionaryWithCapacity: 3usize];
    let _: () = msg_send![attrs, setObject: font, forKey: nsstring_id("NSFont")];
    let _: () = msg_send![attrs, setObject: color, forKey: nsstring_id("NSColor")];
    let _: () = msg_send![attrs, setObject: paragraph, forKey: nsstring_id("NSParagraphStyle")];
    let _: () = msg_send![paragraph, release];

    let _: () = msg_send![
        nsstring_id(name),
        drawInRect: rect_to_ns(rect),
        withAttributes: attrs
    ];
}
