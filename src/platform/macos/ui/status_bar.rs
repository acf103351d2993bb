//! Status bar (menu bar) item with dropdown menu.
//!
//! - Launch TapThatApp (shows the ring without the hotkey)
//! - Open Settings
//! - Quit TapThatApp

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, ObjectExt, NSSize, Sel, YES,
};

/// Install the status bar item with menu.
///
/// The item is retained in the host's `_statusItem` ivar.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn install_status_bar(host: id) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
    let _: id = msg_send![status_item, retain];
    (*host).store_ivar::<id>("_statusItem", status_item);

    let button: id = msg_send![status_item, button];
    if button != nil {
        let icon: id = msg_send![
            get_class("NSImage"),
            imageWithSystemSymbolName: nsstring_id("star.fill"),
            accessibilityDescription: nsstring_id("TapThatApp")
        ];
        if icon != nil {
            let _: () = msg_send![icon, setSize: NSSize::new(18.0, 18.0)];
            // Template so it adapts to light/dark menu bars
            let _: () = msg_send![icon, setTemplate: YES];
            let _: () = msg_send![button, setImage: icon];
        } else {
            let _: () = msg_send![button, setTitle: nsstring_id("TTA")];
        }
    }

    let menu = create_status_menu(host);
    let _: () = msg_send![status_item, setMenu: menu];
    let _: () = msg_send![menu, release];
}

/// Build the dropdown menu. Retained (+1).
unsafe fn create_status_menu(host: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), new];

    add_item(menu, host, "Launch TapThatApp", sel!(menuLaunch:), "l");
    add_item(menu, host, "Open Settings", sel!(menuSettings:), ",");

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    add_item(menu, host, "Quit TapThatApp", sel!(menuQuit:), "q");

    menu
}

unsafe fn add_item(menu: id, target: id, title: &str, action: Sel, key: &str) {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id(key)
    ];
    let _: () = msg_send![item, setTarget: target];
    let _: () = msg_send![menu, addItem: item];
    let _: () = msg_send![item, release];
}
