//! Settings window.
//!
//! Runs modally from the dispatcher. Controls target the app host, whose
//! action methods (see [`super::actions`]) write each change straight to
//! the settings store and redraw the ring preview on the right.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use block2::RcBlock;

use crate::launcher::AppEntry;
use crate::model::constants::{
    preset_index, APPLICATIONS_DIR, ICON_SIZE_PRESETS, KEY_ESCAPE, KEY_RETURN,
    RING_RADIUS_PRESETS,
};
use crate::model::Settings;
use crate::platform::macos::app::with_launcher;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSApp, NSPoint, NSRect, NSSize, ObjectExt,
    Sel, NO, YES,
};
use crate::platform::macos::ffi::{mouse_location, screen_containing, settings_window_level};
use crate::store::discover_applications;

use super::preview::{clear_preview, create_preview_view, refresh_preview};

/// Only one settings window at a time.
static SETTINGS_OPEN: AtomicBool = AtomicBool::new(false);

const WINDOW_WIDTH: f64 = 720.0;
const WINDOW_HEIGHT: f64 = 300.0;
const LABEL_X: f64 = 20.0;
const CONTROL_X: f64 = 160.0;
const CONTROL_WIDTH: f64 = 260.0;
const PREVIEW_X: f64 = 440.0;
const PREVIEW_Y: f64 = 55.0;
const PREVIEW_WIDTH: f64 = 260.0;
const PREVIEW_HEIGHT: f64 = 225.0;

// NSButtonTypeSwitch
const BUTTON_TYPE_SWITCH: u64 = 3;

/// Open the settings window and block until it is closed.
///
/// # Safety
/// Main thread only. `host` must be the TTAAppHost.
pub unsafe fn open_settings_window(host: id) {
    if SETTINGS_OPEN
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    let Some(settings) = with_launcher(|launcher| launcher.store_mut().reload().clone()) else {
        tracing::warn!("settings requested before the launcher was installed");
        SETTINGS_OPEN.store(false, Ordering::SeqCst);
        return;
    };

    let window = create_window();
    let content: id = msg_send![window, contentView];
    let h = WINDOW_HEIGHT;

    // Checkboxes
    let show_names = make_checkbox(
        host,
        "Show App Names",
        h - 50.0,
        settings.show_names,
        sel!(toggleShowNames:),
    );
    let launch_at_login = make_checkbox(
        host,
        "Launch at Login",
        h - 80.0,
        settings.launch_at_login,
        sel!(toggleLaunchAtLogin:),
    );

    // Presets
    let label_radius = make_label("Ring Radius", h - 120.0);
    let popup_radius = make_preset_popup(
        host,
        &RING_RADIUS_PRESETS,
        settings.ring_radius,
        h - 124.0,
        sel!(ringRadiusChanged:),
    );
    let label_size = make_label("Icon Size", h - 155.0);
    let popup_size = make_preset_popup(
        host,
        &ICON_SIZE_PRESETS,
        settings.icon_size,
        h - 159.0,
        sel!(iconSizeChanged:),
    );

    // App pickers
    let label_add = make_label("Add App", h - 200.0);
    let popup_add = make_app_popup(host, h - 204.0, sel!(addApp:));
    let label_remove = make_label("Remove App", h - 235.0);
    let popup_remove = make_app_popup(host, h - 239.0, sel!(removeApp:));

    (*host).store_ivar::<id>("_settingsWindow", window);
    (*host).store_ivar::<id>("_popupAddApp", popup_add);
    (*host).store_ivar::<id>("_popupRemoveApp", popup_remove);
    fill_app_popups(popup_add, popup_remove, &settings);

    // Live ring preview, right of the controls
    let preview = create_preview_view(NSRect::new(
        NSPoint::new(PREVIEW_X, PREVIEW_Y),
        NSSize::new(PREVIEW_WIDTH, PREVIEW_HEIGHT),
    ));
    (*host).store_ivar::<id>("_previewView", preview);
    refresh_preview(host);

    let btn_close: id = msg_send![get_class("NSButton"), alloc];
    let btn_close: id = msg_send![
        btn_close,
        initWithFrame: NSRect::new(
            NSPoint::new(WINDOW_WIDTH - 100.0, 15.0),
            NSSize::new(80.0, 28.0)
        )
    ];
    let _: () = msg_send![btn_close, setTitle: nsstring_id("Close")];
    let _: () = msg_send![btn_close, setBezelStyle: 1u64];
    let _: () = msg_send![btn_close, setTarget: host];
    let _: () = msg_send![btn_close, setAction: sel!(closeSettings:)];
    let _: () = msg_send![btn_close, setKeyEquivalent: nsstring_id("\r")];

    for control in [
        show_names,
        launch_at_login,
        label_radius,
        popup_radius,
        label_size,
        popup_size,
        label_add,
        popup_add,
        label_remove,
        popup_remove,
        preview,
        btn_close,
    ] {
        let _: () = msg_send![content, addSubview: control];
        let _: () = msg_send![control, release];
    }

    // Local monitor for ESC/Return to close the modal
    const KEY_DOWN_MASK: u64 = 1 << 10;
    let key_block = RcBlock::new(move |event: id| -> id {
        unsafe {
            let keycode: u16 = msg_send![event, keyCode];
            if keycode == KEY_ESCAPE || keycode == KEY_RETURN {
                let _: () = msg_send![NSApp(), stopModal];
                return nil;
            }
        }
        event
    });
    let key_mon: id = msg_send![
        get_class("NSEvent"),
        addLocalMonitorForEventsMatchingMask: KEY_DOWN_MASK,
        handler: &*key_block
    ];

    let app: id = NSApp();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];
    let _: () = msg_send![window, makeKeyAndOrderFront: nil];
    tracing::debug!("settings window opened");

    let _modal_result: i64 = msg_send![app, runModalForWindow: window];

    // Modal ended
    let _: () = msg_send![get_class("NSEvent"), removeMonitor: key_mon];
    let _: () = msg_send![window, orderOut: nil];
    (*host).store_ivar::<id>("_settingsWindow", nil);
    (*host).store_ivar::<id>("_popupAddApp", nil);
    (*host).store_ivar::<id>("_popupRemoveApp", nil);
    (*host).store_ivar::<id>("_previewView", nil);
    clear_preview();
    let _: () = msg_send![window, release];

    SETTINGS_OPEN.store(false, Ordering::SeqCst);
    tracing::debug!("settings window closed");
}

/// Rebuild the Add/Remove pickers after the selection changed.
///
/// # Safety
/// Main thread only. `host` must be the TTAAppHost.
pub unsafe fn refresh_app_popups(host: id) {
    let popup_add: id = *(*host).load_ivar::<id>("_popupAddApp");
    let popup_remove: id = *(*host).load_ivar::<id>("_popupRemoveApp");
    if popup_add == nil || popup_remove == nil {
        return;
    }
    if let Some(settings) = with_launcher(|launcher| launcher.store().settings().clone()) {
        fill_app_popups(popup_add, popup_remove, &settings);
    }
}

/// Centered on the screen under the cursor. Retained (+1).
unsafe fn create_window() -> id {
    // NSTitledWindowMask only; closing goes through stopModal
    let style: u64 = 1;
    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: NSRect::new(
            NSPoint::new(0.0, 0.0),
            NSSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)
        ),
        styleMask: style,
        backing: 2u64,  // NSBackingStoreBuffered
        defer: NO
    ];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];
    let _: () = msg_send![window, setTitle: nsstring_id("TapThatApp Settings")];
    let _: () = msg_send![window, setLevel: settings_window_level()];
    // CanJoinAllSpaces (1) + FullScreenAuxiliary (256)
    let _: () = msg_send![window, setCollectionBehavior: 257u64];

    let screen = screen_containing(mouse_location());
    if screen != nil {
        let screen_frame: NSRect = msg_send![screen, visibleFrame];
        let frame: NSRect = msg_send![window, frame];
        let origin = NSPoint::new(
            screen_frame.origin.x + (screen_frame.size.width - frame.size.width) / 2.0,
            screen_frame.origin.y + (screen_frame.size.height - frame.size.height) / 2.0,
        );
        let _: () = msg_send![window, setFrameOrigin: origin];
    } else {
        let _: () = msg_send![window, center];
    }
    window
}

/// Static text. Retained (+1).
unsafe fn make_label(text: &str, y: f64) -> id {
    let lbl: id = msg_send![get_class("NSTextField"), alloc];
    let lbl: id = msg_send![
        lbl,
        initWithFrame: NSRect::new(NSPoint::new(LABEL_X, y), NSSize::new(130.0, 20.0))
    ];
    let _: () = msg_send![lbl, setBezeled: NO];
    let _: () = msg_send![lbl, setDrawsBackground: NO];
    let _: () = msg_send![lbl, setEditable: NO];
    let _: () = msg_send![lbl, setSelectable: NO];
    let _: () = msg_send![lbl, setStringValue: nsstring_id(text)];
    lbl
}

/// Retained (+1).
unsafe fn make_checkbox(host: id, title: &str, y: f64, on: bool, action: Sel) -> id {
    let btn: id = msg_send![get_class("NSButton"), alloc];
    let btn: id = msg_send![
        btn,
        initWithFrame: NSRect::new(NSPoint::new(LABEL_X, y), NSSize::new(CONTROL_WIDTH, 22.0))
    ];
    let _: () = msg_send![btn, setButtonType: BUTTON_TYPE_SWITCH];
    let _: () = msg_send![btn, setTitle: nsstring_id(title)];
    let _: () = msg_send![btn, setState: if on { 1i64 } else { 0i64 }];
    let _: () = msg_send![btn, setTarget: host];
    let _: () = msg_send![btn, setAction: action];
    btn
}

/// Pop-up of preset values, with a trailing "Custom" entry when `value`
/// matches none of them. Retained (+1).
unsafe fn make_preset_popup(
    host: id,
    presets: &[(&'static str, f64)],
    value: f64,
    y: f64,
    action: Sel,
) -> id {
    let popup: id = msg_send![get_class("NSPopUpButton"), alloc];
    let popup: id = msg_send![
        popup,
        initWithFrame: NSRect::new(NSPoint::new(CONTROL_X, y), NSSize::new(CONTROL_WIDTH, 26.0)),
        pullsDown: NO
    ];
    for title in preset_titles(presets, value) {
        let _: () = msg_send![popup, addItemWithTitle: nsstring_id(&title)];
    }
    let selected = preset_index(presets, value).unwrap_or(presets.len());
    let _: () = msg_send![popup, selectItemAtIndex: selected as i64];
    let _: () = msg_send![popup, setTarget: host];
    let _: () = msg_send![popup, setAction: action];
    popup
}

/// Pull-down whose first item is the title. Retained (+1).
unsafe fn make_app_popup(host: id, y: f64, action: Sel) -> id {
    let popup: id = msg_send![get_class("NSPopUpButton"), alloc];
    let popup: id = msg_send![
        popup,
        initWithFrame: NSRect::new(NSPoint::new(CONTROL_X, y), NSSize::new(CONTROL_WIDTH, 26.0)),
        pullsDown: YES
    ];
    let _: () = msg_send![popup, setAutoenablesItems: NO];
    let _: () = msg_send![popup, setTarget: host];
    let _: () = msg_send![popup, setAction: action];
    popup
}

unsafe fn fill_app_popups(popup_add: id, popup_remove: id, settings: &Settings) {
    let installed = match discover_applications(Path::new(APPLICATIONS_DIR)) {
        Ok(apps) => apps,
        Err(err) => {
            tracing::warn!(%err, "could not list applications");
            Vec::new()
        }
    };

    let _: () = msg_send![popup_add, removeAllItems];
    let _: () = msg_send![popup_add, addItemWithTitle: nsstring_id("Choose an app…")];
    for path in &installed {
        let path_str = path.to_string_lossy();
        add_app_item(popup_add, path, !settings.is_app_selected(&path_str));
    }

    let _: () = msg_send![popup_remove, removeAllItems];
    let _: () = msg_send![popup_remove, addItemWithTitle: nsstring_id("Choose an app…")];
    for path in &settings.selected_app_paths {
        add_app_item(popup_remove, &PathBuf::from(path), true);
    }
}

unsafe fn add_app_item(popup: id, path: &Path, enabled: bool) {
    let entry = AppEntry::from_path(path);
    let _: () = msg_send![popup, addItemWithTitle: nsstring_id(&entry.name)];
    let item: id = msg_send![popup, lastItem];
    if item == nil {
        return;
    }
    let _: () = msg_send![item, setRepresentedObject: nsstring_id(&path.to_string_lossy())];
    let _: () = msg_send![item, setToolTip: nsstring_id(&path.to_string_lossy())];
    let _: () = msg_send![item, setEnabled: if enabled { YES } else { NO }];
}

/// Titles like "M (48)", plus "Custom (50)" for an off-table value.
pub(crate) fn preset_titles(presets: &[(&'static str, f64)], value: f64) -> Vec<String> {
    let mut titles: Vec<String> = presets
        .iter()
        .map(|(label, v)| format!("{label} ({v:.0})"))
        .collect();
    if preset_index(presets, value).is_none() {
        titles.push(format!("Custom ({value:.0})"));
    }
    titles
}
