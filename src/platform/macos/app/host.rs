//! TTAAppHost: the long-lived NSObject that AppKit talks to.
//!
//! It is the target of the pump timer, the status bar menu, the settings
//! controls and delayed launches, and it owns the Carbon refs and the
//! status item through its ivars.

use std::ffi::c_void;
use std::path::PathBuf;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{
    id, msg_send, nil, nsstring_id, string_from_nsstring, ObjectExt, YES,
};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::ui::settings::actions;
use crate::platform::macos::workspace::open_application;

/// Register TTAAppHost (once) and create the instance. Retained (+1).
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_app_host() -> id {
    let cls = match AnyClass::get(c"TTAAppHost") {
        Some(cls) => cls,
        None => register_host_class(),
    };
    let host: id = msg_send![cls, new];
    initialize_host_ivars(host);
    host
}

unsafe fn register_host_class() -> &'static AnyClass {
    let mut builder = match ClassBuilder::new(c"TTAAppHost", objc2::class!(NSObject)) {
        Some(builder) => builder,
        None => panic!("TTAAppHost registered twice"),
    };

    // Carbon refs
    builder.add_ivar::<*mut c_void>(c"_hkHandler");
    builder.add_ivar::<*mut c_void>(c"_hkLauncher");

    // Timer and status item
    builder.add_ivar::<id>(c"_pumpTimer");
    builder.add_ivar::<id>(c"_statusItem");

    // Settings UI refs
    builder.add_ivar::<id>(c"_settingsWindow");
    builder.add_ivar::<id>(c"_popupAddApp");
    builder.add_ivar::<id>(c"_popupRemoveApp");
    builder.add_ivar::<id>(c"_previewView");

    builder.add_method(
        sel!(pumpEvents),
        pump_events as unsafe extern "C-unwind" fn(_, _),
    );
    builder.add_method(
        sel!(launchPath:),
        launch_path as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Status bar menu actions
    builder.add_method(
        sel!(menuLaunch:),
        menu_launch as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuSettings:),
        menu_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuQuit:),
        menu_quit as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Settings actions
    builder.add_method(
        sel!(toggleShowNames:),
        actions::toggle_show_names as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(toggleLaunchAtLogin:),
        actions::toggle_launch_at_login as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(ringRadiusChanged:),
        actions::ring_radius_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(iconSizeChanged:),
        actions::icon_size_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(addApp:),
        actions::add_app as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(removeApp:),
        actions::remove_app as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(closeSettings:),
        actions::close_settings as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

unsafe fn initialize_host_ivars(host: id) {
    (*host).store_ivar::<*mut c_void>("_hkHandler", std::ptr::null_mut());
    (*host).store_ivar::<*mut c_void>("_hkLauncher", std::ptr::null_mut());
    (*host).store_ivar::<id>("_pumpTimer", nil);
    (*host).store_ivar::<id>("_statusItem", nil);
    (*host).store_ivar::<id>("_settingsWindow", nil);
    (*host).store_ivar::<id>("_popupAddApp", nil);
    (*host).store_ivar::<id>("_popupRemoveApp", nil);
    (*host).store_ivar::<id>("_previewView", nil);
}

/// Start the ~60 Hz timer that drains the event bus.
///
/// Added in CommonModes so it keeps firing while menus are open.
///
/// # Safety
/// Main thread only. `host` must be a TTAAppHost.
pub unsafe fn start_event_pump(host: id, interval: f64) {
    let prev: id = *(*host).load_ivar::<id>("_pumpTimer");
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
        (*host).store_ivar::<id>("_pumpTimer", nil);
    }
    let timer: id = msg_send![
        objc2::class!(NSTimer),
        timerWithTimeInterval: interval,
        target: host,
        selector: sel!(pumpEvents),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![objc2::class!(NSRunLoop), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
    (*host).store_ivar::<id>("_pumpTimer", timer);
}

unsafe extern "C-unwind" fn pump_events(this: &mut AnyObject, _cmd: Sel) {
    dispatch_events(this as *mut _ as id);
}

/// Delayed target of an icon launch.
unsafe extern "C-unwind" fn launch_path(_this: &mut AnyObject, _cmd: Sel, path: id) {
    let Some(path) = string_from_nsstring(path) else {
        return;
    };
    if let Err(err) = open_application(&PathBuf::from(path)) {
        tracing::warn!(%err, "launch failed");
    }
}

// ===== Status bar menu actions =====

unsafe extern "C-unwind" fn menu_launch(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ShowLauncher);
}

unsafe extern "C-unwind" fn menu_settings(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::OpenSettings);
}

unsafe extern "C-unwind" fn menu_quit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::RequestQuit);
}
