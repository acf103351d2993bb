//! Carbon hotkey management.
//!
//! Option+Space is registered with the Carbon Event Manager. The handler
//! only translates pressed/released events into bus events; everything
//! else happens on the next dispatcher tick.

use std::ffi::c_void;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{id, ObjectExt};
use crate::platform::macos::ffi::{
    EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef, EventTypeSpec,
    GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter, InstallEventHandler,
    RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey, HKID_LAUNCHER, KC_SPACE,
    K_EVENT_CLASS_KEYBOARD, K_EVENT_HOTKEY_PRESSED, K_EVENT_HOTKEY_RELEASED,
    K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR, OPTION_KEY, SIG_TTAP, TYPE_EVENT_HOTKEY_ID,
};

/// Signature of the Carbon hotkey callback.
pub type HotkeyHandler = extern "C" fn(EventHandlerCallRef, EventRef, *mut c_void) -> i32;

/// Install the event handler and register Option+Space.
///
/// Refs are stored in the host's `_hkHandler` / `_hkLauncher` ivars.
///
/// # Safety
/// Main thread only. `host` must be a TTAAppHost.
pub unsafe fn install_hotkeys(host: id, handler: HotkeyHandler) {
    let types = [
        EventTypeSpec {
            event_class: K_EVENT_CLASS_KEYBOARD,
            event_kind: K_EVENT_HOTKEY_PRESSED,
        },
        EventTypeSpec {
            event_class: K_EVENT_CLASS_KEYBOARD,
            event_kind: K_EVENT_HOTKEY_RELEASED,
        },
    ];
    let mut handler_ref: EventHandlerRef = std::ptr::null_mut();
    let status = InstallEventHandler(
        GetApplicationEventTarget(),
        handler,
        types.len() as u32,
        types.as_ptr(),
        host as *mut c_void,
        &mut handler_ref,
    );
    if status != NO_ERR {
        tracing::error!(status, "InstallEventHandler failed");
        return;
    }
    (*host).store_ivar::<*mut c_void>("_hkHandler", handler_ref);

    let hk_id = EventHotKeyID {
        signature: SIG_TTAP,
        id: HKID_LAUNCHER,
    };
    let mut hotkey_ref: EventHotKeyRef = std::ptr::null_mut();
    let status = RegisterEventHotKey(
        KC_SPACE,
        OPTION_KEY,
        hk_id,
        GetApplicationEventTarget(),
        0,
        &mut hotkey_ref,
    );
    if status != NO_ERR || hotkey_ref.is_null() {
        tracing::error!(status, "RegisterEventHotKey failed for Option+Space");
        return;
    }
    (*host).store_ivar::<*mut c_void>("_hkLauncher", hotkey_ref);
    tracing::debug!("hotkey Option+Space installed");
}

/// Unregister the hotkey and remove the handler.
///
/// # Safety
/// Main thread only. `host` must be a TTAAppHost.
pub unsafe fn uninstall_hotkeys(host: id) {
    let hk_launcher: *mut c_void = *(*host).load_ivar("_hkLauncher");
    let hk_handler: *mut c_void = *(*host).load_ivar("_hkHandler");

    if !hk_launcher.is_null() {
        let _ = UnregisterEventHotKey(hk_launcher);
        (*host).store_ivar::<*mut c_void>("_hkLauncher", std::ptr::null_mut());
    }
    if !hk_handler.is_null() {
        let _ = RemoveEventHandler(hk_handler);
        (*host).store_ivar::<*mut c_void>("_hkHandler", std::ptr::null_mut());
    }
}

/// Re-install hotkeys safely (unregister first to avoid leaks).
///
/// # Safety
/// Main thread only. `host` must be a TTAAppHost.
pub unsafe fn reinstall_hotkeys(host: id, handler: HotkeyHandler) {
    uninstall_hotkeys(host);
    install_hotkeys(host, handler);
}

/// Carbon callback: publish press/release of our hotkey.
///
/// Called by the Carbon runtime; must not panic.
pub extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    _user_data: *mut c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) != K_EVENT_CLASS_KEYBOARD {
            return NO_ERR;
        }

        let mut hot_id = EventHotKeyID {
            signature: 0,
            id: 0,
        };
        let status = GetEventParameter(
            event,
            K_EVENT_PARAM_DIRECT_OBJECT,
            TYPE_EVENT_HOTKEY_ID,
            std::ptr::null_mut(),
            std::mem::size_of::<EventHotKeyID>() as u32,
            std::ptr::null_mut(),
            &mut hot_id as *mut _ as *mut c_void,
        );
        if status != NO_ERR || hot_id.signature != SIG_TTAP || hot_id.id != HKID_LAUNCHER {
            return NO_ERR;
        }

        match GetEventKind(event) {
            K_EVENT_HOTKEY_PRESSED => publish(AppEvent::HotkeyPressed),
            K_EVENT_HOTKEY_RELEASED => publish(AppEvent::HotkeyReleased),
            _ => {}
        }
        NO_ERR
    }
}
