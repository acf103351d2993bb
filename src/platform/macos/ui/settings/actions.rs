//! Action methods for the settings controls.
//!
//! Registered on TTAAppHost; `this` is the host and `sender` the control.

use objc2::runtime::{AnyObject, Sel};

use super::preview::refresh_preview;
use super::window::refresh_app_popups;
use crate::error::Result;
use crate::events::{publish, AppEvent};
use crate::model::constants::{ICON_SIZE_PRESETS, RING_RADIUS_PRESETS};
use crate::platform::macos::app::with_launcher;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, string_from_nsstring, NSApp};
use crate::platform::macos::login_item::set_launch_at_login;

unsafe fn checkbox_is_on(sender: id) -> bool {
    if sender == nil {
        return false;
    }
    let state: i64 = msg_send![sender, state];
    state == 1
}

/// Preset value for the selected pop-up row; `None` for the "Custom" row.
unsafe fn selected_preset(sender: id, presets: &[(&'static str, f64)]) -> Option<f64> {
    if sender == nil {
        return None;
    }
    let index: i64 = msg_send![sender, indexOfSelectedItem];
    usize::try_from(index)
        .ok()
        .and_then(|i| presets.get(i))
        .map(|(_, v)| *v)
}

/// Path stored on the chosen pull-down item.
unsafe fn selected_app_path(sender: id) -> Option<String> {
    if sender == nil {
        return None;
    }
    let item: id = msg_send![sender, selectedItem];
    if item == nil {
        return None;
    }
    let path: id = msg_send![item, representedObject];
    string_from_nsstring(path)
}

/// Redraw the preview and tell the dispatcher.
unsafe fn settings_changed(host: id) {
    refresh_preview(host);
    publish(AppEvent::SettingsChanged);
}

pub unsafe extern "C-unwind" fn toggle_show_names(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let on = checkbox_is_on(sender);
    with_launcher(|launcher| launcher.store_mut().set_show_names(on));
    settings_changed(this as *mut _ as id);
}

pub unsafe extern "C-unwind" fn toggle_launch_at_login(
    _this: &mut AnyObject,
    _cmd: Sel,
    sender: id,
) {
    let on = checkbox_is_on(sender);
    let stored = with_launcher(|launcher| launcher.store_mut().set_launch_at_login(on)).is_some();
    if sync_login_item(stored, on, |enabled| set_launch_at_login(enabled)) {
        publish(AppEvent::SettingsChanged);
    }
}

/// Register or unregister the login item, but only once the preference
/// has been stored. Returns whether the preference was stored.
///
/// The preference is kept even when registration fails.
fn sync_login_item(stored: bool, enabled: bool, register: impl FnOnce(bool) -> Result<()>) -> bool {
    if !stored {
        tracing::warn!(enabled, "settings store unavailable, login item left unchanged");
        return false;
    }
    if let Err(err) = register(enabled) {
        tracing::warn!(%err, enabled, "login item update failed");
    }
    true
}

pub unsafe extern "C-unwind" fn ring_radius_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let Some(radius) = selected_preset(sender, &RING_RADIUS_PRESETS) else {
        return;
    };
    with_launcher(|launcher| launcher.store_mut().set_ring_radius(radius));
    settings_changed(this as *mut _ as id);
}

pub unsafe extern "C-unwind" fn icon_size_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let Some(size) = selected_preset(sender, &ICON_SIZE_PRESETS) else {
        return;
    };
    with_launcher(|launcher| launcher.store_mut().set_icon_size(size));
    settings_changed(this as *mut _ as id);
}

pub unsafe extern "C-unwind" fn add_app(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let Some(path) = selected_app_path(sender) else {
        return;
    };
    with_launcher(|launcher| {
        if !launcher.store().is_app_selected(&path) {
            launcher.store_mut().toggle_app_selection(&path);
        }
    });
    let host = this as *mut _ as id;
    refresh_app_popups(host);
    settings_changed(host);
}

pub unsafe extern "C-unwind" fn remove_app(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let Some(path) = selected_app_path(sender) else {
        return;
    };
    with_launcher(|launcher| {
        if launcher.store().is_app_selected(&path) {
            launcher.store_mut().toggle_app_selection(&path);
        }
    });
    let host = this as *mut _ as id;
    refresh_app_popups(host);
    settings_changed(host);
}

/// Ends the modal; cleanup happens where `runModalForWindow` returns.
pub unsafe extern "C-unwind" fn close_settings(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let _: () = msg_send![NSApp(), stopModal];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    #[test]
    fn login_item_untouched_when_preference_not_stored() {
        let calls = Cell::new(0);
        let stored = sync_login_item(false, true, |_| {
            calls.set(calls.get() + 1);
            Ok(())
        });
        assert!(!stored);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn login_item_registered_after_preference_stored() {
        let seen = Cell::new(None);
        assert!(sync_login_item(true, true, |enabled| {
            seen.set(Some(enabled));
            Ok(())
        }));
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn registration_failure_keeps_preference() {
        let stored = sync_login_item(true, false, |_| {
            Err(Error::LoginItem("denied".into()))
        });
        assert!(stored);
    }
}
