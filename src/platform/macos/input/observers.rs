//! System observers that keep the Carbon hotkey alive.
//!
//! Carbon registrations can be dropped across sleep, fast user switching
//! and Space changes, so those notifications trigger a re-install.

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};
use crate::platform::macos::input::hotkeys::uninstall_hotkeys;

/// Unregister the hotkey when the app terminates.
///
/// # Safety
/// - `host` must be a valid TTAAppHost that outlives the app.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(host: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let block = RcBlock::new(move |_note: id| unsafe {
        uninstall_hotkeys(host);
        tracing::info!("hotkeys removed at termination");
    });
    let name = nsstring_id("NSApplicationWillTerminateNotification");
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Request a hotkey re-install on wake, session activation and Space change.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_wakeup_space_observers() {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let nc: id = msg_send![ws, notificationCenter];

    let add_obs = |name: &str| {
        let block = RcBlock::new(|_note: id| publish(AppEvent::ReinstallHotkeys));
        let _: id = msg_send![
            nc,
            addObserverForName: nsstring_id(name),
            object: nil,
            queue: nil,
            usingBlock: &*block
        ];
    };

    add_obs("NSWorkspaceDidWakeNotification");
    add_obs("NSWorkspaceSessionDidBecomeActiveNotification");
    add_obs("NSWorkspaceActiveSpaceDidChangeNotification");
}
