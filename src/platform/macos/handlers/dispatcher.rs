//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions. It's called from the pump timer and
//! processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! take_event() → dispatch_events() → Launcher::handle()      (ring events)
//!                                  → settings / quit / Carbon (the rest)
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use crate::events::{drain_events, take_event, AppEvent};
use crate::platform::macos::app::with_launcher;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp};
use crate::platform::macos::input::{hotkey_event_handler, reinstall_hotkeys};
use crate::platform::macos::ui::open_settings_window;

/// Guard against re-entrant dispatch.
///
/// The pump timer runs in CommonModes, so it keeps firing while the
/// settings window runs modally from inside `dispatch_events`.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Dispatch all pending events from the global event bus.
///
/// # Safety
///
/// Must be called from the main thread. `host` must be the TTAAppHost.
pub unsafe fn dispatch_events(host: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    while let Some(event) = take_event() {
        tracing::trace!(event = event.description(), "dispatch");
        let was_modal = dispatch_single_event(host, &event);

        // Hotkey presses and menu clicks made while settings were open
        // are stale by now.
        if was_modal {
            drain_events_queued_during_modal();
            break;
        }
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

fn drain_events_queued_during_modal() {
    for event in drain_events() {
        tracing::debug!(?event, "discarding event queued during settings");
    }
}

/// Dispatch a single event.
///
/// Returns `true` if the event ran a modal window.
///
/// # Safety
///
/// Must be called from the main thread. `host` must be the TTAAppHost.
unsafe fn dispatch_single_event(host: id, event: &AppEvent) -> bool {
    if event.is_launcher_event() {
        with_launcher(|launcher| launcher.handle(event));
        return false;
    }

    match event {
        AppEvent::OpenSettings => {
            with_launcher(|launcher| launcher.hide());
            open_settings_window(host);
            true
        }

        AppEvent::SettingsChanged => {
            // Settings are re-read on the next show
            tracing::debug!("settings changed");
            false
        }

        AppEvent::RequestQuit => {
            with_launcher(|launcher| launcher.hide());
            let app: id = NSApp();
            let _: () = msg_send![app, terminate: nil];
            false
        }

        AppEvent::ReinstallHotkeys => {
            reinstall_hotkeys(host, hotkey_event_handler);
            false
        }

        _ => false,
    }
}
