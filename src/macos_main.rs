//! macOS entry point: wires the app host, launcher, status item, hotkeys
//! and event pump, then hands control to AppKit.

use tapthatapp::launcher::Launcher;
use tapthatapp::platform::macos::app::{create_app_host, install_launcher, start_event_pump};
use tapthatapp::platform::macos::ffi::bridge::{autoreleasepool, id, msg_send, nil, NSApp};
use tapthatapp::platform::macos::input::{
    hotkey_event_handler, install_hotkeys, install_termination_observer,
    install_wakeup_space_observers,
};
use tapthatapp::platform::macos::storage::UserDefaults;
use tapthatapp::platform::macos::ui::install_status_bar;
use tapthatapp::platform::macos::ui::overlay::MacOverlayHost;
use tapthatapp::platform::macos::workspace::bundle_display_name;
use tapthatapp::store::{default_seed_named, SettingsStore};

/// Event pump interval (~60 Hz).
const PUMP_INTERVAL_SECS: f64 = 1.0 / 60.0;

/// Main entry point for macOS.
pub fn run() {
    // Event bus is already initialized by main()

    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1: no Dock icon
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let host: id = create_app_host();
        if host == nil {
            tracing::error!("could not create the app host");
            return;
        }

        let store =
            SettingsStore::open_with_seed(UserDefaults::new(), || {
                default_seed_named(bundle_display_name)
            });
        tracing::info!(
            apps = store.selected_app_paths().len(),
            "settings loaded"
        );
        install_launcher(Launcher::new(MacOverlayHost::new(host), store));

        install_status_bar(host);
        install_hotkeys(host, hotkey_event_handler);
        install_termination_observer(host);
        install_wakeup_space_observers();
        start_event_pump(host, PUMP_INTERVAL_SECS);

        tracing::info!("TapThatApp running; hold Option+Space to show the ring");
        let _: () = msg_send![app, run];
    });
}
