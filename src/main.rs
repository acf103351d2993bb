#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! TapThatApp binary.

#[cfg(target_os = "macos")]
mod macos_main;

fn main() {
    tapthatapp::logging::init();

    if !tapthatapp::events::init_event_bus() {
        tracing::warn!("event bus was already initialized");
    }

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    tracing::error!("TapThatApp only runs on macOS");
}
