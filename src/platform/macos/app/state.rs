//! Main-thread launcher state.
//!
//! Objective-C callbacks cannot carry Rust state, so the launcher lives in
//! a thread-local and is reached through [`with_launcher`].

use std::cell::RefCell;

use crate::launcher::Launcher;
use crate::platform::macos::storage::UserDefaults;
use crate::platform::macos::ui::overlay::MacOverlayHost;

/// The launcher as wired up on macOS.
pub type MacLauncher = Launcher<MacOverlayHost, UserDefaults>;

thread_local! {
    static LAUNCHER: RefCell<Option<MacLauncher>> = const { RefCell::new(None) };
}

/// Store the launcher for the rest of the run.
pub fn install_launcher(launcher: MacLauncher) {
    LAUNCHER.with(|cell| *cell.borrow_mut() = Some(launcher));
}

/// Run `f` with the launcher.
///
/// `None` before [`install_launcher`], or when called re-entrantly from
/// inside another `with_launcher` (AppKit can nest callbacks).
pub fn with_launcher<R>(f: impl FnOnce(&mut MacLauncher) -> R) -> Option<R> {
    LAUNCHER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            tracing::warn!("launcher busy, callback skipped");
            None
        }
    })
}
