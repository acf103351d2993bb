//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (Carbon hotkey, overlay view, status bar,
/// settings window, system observers) through the EventBus to the
/// dispatcher, which executes the appropriate actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Hotkey ===
    /// Option+Space went down
    HotkeyPressed,

    /// Option+Space came up
    HotkeyReleased,

    // === Overlay ===
    /// Show the ring without the hotkey (status bar menu)
    ShowLauncher,

    /// Dismiss the ring (Escape)
    HideLauncher,

    /// Move the highlight by this many icons (negative = counter-clockwise)
    MoveHighlight(isize),

    /// Highlight a specific icon (pointer hover)
    HighlightIcon(usize),

    /// Launch the highlighted icon (Return)
    ConfirmHighlight,

    /// Launch the icon at this ring index (click)
    ActivateIcon(usize),

    // === Menu & settings ===
    /// Open the settings window
    OpenSettings,

    /// A setting was edited in the settings window
    SettingsChanged,

    /// Terminate the app
    RequestQuit,

    // === System Events ===
    /// Hotkeys need to be reinstalled (after sleep/wake, space change, etc.)
    ReinstallHotkeys,
}

impl AppEvent {
    /// Returns true if the launcher controller handles this event itself.
    ///
    /// Everything else needs the platform dispatcher (windows, menus, Carbon).
    pub fn is_launcher_event(&self) -> bool {
        matches!(
            self,
            AppEvent::HotkeyPressed
                | AppEvent::HotkeyReleased
                | AppEvent::ShowLauncher
                | AppEvent::HideLauncher
                | AppEvent::MoveHighlight(_)
                | AppEvent::HighlightIcon(_)
                | AppEvent::ConfirmHighlight
                | AppEvent::ActivateIcon(_)
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::HotkeyPressed => "Hotkey pressed",
            AppEvent::HotkeyReleased => "Hotkey released",
            AppEvent::ShowLauncher => "Show launcher ring",
            AppEvent::HideLauncher => "Hide launcher ring",
            AppEvent::MoveHighlight(_) => "Move highlight",
            AppEvent::HighlightIcon(_) => "Highlight icon",
            AppEvent::ConfirmHighlight => "Launch highlighted app",
            AppEvent::ActivateIcon(_) => "Launch clicked app",
            AppEvent::OpenSettings => "Open settings window",
            AppEvent::SettingsChanged => "Settings changed",
            AppEvent::RequestQuit => "Quit application",
            AppEvent::ReinstallHotkeys => "Reinstall hotkeys",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_events_are_routed_to_launcher() {
        assert!(AppEvent::HotkeyPressed.is_launcher_event());
        assert!(AppEvent::HotkeyReleased.is_launcher_event());
        assert!(AppEvent::MoveHighlight(-1).is_launcher_event());
        assert!(AppEvent::ActivateIcon(3).is_launcher_event());
    }

    #[test]
    fn test_platform_events_are_not_launcher_events() {
        assert!(!AppEvent::OpenSettings.is_launcher_event());
        assert!(!AppEvent::SettingsChanged.is_launcher_event());
        assert!(!AppEvent::RequestQuit.is_launcher_event());
        assert!(!AppEvent::ReinstallHotkeys.is_launcher_event());
    }

    #[test]
    fn test_event_equality_includes_payload() {
        assert_eq!(AppEvent::ActivateIcon(1), AppEvent::ActivateIcon(1));
        assert_ne!(AppEvent::ActivateIcon(1), AppEvent::ActivateIcon(2));
        assert_ne!(AppEvent::HotkeyPressed, AppEvent::HotkeyReleased);
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::HotkeyPressed,
            AppEvent::HotkeyReleased,
            AppEvent::ShowLauncher,
            AppEvent::HideLauncher,
            AppEvent::MoveHighlight(1),
            AppEvent::HighlightIcon(0),
            AppEvent::ConfirmHighlight,
            AppEvent::ActivateIcon(0),
            AppEvent::OpenSettings,
            AppEvent::SettingsChanged,
            AppEvent::RequestQuit,
            AppEvent::ReinstallHotkeys,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
