//! Keyboard navigation inside the overlay.

use crate::events::AppEvent;
use crate::model::constants::*;

/// Event for a key pressed while the ring has focus, if it means anything.
pub fn action_for_key(keycode: u16) -> Option<AppEvent> {
    match keycode {
        KEY_LEFT | KEY_UP => Some(AppEvent::MoveHighlight(-1)),
        KEY_RIGHT | KEY_DOWN => Some(AppEvent::MoveHighlight(1)),
        KEY_RETURN | KEY_KEYPAD_ENTER => Some(AppEvent::ConfirmHighlight),
        KEY_ESCAPE => Some(AppEvent::HideLauncher),
        _ => None,
    }
}

/// `current` moved by `step`, wrapping around `count` icons.
///
/// `None` for an empty ring.
pub fn cycle_index(current: usize, step: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let count = count as isize;
    let current = (current as isize).rem_euclid(count);
    Some((current + step).rem_euclid(count) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_move_and_return_confirms() {
        assert_eq!(action_for_key(KEY_LEFT), Some(AppEvent::MoveHighlight(-1)));
        assert_eq!(action_for_key(KEY_RIGHT), Some(AppEvent::MoveHighlight(1)));
        assert_eq!(action_for_key(KEY_RETURN), Some(AppEvent::ConfirmHighlight));
        assert_eq!(action_for_key(KEY_ESCAPE), Some(AppEvent::HideLauncher));
        assert_eq!(action_for_key(49), None); // space
    }

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(cycle_index(0, -1, 4), Some(3));
        assert_eq!(cycle_index(3, 1, 4), Some(0));
        assert_eq!(cycle_index(1, 9, 4), Some(2));
        assert_eq!(cycle_index(0, 1, 0), None);
    }
}
