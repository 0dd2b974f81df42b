use std::collections::HashSet;

use crate::window::Window;

/// Logical key code, independent of the windowing backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
}

/// Keyboard sample for one frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyFrame {
    /// Keys currently down.
    pub held: HashSet<Key>,
    /// Keys that went down since the previous sample.
    pub pressed: HashSet<Key>,
}

impl KeyFrame {
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Turns level key queries into per-frame edges by remembering the previous
/// sample.
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashSet<Key>,
}

impl KeyTracker {
    /// Queries `keys` on `window` and returns what is held and what went down
    /// since the last call.
    pub fn sample<W: Window + ?Sized>(&mut self, window: &W, keys: &[Key]) -> KeyFrame {
        let held: HashSet<Key> = keys
            .iter()
            .copied()
            .filter(|key| window.is_key_down(*key))
            .collect();
        let pressed = held.difference(&self.held).copied().collect();
        self.held = held.clone();
        KeyFrame { held, pressed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeWindow;

    const KEYS: [Key; 2] = [Key::P, Key::T];

    #[test]
    fn first_sample_reports_held_keys_as_pressed() {
        let window = FakeWindow::with_keys(&[Key::P]);
        let mut tracker = KeyTracker::default();
        let frame = tracker.sample(&window, &KEYS);
        assert!(frame.is_held(Key::P));
        assert!(frame.was_pressed(Key::P));
        assert!(!frame.is_held(Key::T));
    }

    #[test]
    fn held_key_is_pressed_only_once() {
        let window = FakeWindow::with_keys(&[Key::P]);
        let mut tracker = KeyTracker::default();
        tracker.sample(&window, &KEYS);
        let frame = tracker.sample(&window, &KEYS);
        assert!(frame.is_held(Key::P));
        assert!(!frame.was_pressed(Key::P));
    }

    #[test]
    fn release_then_press_is_a_new_edge() {
        let mut window = FakeWindow::with_keys(&[Key::P]);
        let mut tracker = KeyTracker::default();
        tracker.sample(&window, &KEYS);
        window.set_keys(&[]);
        assert_eq!(tracker.sample(&window, &KEYS), KeyFrame::default());
        window.set_keys(&[Key::P]);
        assert!(tracker.sample(&window, &KEYS).was_pressed(Key::P));
    }

    #[test]
    fn unlisted_keys_are_ignored() {
        let window = FakeWindow::with_keys(&[Key::Q]);
        let mut tracker = KeyTracker::default();
        assert_eq!(tracker.sample(&window, &KEYS), KeyFrame::default());
    }
}
