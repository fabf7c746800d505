use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keys the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Accelerate forward
    KeyW,
    /// Accelerate backward
    KeyS,
    /// Turn left
    KeyA,
    /// Turn right
    KeyD,
    /// Engage autopilot
    KeyP,
    /// Reset the vehicle
    KeyR,
}

/// Tracks which keys are currently held down.
///
/// The window layer calls `press`/`release` from its key events; the
/// per-frame control pass only ever reads via `is_pressed`.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    active: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.active.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.active.remove(&key);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.active.contains(&key)
    }

    /// Release everything, e.g. on focus loss.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_cycle() {
        let mut keys = KeyboardState::new();
        assert!(!keys.is_pressed(KeyCode::KeyW));

        keys.press(KeyCode::KeyW);
        assert!(keys.is_pressed(KeyCode::KeyW));

        keys.release(KeyCode::KeyW);
        assert!(!keys.is_pressed(KeyCode::KeyW));
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyA);
        keys.release(KeyCode::KeyA);
        assert!(!keys.is_pressed(KeyCode::KeyA));
    }

    #[test]
    fn test_clear_releases_all() {
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyD);
        keys.clear();
        assert!(!keys.is_pressed(KeyCode::KeyW));
        assert!(!keys.is_pressed(KeyCode::KeyD));
    }
}
