// crates/input_shared/src/snapshot.rs
//! Plain per-poll device snapshots shared between pollers and the sampler.

use glam::IVec2;

/// Keys held down at one polling instant.
///
/// Stored in capture order without duplicates. Membership is a linear scan,
/// which is fine for the handful of keys a player can hold at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySnapshot<K> {
    keys: Vec<K>,
}

impl<K> Default for KeySnapshot<K> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<K: Copy + Eq> KeySnapshot<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` unless it is already held.
    pub fn insert(&mut self, key: K) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    pub fn remove(&mut self, key: K) {
        self.keys.retain(|&k| k != key);
    }

    pub fn contains(&self, key: K) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.keys.iter().copied()
    }
}

impl<K: Copy + Eq> FromIterator<K> for KeySnapshot<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for key in iter {
            snapshot.insert(key);
        }
        snapshot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }

    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

/// The mouse buttons a snapshot tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// Cursor position (window pixels) plus left/right button states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseSnapshot {
    pub position: IVec2,
    pub left: ButtonState,
    pub right: ButtonState,
}

impl MouseSnapshot {
    pub fn button(&self, button: MouseButton) -> ButtonState {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
        }
    }

    pub fn set_button(&mut self, button: MouseButton, state: ButtonState) {
        match button {
            MouseButton::Left => self.left = state,
            MouseButton::Right => self.right = state,
        }
    }
}
