// crates/input_core/src/input/poller.rs

use glam::IVec2;
use input_shared::{ButtonState, KeySnapshot, MouseButton, MouseSnapshot};
use tracing::debug;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::device::DevicePoller;

/// Low-level device tracker fed by winit window events.
/// Keeps raw device state out of the host loop; the sampler reads it once per
/// frame through [`DevicePoller`].
pub struct WindowPoller {
    active_keys: KeySnapshot<KeyCode>,
    mouse: MouseSnapshot,
    cursor_visible: bool,
}

impl WindowPoller {
    pub fn new(cursor_visible: bool) -> Self {
        Self {
            active_keys: KeySnapshot::new(),
            mouse: MouseSnapshot::default(),
            cursor_visible,
        }
    }

    /// Process a single winit WindowEvent and update internal device state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_keyboard_input(key_event);
            }
            WindowEvent::CursorMoved { position, .. } => self.move_cursor(*position),
            WindowEvent::MouseInput { state, button, .. } => self.set_button(*button, *state),
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = key_event.physical_key {
            self.set_key(keycode, key_event.state);
        }
    }

    pub fn set_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.active_keys.insert(key),
            ElementState::Released => self.active_keys.remove(key),
        }
    }

    /// Stores the cursor in whole pixels, truncating toward zero.
    pub fn move_cursor(&mut self, position: PhysicalPosition<f64>) {
        self.mouse.position = IVec2::new(position.x as i32, position.y as i32);
    }

    /// Only left and right are tracked; other buttons are dropped.
    pub fn set_button(&mut self, button: winit::event::MouseButton, state: ElementState) {
        let button = match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            _ => return,
        };
        let state = ButtonState::from_pressed(state == ElementState::Pressed);
        self.mouse.set_button(button, state);
    }

    /// An unfocused window never sees the matching release events.
    pub fn release_all(&mut self) {
        debug!(keys = self.active_keys.len(), "focus lost, releasing held input");
        self.active_keys.clear();
        self.mouse.left = ButtonState::Released;
        self.mouse.right = ButtonState::Released;
    }

    /// Mirror of the window's cursor visibility. The host calls this whenever
    /// it changes the real window flag.
    pub fn set_cursor_visible(&mut self, visible: bool) {
        if self.cursor_visible != visible {
            debug!(visible, "cursor visibility changed");
        }
        self.cursor_visible = visible;
    }

    /// Returns true if a given physical key is currently pressed.
    pub fn is_key_active(&self, key: KeyCode) -> bool {
        self.active_keys.contains(key)
    }
}

impl DevicePoller for WindowPoller {
    type Key = KeyCode;

    fn poll_keys(&mut self) -> KeySnapshot<KeyCode> {
        self.active_keys.clone()
    }

    fn poll_mouse(&mut self) -> MouseSnapshot {
        self.mouse
    }

    fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}
