use super::controller::{Controller, Key, MouseButton};

/// Pressed/released table for every key and mouse button
///
/// Owned by the application context. Written by event handlers during
/// dispatch, read by the frame update afterwards.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: [bool; Key::COUNT],
    mouse_buttons: [bool; MouseButton::COUNT],
    cursor: (f64, f64),
}

impl InputState {
    /// Create a state with nothing pressed and the cursor at the origin
    pub fn new() -> Self {
        Self {
            keys: [false; Key::COUNT],
            mouse_buttons: [false; MouseButton::COUNT],
            cursor: (0.0, 0.0),
        }
    }

    pub fn press_key(&mut self, key: Key) {
        self.keys[key.index()] = true;
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys[key.index()] = false;
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    pub fn press_mouse_button(&mut self, button: MouseButton) {
        self.mouse_buttons[button.index()] = true;
    }

    pub fn release_mouse_button(&mut self, button: MouseButton) {
        self.mouse_buttons[button.index()] = false;
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons[button.index()]
    }

    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    /// Release every key and button (window lost focus, releases will never arrive)
    pub fn release_all(&mut self) {
        self.keys = [false; Key::COUNT];
        self.mouse_buttons = [false; MouseButton::COUNT];
    }

    /// Keys currently held, in ordinal order
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.iter().copied().filter(|key| self.is_key_pressed(*key))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for InputState {
    fn is_key_pressed(&self, key: Key) -> bool {
        InputState::is_key_pressed(self, key)
    }

    fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        InputState::is_mouse_button_pressed(self, button)
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }
}
