use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Key, MouseButton};
use super::event::{
    Event, KeyPressed, KeyReleased, MouseButtonPressed, MouseButtonReleased, MouseMoved,
    WindowClose, WindowResize,
};

/// Adapter that turns Winit window events into [`Event`]s
///
/// Winit does not report the cursor position with button events, so the
/// adapter remembers the last `CursorMoved` position and stamps it on them.
#[derive(Debug, Clone, Default)]
pub struct WinitEventAdapter {
    cursor: (f64, f64),
}

impl WinitEventAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cursor position seen by the adapter
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    /// Convert a Winit event. Returns `None` for events outside the closed set
    /// and for keys/buttons that have no [`Key`]/[`MouseButton`] mapping.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::Resized(size) => Some(
                WindowResize {
                    width: size.width,
                    height: size.height,
                }
                .into(),
            ),
            WindowEvent::CloseRequested => Some(WindowClose.into()),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let code = keycode_to_key(keycode)?;
                match event.state {
                    ElementState::Pressed => Some(
                        KeyPressed {
                            code,
                            repeated: event.repeat,
                        }
                        .into(),
                    ),
                    ElementState::Released => Some(KeyReleased { code }.into()),
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = mouse_button_to_button(*button)?;
                let (x, y) = self.cursor;
                match state {
                    ElementState::Pressed => Some(MouseButtonPressed { button, x, y }.into()),
                    ElementState::Released => Some(MouseButtonReleased { button, x, y }.into()),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
                Some(
                    MouseMoved {
                        x: position.x,
                        y: position.y,
                    }
                    .into(),
                )
            }
            _ => None,
        }
    }
}

/// Map Winit KeyCode to Key
pub fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
    let key = match keycode {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        KeyCode::Digit0 => Key::Num0,
        KeyCode::Digit1 => Key::Num1,
        KeyCode::Digit2 => Key::Num2,
        KeyCode::Digit3 => Key::Num3,
        KeyCode::Digit4 => Key::Num4,
        KeyCode::Digit5 => Key::Num5,
        KeyCode::Digit6 => Key::Num6,
        KeyCode::Digit7 => Key::Num7,
        KeyCode::Digit8 => Key::Num8,
        KeyCode::Digit9 => Key::Num9,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ShiftLeft => Key::LeftShift,
        KeyCode::ShiftRight => Key::RightShift,
        KeyCode::ControlLeft => Key::LeftControl,
        KeyCode::ControlRight => Key::RightControl,
        KeyCode::AltLeft => Key::LeftAlt,
        KeyCode::AltRight => Key::RightAlt,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        _ => return None,
    };
    Some(key)
}

/// Map Winit MouseButton to MouseButton
pub fn mouse_button_to_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    use winit::event::MouseButton as Winit;

    match button {
        Winit::Left => Some(MouseButton::Left),
        Winit::Right => Some(MouseButton::Right),
        Winit::Middle => Some(MouseButton::Middle),
        Winit::Back => Some(MouseButton::Back),
        Winit::Forward => Some(MouseButton::Forward),
        Winit::Other(_) => None,
    }
}
