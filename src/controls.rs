use glam::Vec3;

use crate::camera::Camera;
use crate::core::controller::{Controller, Key, MouseButton};

pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
pub const DEFAULT_ROTATION_SPEED: f32 = 60.0;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.2;

/// Speeds for [`FlyControls`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSettings {
    /// World units per second
    pub move_speed: f32,
    /// Degrees per second for keyboard rotation
    pub rotation_speed: f32,
    /// Degrees per pixel of cursor travel while looking
    pub mouse_sensitivity: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

/// Snapshot of the movement keys held this frame
#[derive(Debug, Default, Clone, Copy)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl MovementState {
    /// W/S forward, D/A right, E/Q up, arrows rotate
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            forward: controller.is_key_pressed(Key::W),
            backward: controller.is_key_pressed(Key::S),
            left: controller.is_key_pressed(Key::A),
            right: controller.is_key_pressed(Key::D),
            up: controller.is_key_pressed(Key::E),
            down: controller.is_key_pressed(Key::Q),
            yaw_left: controller.is_key_pressed(Key::Left),
            yaw_right: controller.is_key_pressed(Key::Right),
            pitch_up: controller.is_key_pressed(Key::Up),
            pitch_down: controller.is_key_pressed(Key::Down),
        }
    }

    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Camera-space velocity: x forward, y right, z up
    pub fn velocity(&self) -> Vec3 {
        Vec3::new(
            Self::to_direction(self.forward, self.backward),
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.up, self.down),
        )
    }

    /// Angular velocity in (roll, pitch, yaw) sign units
    pub fn rotation_velocity(&self) -> Vec3 {
        Vec3::new(
            0.0,
            Self::to_direction(self.pitch_down, self.pitch_up),
            Self::to_direction(self.yaw_left, self.yaw_right),
        )
    }
}

/// Free-fly camera driven by the input state once per frame
#[derive(Debug, Clone)]
pub struct FlyControls {
    settings: ControlSettings,
    /// Cursor position at the previous frame while the look button is held
    look_anchor: Option<(f64, f64)>,
}

impl FlyControls {
    pub fn new(settings: ControlSettings) -> Self {
        Self {
            settings,
            look_anchor: None,
        }
    }

    pub fn settings(&self) -> ControlSettings {
        self.settings
    }

    /// Apply this frame's input to `camera`. Returns whether the camera moved.
    pub fn update(&mut self, controller: &dyn Controller, camera: &mut Camera, delta: f32) -> bool {
        let movement = MovementState::from_controller(controller);

        let translation = movement.velocity() * self.settings.move_speed * delta;
        let rotation =
            movement.rotation_velocity() * self.settings.rotation_speed * delta + self.mouse_look(controller);

        if translation == Vec3::ZERO && rotation == Vec3::ZERO {
            return false;
        }

        camera.add_movement_and_rotation(translation, rotation);
        true
    }

    /// Rotation from cursor travel while the right mouse button is held
    fn mouse_look(&mut self, controller: &dyn Controller) -> Vec3 {
        if !controller.is_mouse_button_pressed(MouseButton::Right) {
            self.look_anchor = None;
            return Vec3::ZERO;
        }

        let cursor = controller.cursor_position();
        let rotation = match self.look_anchor {
            Some((x, y)) => {
                let dx = (cursor.0 - x) as f32;
                let dy = (cursor.1 - y) as f32;
                // Cursor right turns right (negative yaw), cursor down looks down
                Vec3::new(
                    0.0,
                    dy * self.settings.mouse_sensitivity,
                    -dx * self.settings.mouse_sensitivity,
                )
            }
            None => Vec3::ZERO,
        };
        self.look_anchor = Some(cursor);
        rotation
    }
}

impl Default for FlyControls {
    fn default() -> Self {
        Self::new(ControlSettings::default())
    }
}
