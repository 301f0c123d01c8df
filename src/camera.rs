use glam::{Mat3, Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::types::CameraUniform;

/// World axes: right-handed, +Z up
pub const WORLD_UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub const WORLD_RIGHT: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const WORLD_FORWARD: Vec3 = Vec3::new(1.0, 0.0, 0.0);

// Frustum constants (right = top, symmetric)
const PERSPECTIVE_EXTENT: f32 = 0.1;
const PERSPECTIVE_NEAR: f32 = 0.1;
const PERSPECTIVE_FAR: f32 = 10.0;
const ORTHOGRAPHIC_EXTENT: f32 = 2.0;
const ORTHOGRAPHIC_NEAR: f32 = 0.1;
const ORTHOGRAPHIC_FAR: f32 = 100.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    /// Projection matrix for this mode. Pure function of the mode.
    pub fn matrix(self) -> Mat4 {
        match self {
            ProjectionMode::Perspective => {
                let (r, t) = (PERSPECTIVE_EXTENT, PERSPECTIVE_EXTENT);
                let (n, f) = (PERSPECTIVE_NEAR, PERSPECTIVE_FAR);
                Mat4::from_cols(
                    Vec4::new(n / r, 0.0, 0.0, 0.0),
                    Vec4::new(0.0, n / t, 0.0, 0.0),
                    Vec4::new(0.0, 0.0, (-f - n) / (f - n), -1.0),
                    Vec4::new(0.0, 0.0, -2.0 * f * n / (f - n), 0.0),
                )
            }
            ProjectionMode::Orthographic => {
                let (r, t) = (ORTHOGRAPHIC_EXTENT, ORTHOGRAPHIC_EXTENT);
                let (n, f) = (ORTHOGRAPHIC_NEAR, ORTHOGRAPHIC_FAR);
                Mat4::from_cols(
                    Vec4::new(1.0 / r, 0.0, 0.0, 0.0),
                    Vec4::new(0.0, 1.0 / t, 0.0, 0.0),
                    Vec4::new(0.0, 0.0, -2.0 / (f - n), 0.0),
                    Vec4::new(0.0, 0.0, (-f - n) / (f - n), 1.0),
                )
            }
        }
    }
}

/// First-person camera with a lazily refreshed view matrix
///
/// `rotation` holds Euler angles in degrees about the fixed world axes:
/// `x` is roll, `y` is pitch, `z` is yaw. Positive yaw turns left (towards
/// +Y), positive pitch looks down.
///
/// Position/rotation mutators only mark the camera dirty. The basis vectors
/// and view matrix are rebuilt on the next [`Camera::view_matrix`] call, so
/// [`Camera::move_forward`] and [`Camera::move_right`] follow the basis as it
/// was at the last refresh. The projection matrix is rebuilt immediately when
/// the mode changes.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3,
    projection_mode: ProjectionMode,

    direction: Vec3,
    right: Vec3,
    up: Vec3,

    view_matrix: Mat4,
    projection_matrix: Mat4,
    dirty: bool,
}

impl Camera {
    pub fn new(position: Vec3, rotation: Vec3, projection_mode: ProjectionMode) -> Self {
        let mut camera = Self {
            position,
            rotation,
            projection_mode,
            direction: WORLD_FORWARD,
            right: WORLD_RIGHT,
            up: WORLD_UP,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: projection_mode.matrix(),
            dirty: true,
        };
        camera.update_view_matrix();
        camera
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.dirty = true;
    }

    pub fn set_position_rotation(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.rotation = rotation;
        self.dirty = true;
    }

    pub fn set_projection_mode(&mut self, projection_mode: ProjectionMode) {
        log::trace!("projection mode -> {:?}", projection_mode);
        self.projection_mode = projection_mode;
        self.projection_matrix = projection_mode.matrix();
    }

    /// Move along the cached forward vector
    pub fn move_forward(&mut self, delta: f32) {
        self.position += self.direction * delta;
        self.dirty = true;
    }

    /// Move along the cached right vector
    pub fn move_right(&mut self, delta: f32) {
        self.position += self.right * delta;
        self.dirty = true;
    }

    /// Move along world up, independent of orientation
    pub fn move_up(&mut self, delta: f32) {
        self.position += WORLD_UP * delta;
        self.dirty = true;
    }

    /// Translate by `movement_delta` in camera space (x forward, y right,
    /// z up, cached basis) and add `rotation_delta` degrees to the angles
    pub fn add_movement_and_rotation(&mut self, movement_delta: Vec3, rotation_delta: Vec3) {
        self.position += self.direction * movement_delta.x
            + self.right * movement_delta.y
            + self.up * movement_delta.z;
        self.rotation += rotation_delta;
        self.dirty = true;
    }

    /// View matrix, rebuilt first if any mutator ran since the last read
    pub fn view_matrix(&mut self) -> Mat4 {
        if self.dirty {
            self.update_view_matrix();
        }
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Cached forward vector (as of the last refresh)
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Whether the cached basis and view matrix are stale
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// GPU uniform for the current frame. Refreshes the view matrix if needed.
    pub fn to_uniform(&mut self) -> CameraUniform {
        let view = self.view_matrix();
        let projection = self.projection_matrix;

        CameraUniform {
            view_projection: (projection * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }

    fn update_view_matrix(&mut self) {
        let roll = self.rotation.x.to_radians();
        let pitch = self.rotation.y.to_radians();
        let yaw = self.rotation.z.to_radians();

        let orientation =
            Mat3::from_rotation_z(yaw) * Mat3::from_rotation_y(pitch) * Mat3::from_rotation_x(roll);

        self.direction = (orientation * WORLD_FORWARD).normalize();
        self.right = (orientation * WORLD_RIGHT).normalize();
        self.up = self.right.cross(self.direction).normalize();

        self.view_matrix =
            Mat4::look_at_rh(self.position, self.position + self.direction, self.up);
        self.dirty = false;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, ProjectionMode::Perspective)
    }
}
