use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, ProjectionMode};
use crate::cli::Cli;
use crate::controls::{
    ControlSettings, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_SPEED,
};

pub const DEFAULT_WINDOW_WIDTH: u32 = 1024;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 768;
pub const DEFAULT_WINDOW_TITLE: &str = "GameEngine";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

/// Starting camera pose and control speeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Euler degrees: roll, pitch, yaw
    pub rotation: Vec3,
    pub projection: ProjectionMode,
    pub move_speed: f32,
    pub rotation_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(-5.0, 0.0, 0.0),
            rotation: Vec3::ZERO,
            projection: ProjectionMode::Perspective,
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

impl CameraConfig {
    pub fn build_camera(&self) -> Camera {
        Camera::new(self.position, self.rotation, self.projection)
    }

    pub fn controls(&self) -> ControlSettings {
        ControlSettings {
            move_speed: self.move_speed,
            rotation_speed: self.rotation_speed,
            mouse_sensitivity: self.mouse_sensitivity,
        }
    }
}

/// Full shell configuration, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    /// Log the average frame rate once per second
    pub report_fps: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            report_fps: true,
        }
    }
}

impl ShellConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid shell config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Config file (if any) with command-line flags layered on top
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Self::load(path)?
            }
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if let Some(title) = &cli.title {
            self.window.title = title.clone();
        }
        if cli.orthographic {
            self.camera.projection = ProjectionMode::Orthographic;
        }
        if cli.no_fps {
            self.report_fps = false;
        }
    }
}
