pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod core;
pub mod frame;
pub mod renderer;
pub mod traits;
pub mod types;
pub mod window;

pub use camera::{Camera, ProjectionMode};
pub use crate::core::{Event, EventDispatcher, EventKind, InputState, Key, MouseButton};
