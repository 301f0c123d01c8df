use crate::frame::FrameInfo;
use crate::types::CameraUniform;

/// Frame renderer - consumes the camera matrices once per frame
pub trait Renderer {
    /// Surface size changed (physical pixels)
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame with the given camera
    fn render(&mut self, camera: &CameraUniform, frame: &FrameInfo) -> anyhow::Result<()>;
}
