use crate::frame::FrameInfo;
use crate::traits::Renderer;
use crate::types::CameraUniform;

/// Renderer that only traces what it would draw
///
/// Stand-in for a GPU backend: keeps the last uniform so the frame order
/// (dispatch, update, render) can be observed.
#[derive(Debug, Default)]
pub struct LogRenderer {
    size: (u32, u32),
    frames: u64,
    last_uniform: Option<CameraUniform>,
}

impl LogRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn last_uniform(&self) -> Option<&CameraUniform> {
        self.last_uniform.as_ref()
    }
}

impl Renderer for LogRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("renderer resized to {}x{}", width, height);
        self.size = (width, height);
    }

    fn render(&mut self, camera: &CameraUniform, frame: &FrameInfo) -> anyhow::Result<()> {
        log::trace!(
            "frame {} eye={:?} view_projection={:?}",
            frame.number,
            camera.position,
            camera.view_projection
        );
        self.frames += 1;
        self.last_uniform = Some(*camera);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_records_uniform() {
        let mut renderer = LogRenderer::new(800, 600);
        let uniform = CameraUniform {
            position: [1.0, 2.0, 3.0],
            ..CameraUniform::default()
        };

        renderer.render(&uniform, &FrameInfo::new(0, 0.0, 0.0)).unwrap();
        renderer.render(&uniform, &FrameInfo::new(1, 0.016, 0.016)).unwrap();

        assert_eq!(renderer.frames_rendered(), 2);
        assert_eq!(renderer.last_uniform().map(|u| u.position), Some([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_resize() {
        let mut renderer = LogRenderer::new(800, 600);
        renderer.resize(1920, 1080);
        assert_eq!(renderer.size(), (1920, 1080));
    }
}
