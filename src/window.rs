use std::sync::Arc;

use anyhow::{Context, Result};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window as WinitWindow;

use crate::config::WindowConfig;

/// Wrapper around the single winit Window
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    /// Open the window described by `config`
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self> {
        log::info!(
            "creating window {} with size {}x{}",
            config.title,
            config.width,
            config.height
        );

        let attributes = WinitWindow::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
        let window = event_loop.create_window(attributes).with_context(|| {
            format!(
                "can't create window {} with size {}x{}",
                config.title, config.width, config.height
            )
        })?;

        Ok(Self {
            inner: Arc::new(window),
        })
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    /// Client area in physical pixels
    pub fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }
}
