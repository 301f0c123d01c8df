use std::fmt;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::camera::Camera;
use crate::config::{ShellConfig, WindowConfig};
use crate::controls::FlyControls;
use crate::core::controller::{Key, MouseButton};
use crate::core::event::{
    Event, EventDispatcher, KeyPressed, KeyReleased, MouseButtonPressed, MouseButtonReleased,
    MouseMoved, WindowClose, WindowResize,
};
use crate::core::input::InputState;
use crate::core::input_adapter::WinitEventAdapter;
use crate::frame::{FpsCounter, FrameClock, FrameInfo};
use crate::traits::Renderer;
use crate::window::Window;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Application callback for mouse buttons: `(button, x, y, pressed)`
pub type MouseButtonHook = Box<dyn FnMut(MouseButton, f64, f64, bool)>;

/// State that event handlers may mutate
#[derive(Default)]
pub struct ShellState {
    pub input: InputState,
    pub close_requested: bool,
    pub window_size: (u32, u32),
    /// Size to hand to the renderer before the next frame
    pending_resize: Option<(u32, u32)>,
    mouse_button_hook: Option<MouseButtonHook>,
}

impl ShellState {
    fn notify_mouse_button(&mut self, button: MouseButton, x: f64, y: f64, pressed: bool) {
        if let Some(hook) = self.mouse_button_hook.as_mut() {
            hook(button, x, y, pressed);
        }
    }
}

impl fmt::Debug for ShellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellState")
            .field("input", &self.input)
            .field("close_requested", &self.close_requested)
            .field("window_size", &self.window_size)
            .field("pending_resize", &self.pending_resize)
            .field("mouse_button_hook", &self.mouse_button_hook.is_some())
            .finish()
    }
}

/// Everything between the window backend and the renderer
///
/// Events go through [`Shell::handle_event`] as they arrive; [`Shell::update`]
/// then runs the controls against the settled input state and renders.
pub struct Shell<R: Renderer> {
    dispatcher: EventDispatcher<ShellState>,
    state: ShellState,
    camera: Camera,
    controls: FlyControls,
    renderer: R,
    clock: FrameClock,
    fps: Option<FpsCounter>,
}

impl<R: Renderer> Shell<R> {
    pub fn new(config: &ShellConfig, renderer: R) -> Self {
        let mut dispatcher = EventDispatcher::new();
        register_listeners(&mut dispatcher);

        Self {
            dispatcher,
            state: ShellState {
                window_size: (config.window.width, config.window.height),
                ..ShellState::default()
            },
            camera: config.camera.build_camera(),
            controls: FlyControls::new(config.camera.controls()),
            renderer,
            clock: FrameClock::new(),
            fps: config
                .report_fps
                .then(|| FpsCounter::new(FPS_UPDATE_INTERVAL)),
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        self.dispatcher.dispatch(event, &mut self.state);
    }

    /// Call `hook` with `(button, x, y, pressed)` for every mouse button
    /// press and release, after the input state has been updated.
    /// Replaces any previous hook.
    pub fn set_mouse_button_hook<F>(&mut self, hook: F)
    where
        F: FnMut(MouseButton, f64, f64, bool) + 'static,
    {
        self.state.mouse_button_hook = Some(Box::new(hook));
    }

    /// Window lost focus: no release events will arrive for held keys
    pub fn focus_lost(&mut self) {
        log::debug!("focus lost, releasing input");
        self.state.input.release_all();
    }

    /// Advance one frame using wall-clock timing
    pub fn frame(&mut self) -> Result<()> {
        let frame = self.clock.tick();
        self.update(frame)
    }

    /// Run controls for `frame`, then render
    pub fn update(&mut self, frame: FrameInfo) -> Result<()> {
        if let Some(fps) = self.fps.as_mut().and_then(|counter| counter.tick(frame.delta)) {
            log::info!("FPS: {:.1}", fps);
        }

        if let Some((width, height)) = self.state.pending_resize.take() {
            self.renderer.resize(width, height);
        }

        self.controls
            .update(&self.state.input, &mut self.camera, frame.delta);

        let uniform = self.camera.to_uniform();
        self.renderer.render(&uniform, &frame)
    }

    pub fn close_requested(&self) -> bool {
        self.state.close_requested
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

fn register_listeners(dispatcher: &mut EventDispatcher<ShellState>) {
    dispatcher.add_event_listener(|event: &WindowResize, state: &mut ShellState| {
        log::info!("window resized to {}x{}", event.width, event.height);
        state.window_size = (event.width, event.height);
        state.pending_resize = Some((event.width, event.height));
    });

    dispatcher.add_event_listener(|_: &WindowClose, state: &mut ShellState| {
        log::info!("close requested");
        state.close_requested = true;
    });

    dispatcher.add_event_listener(|event: &KeyPressed, state: &mut ShellState| {
        state.input.press_key(event.code);
        if event.code == Key::Escape && !event.repeated {
            log::info!("escape pressed, closing");
            state.close_requested = true;
        }
    });

    dispatcher.add_event_listener(|event: &KeyReleased, state: &mut ShellState| {
        state.input.release_key(event.code);
    });

    dispatcher.add_event_listener(|event: &MouseButtonPressed, state: &mut ShellState| {
        log::debug!("{:?} pressed at ({}, {})", event.button, event.x, event.y);
        state.input.set_cursor_position(event.x, event.y);
        state.input.press_mouse_button(event.button);
        state.notify_mouse_button(event.button, event.x, event.y, true);
    });

    dispatcher.add_event_listener(|event: &MouseButtonReleased, state: &mut ShellState| {
        log::debug!("{:?} released at ({}, {})", event.button, event.x, event.y);
        state.input.set_cursor_position(event.x, event.y);
        state.input.release_mouse_button(event.button);
        state.notify_mouse_button(event.button, event.x, event.y, false);
    });

    dispatcher.add_event_listener(|event: &MouseMoved, state: &mut ShellState| {
        state.input.set_cursor_position(event.x, event.y);
    });
}

/// Winit application: one window, one shell
pub struct App<R: Renderer> {
    window_config: WindowConfig,
    window: Option<Window>,
    adapter: WinitEventAdapter,
    shell: Shell<R>,
}

impl<R: Renderer> App<R> {
    pub fn new(config: &ShellConfig, renderer: R) -> Self {
        Self {
            window_config: config.window.clone(),
            window: None,
            adapter: WinitEventAdapter::new(),
            shell: Shell::new(config, renderer),
        }
    }

    pub fn shell(&self) -> &Shell<R> {
        &self.shell
    }
}

impl<R: Renderer> ApplicationHandler for App<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match Window::create(event_loop, &self.window_config) {
            Ok(window) => {
                let (width, height) = window.inner_size();
                self.shell.handle_event(&WindowResize { width, height }.into());
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.shell.frame() {
                    log::error!("render error: {:#}", e);
                }
            }
            WindowEvent::Focused(false) => self.shell.focus_lost(),
            _ => {
                if let Some(event) = self.adapter.translate(&event) {
                    self.shell.handle_event(&event);
                }
            }
        }

        if self.shell.close_requested() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
