//! Trigon demo - windowed triangle renderer
//!
//! Opens a window, creates an OpenGL 3.3 core context, and drives a
//! TriangleScene through the RenderHost hooks. Closing the window or
//! pressing Escape exits.

use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{Window, WindowId};

use trigon_engine::trigon::device::{DeviceConfig, GraphicsDevice};
use trigon_engine::trigon::scene::TriangleScene;
use trigon_engine::trigon::{RenderHost, Result};
use trigon_engine::{trigon_err, trigon_error, trigon_info, trigon_warn};
use trigon_engine_renderer_gl::GlGraphicsDevice;

const WINDOW_TITLE: &str = "Trigon - Hello Triangle";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Windowing and GL objects created once the event loop is running
struct GlState {
    device: GlGraphicsDevice,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    window: Window,
}

/// Demo application driving one TriangleScene
struct DemoApp {
    scene: TriangleScene,
    gl: Option<GlState>,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            scene: TriangleScene::new(),
            gl: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(gl) = self.gl.as_mut() {
            if let Err(err) = self.scene.on_repaint(&mut gl.device) {
                trigon_error!("trigon::demo", "Repaint failed: {}", err);
                event_loop.exit();
                return;
            }
            if let Err(err) = gl.surface.swap_buffers(&gl.context) {
                trigon_error!("trigon::demo", "Buffer swap failed: {}", err);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl.is_some() {
            return;
        }

        let mut gl = match create_gl_state(event_loop) {
            Ok(gl) => gl,
            Err(err) => {
                trigon_error!("trigon::demo", "OpenGL setup failed: {}", err);
                event_loop.exit();
                return;
            }
        };

        if let Err(err) = self.scene.on_context_ready(&mut gl.device) {
            trigon_error!("trigon::demo", "Scene initialization failed: {}", err);
            event_loop.exit();
            return;
        }

        let size = gl.window.inner_size();
        if let Err(err) = gl
            .device
            .set_viewport(0, 0, size.width as i32, size.height as i32)
        {
            trigon_warn!("trigon::demo", "Viewport setup failed: {}", err);
        }

        gl.window.request_redraw();
        self.gl = Some(gl);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gl) = self.gl.as_mut() {
                    // Zero-sized means minimized; keep the old surface
                    if let (Some(width), Some(height)) =
                        (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                    {
                        gl.surface.resize(&gl.context, width, height);
                        if let Err(err) = gl
                            .device
                            .set_viewport(0, 0, size.width as i32, size.height as i32)
                        {
                            trigon_warn!("trigon::demo", "Viewport update failed: {}", err);
                        }
                        gl.window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // The context is still current here, so resources can be released
        if let Some(gl) = self.gl.as_mut() {
            if let Err(err) = self.scene.on_context_lost(&mut gl.device) {
                trigon_warn!("trigon::demo", "Scene teardown failed: {}", err);
            }
        }
    }
}

/// Create the window, OpenGL context, surface, and device
fn create_gl_state(event_loop: &ActiveEventLoop) -> Result<GlState> {
    let window_attributes = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));
    let (window, gl_config) = display_builder
        .build(event_loop, ConfigTemplateBuilder::new(), gl_config_picker)
        .map_err(|e| trigon_err!("trigon::demo", "Failed to create GL display: {}", e))?;
    let window = window
        .ok_or_else(|| trigon_err!("trigon::demo", "DisplayBuilder did not create a window"))?;

    let raw_window_handle = window
        .window_handle()
        .map_err(|e| trigon_err!("trigon::demo", "Window has no native handle: {}", e))?
        .as_raw();
    let gl_display = gl_config.display();

    // Same OpenGL 3.3 core profile the shaders are written for
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .with_profile(GlProfile::Core)
        .build(Some(raw_window_handle));
    let not_current_context = unsafe {
        gl_display
            .create_context(&gl_config, &context_attributes)
            .map_err(|e| trigon_err!("trigon::demo", "Failed to create GL context: {}", e))?
    };

    let surface_attributes = window
        .build_surface_attributes(Default::default())
        .map_err(|e| trigon_err!("trigon::demo", "Failed to build surface attributes: {}", e))?;
    let surface = unsafe {
        gl_display
            .create_window_surface(&gl_config, &surface_attributes)
            .map_err(|e| trigon_err!("trigon::demo", "Failed to create GL surface: {}", e))?
    };

    let context = not_current_context
        .make_current(&surface)
        .map_err(|e| trigon_err!("trigon::demo", "Failed to make GL context current: {}", e))?;

    // Tie presentation to vblank; failure is cosmetic, not fatal
    if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        trigon_warn!("trigon::demo", "Could not enable vsync: {}", err);
    }

    let gl = unsafe {
        glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol))
    };
    let device = GlGraphicsDevice::new(
        gl,
        DeviceConfig {
            app_name: "Trigon Demo".to_string(),
            ..DeviceConfig::default()
        },
    )?;

    Ok(GlState {
        device,
        context,
        surface,
        window,
    })
}

/// Prefer multisampled configs for smoother triangle edges
fn gl_config_picker(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|accum, config| {
            if config.num_samples() > accum.num_samples() {
                config
            } else {
                accum
            }
        })
        .expect("No suitable GL config found")
}

fn main() {
    trigon_info!("trigon::demo", "Starting Trigon triangle demo");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            trigon_error!("trigon::demo", "Failed to create event loop: {}", err);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = DemoApp::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        trigon_error!("trigon::demo", "Event loop terminated with error: {}", err);
        std::process::exit(1);
    }
}
