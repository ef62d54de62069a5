use std::ffi::CStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::gl::GlowApi;

use super::{BootstrapError, Platform, WindowConfig};

/// Window, GL surface and current GL context, plus the event loop driving them.
///
/// Fields drop top to bottom: context, surface, window, then the event loop.
pub struct WindowRuntime {
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    window: Window,
    event_loop: EventLoop<()>,
    events: EventPump,
}

impl WindowRuntime {
    /// Initializes windowing, creates the window with a core-profile context of
    /// `config.gl_version`, makes it current and loads the GL function table.
    ///
    /// Anything acquired before a failure is released before returning.
    pub fn open(config: &WindowConfig) -> std::result::Result<(Self, GlowApi), BootstrapError> {
        let event_loop = EventLoop::new()
            .context("failed to create winit EventLoop")
            .map_err(BootstrapError::Init)?;

        let (window, gl_config) =
            create_window(&event_loop, config).map_err(BootstrapError::Window)?;
        let (surface, context) =
            create_context(&window, &gl_config, config.gl_version).map_err(BootstrapError::Window)?;

        log::info!(
            "window created: \"{}\" {}x{}",
            config.title,
            config.size.width,
            config.size.height
        );

        let gl = load_functions(&gl_config.display(), config.gl_version)
            .map_err(BootstrapError::Loader)?;

        log::info!("GL function table loaded: {:?}", gl.version());

        let events = EventPump {
            window_id: window.id(),
            close_requested: false,
        };

        let runtime = Self {
            context,
            surface,
            window,
            event_loop,
            events,
        };

        Ok((runtime, gl))
    }
}

impl Platform for WindowRuntime {
    fn should_close(&self) -> bool {
        self.events.close_requested
    }

    fn swap_buffers(&mut self) {
        if let Err(e) = self.surface.swap_buffers(&self.context) {
            log::warn!("swap_buffers failed: {e}");
        }
    }

    fn poll_events(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.events);

        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            self.events.close_requested = true;
        }
    }

    fn terminate(self) {
        let WindowRuntime {
            context,
            surface,
            window,
            event_loop,
            events: _,
        } = self;

        drop(context);
        drop(surface);
        drop(window);
        drop(event_loop);

        log::info!("windowing terminated");
    }
}

/// Tracks the close flag for the single window.
struct EventPump {
    window_id: WindowId,
    close_requested: bool,
}

impl ApplicationHandler for EventPump {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if window_id == self.window_id && matches!(event, WindowEvent::CloseRequested) {
            log::debug!("close requested");
            self.close_requested = true;
        }
    }
}

fn create_window(event_loop: &EventLoop<()>, config: &WindowConfig) -> Result<(Window, Config)> {
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(config.size);

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(attrs))
        .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
        .map_err(|e| anyhow!("failed to create GL display: {e}"))?;

    let window = window.context("display builder returned no window")?;
    Ok((window, gl_config))
}

/// Prefers the config with the fewest MSAA samples: one triangle needs none.
///
/// `DisplayBuilder::build` fails before calling the picker when no config
/// matches the template, so `configs` is never empty here.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .min_by_key(|c| c.num_samples())
        .expect("glutin offers at least one matching config")
}

fn create_context(
    window: &Window,
    gl_config: &Config,
    (major, minor): (u8, u8),
) -> Result<(Surface<WindowSurface>, PossiblyCurrentContext)> {
    let raw_handle = window
        .window_handle()
        .map(|h| h.as_raw())
        .context("window has no native handle")?;

    // Core profile. glutin has no forward-compatible flag; CGL core contexts
    // are forward-compatible already and other platforms do not require it.
    let attrs = ContextAttributesBuilder::new()
        .with_profile(GlProfile::Core)
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .build(Some(raw_handle));

    let display = gl_config.display();
    let not_current = unsafe { display.create_context(gl_config, &attrs) }
        .with_context(|| format!("failed to create OpenGL {major}.{minor} core context"))?;

    let surface_attrs = window
        .build_surface_attributes(Default::default())
        .context("failed to build surface attributes")?;
    let surface = unsafe { display.create_window_surface(gl_config, &surface_attrs) }
        .context("failed to create window surface")?;

    let context = not_current
        .make_current(&surface)
        .context("failed to make GL context current")?;

    Ok((surface, context))
}

fn load_functions(display: &Display, requested: (u8, u8)) -> std::result::Result<GlowApi, String> {
    let gl = unsafe {
        glow::Context::from_loader_function_cstr(|name: &CStr| display.get_proc_address(name))
    };

    // SAFETY: the context was made current on this thread in `create_context`
    // and `WindowRuntime` keeps it current until `terminate`.
    let gl = unsafe { GlowApi::new(gl) };

    let v = gl.version();
    check_version(v.major, v.minor, v.is_embedded, requested)?;
    Ok(gl)
}

/// Rejects a table whose context is older than requested or is GLES.
fn check_version(
    major: u32,
    minor: u32,
    is_embedded: bool,
    (req_major, req_minor): (u8, u8),
) -> std::result::Result<(), String> {
    if is_embedded {
        return Err(format!("context reports OpenGL ES {major}.{minor}, need desktop OpenGL"));
    }
    if (major, minor) < (u32::from(req_major), u32::from(req_minor)) {
        return Err(format!(
            "context reports OpenGL {major}.{minor}, need {req_major}.{req_minor} core"
        ));
    }
    Ok(())
}
