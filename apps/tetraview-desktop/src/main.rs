use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tetraview_common::ViewerConfig;
use tetraview_render::Scene;
use tetraview_render_wgpu::{GpuContext, TetraRenderer};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

mod keymap;

#[derive(Parser)]
#[command(name = "tetraview-desktop", about = "Rotating tetrahedron with a mouse-look camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override window width
    #[arg(long)]
    width: Option<u32>,

    /// Override window height
    #[arg(long)]
    height: Option<u32>,

    /// Start fullscreen
    #[arg(long)]
    fullscreen: bool,
}

impl Cli {
    fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config.window.fullscreen |= self.fullscreen;
        config.validate()?;
        Ok(config)
    }
}

/// GPU state that exists once the window does.
struct Gpu {
    window: Arc<Window>,
    context: GpuContext,
    renderer: TetraRenderer,
}

struct App {
    config: ViewerConfig,
    scene: Scene,
    gpu: Option<Gpu>,
    /// Whether the camera knows where the real cursor is.
    cursor_synced: bool,
    /// Setup failure that ended the event loop.
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            scene: Scene::new(&config),
            config,
            gpu: None,
            cursor_synced: false,
            error: None,
        }
    }

    fn init_gpu(&self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let window_cfg = &self.config.window;
        let mut attrs = Window::default_attributes()
            .with_title(window_cfg.title.clone())
            .with_inner_size(PhysicalSize::new(window_cfg.width, window_cfg.height));
        if window_cfg.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let context = GpuContext::new(window.clone(), size.width, size.height)?;
        let renderer = TetraRenderer::new(context.device(), context.format())?;

        Ok(Gpu {
            window,
            context,
            renderer,
        })
    }

    fn redraw(&mut self) {
        let frame = self.scene.advance_frame();
        let Some(gpu) = &self.gpu else {
            return;
        };

        if let Some(warp) = frame.cursor_warp {
            if let Err(e) = gpu
                .window
                .set_cursor_position(PhysicalPosition::new(warp.x, warp.y))
            {
                tracing::debug!("cursor warp unavailable: {e}");
                self.scene.cancel_cursor_warp();
            }
        }

        gpu.context.present(&gpu.renderer, &frame);
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match self.init_gpu(event_loop) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.scene.resize(size.width, size.height);

                let center = self.scene.viewport().center();
                if let Err(e) = gpu
                    .window
                    .set_cursor_position(PhysicalPosition::new(center.x, center.y))
                {
                    tracing::debug!("cannot center cursor: {e}");
                }
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("setup failed: {e}");
                self.error = Some(e);
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
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(new_size.width, new_size.height);
                }
                self.scene.resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.scene.handle_key(keymap::map_key(&logical_key));
                if self.scene.should_quit() {
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as i32, position.y as i32);
                if self.cursor_synced {
                    self.scene.on_mouse_move(x, y);
                } else {
                    // First report shows where the pointer really starts.
                    self.scene.sync_cursor(x, y);
                    self.cursor_synced = true;
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.viewer_config()?;
    tracing::info!(
        "tetraview-desktop starting ({}x{})",
        config.window.width,
        config.window.height
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.error {
        return Err(e);
    }
    Ok(())
}
