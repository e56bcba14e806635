use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orbit_scenes::cli::{Cli, SceneKind};
use orbit_scenes::context::{SceneContext, TickEvent};
use orbit_scenes::renderer::{DebugPanel, MeshRenderer};
use orbit_scenes::scenes::{
    create_grid_scene, create_text_scene, create_wireframe_scene, CENTER_OBJECT,
};
use orbit_scenes::viewport::Viewport;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Type Aliases ===

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<MeshRenderer>,
    context: SceneContext,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let viewport = Viewport::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT, 1.0);
        let context = match cli.scene {
            SceneKind::Grid => create_grid_scene(viewport),
            SceneKind::Text => create_text_scene(viewport),
            SceneKind::Wireframe => create_wireframe_scene(viewport),
        };

        Self {
            cli,
            window: None,
            renderer: None,
            context,
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn panel(&self) -> DebugPanel {
        DebugPanel {
            enabled: !self.cli.no_ui,
            slider_object: match self.cli.scene {
                SceneKind::Grid => Some(CENTER_OBJECT),
                _ => None,
            },
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// Route a window-size or scale-factor change through the viewport;
    /// idempotent thanks to the change tracking on both sides
    fn apply_resize(&mut self) {
        let Some(window) = &self.window else { return };

        let scale = window.scale_factor();
        let physical = window.inner_size();
        let logical_width = (physical.width as f64 / scale).round() as u32;
        let logical_height = (physical.height as f64 / scale).round() as u32;

        let size_changed = self.context.resize(logical_width, logical_height);
        let ratio_changed = self.context.set_pixel_ratio(scale as f32);

        if size_changed || ratio_changed {
            if let Some(renderer) = &mut self.renderer {
                let (width, height) = self.context.viewport.physical_size();
                renderer.resize(width, height);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Orbit Scenes")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(MeshRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.apply_resize();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return; // egui consumed the event
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.apply_resize();
            }
            WindowEvent::RedrawRequested => {
                let delta = self.context.clock.tick();
                self.update_fps(delta);

                let t = self.context.clock.elapsed();
                let events = self.context.advance(t);
                let panel = self.panel();

                if let Some(renderer) = &mut self.renderer {
                    for event in events {
                        match event {
                            TickEvent::MatcapReady(texture) => renderer.set_matcap(&texture),
                        }
                    }

                    renderer.sync_scene(&self.context.scene);
                    if let Some(window) = &self.window {
                        if let Err(e) = renderer.render(
                            &mut self.context.scene,
                            &self.context.camera,
                            window,
                            self.fps,
                            panel,
                        ) {
                            eprintln!("Render error: {}", e);
                        }
                    }
                }
            }
            other => self.context.handle_input(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Reschedule the next tick
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("Orbit Scenes - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
