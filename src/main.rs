use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use globe_tour::chase::{CameraPose, ChaseCamera};
use globe_tour::cities::{self, City};
use globe_tour::cli::Cli;
use globe_tour::core::Clock;
use globe_tour::flight::FlightController;
use globe_tour::geo;
use globe_tour::loaders;
use globe_tour::render::{Hud, Renderer};
use globe_tour::scene::{self, SceneContext};

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct App {
    cli: Cli,
    cities: Vec<City>,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Option<SceneContext>,
    flight: FlightController,
    chase: ChaseCamera,
    pose: CameraPose,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Result<Self> {
        let cities = match &cli.cities {
            Some(path) => cities::load_cities(path)?,
            None => cities::default_cities(),
        };
        info!("City table: {} entries", cities.len());

        Ok(Self {
            cli,
            cities,
            window: None,
            renderer: None,
            scene: None,
            flight: FlightController::new(),
            chase: ChaseCamera::new(),
            pose: ChaseCamera::startup_pose(),
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        })
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

    /// Startup sequence: load every asset, assemble the scene, upload it.
    /// Runs once, before the first frame; the render loop never starts on a
    /// partially loaded scene.
    fn initialize(&mut self, window: Arc<Window>) -> Result<()> {
        let assets = pollster::block_on(loaders::load_assets(&self.cli.assets, &self.cities))?;

        let mut renderer = pollster::block_on(Renderer::new(window))?;
        let scene = scene::assemble(assets, &self.cities);
        renderer.upload_scene(&scene);

        self.renderer = Some(renderer);
        self.scene = Some(scene);
        self.clock.reset();
        Ok(())
    }

    /// Per-frame callback: advance the flight, derive the camera, paint.
    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        let elapsed = self.clock.elapsed();
        self.flight.advance(elapsed);
        self.pose = self.chase.pose(self.flight.state());

        let (Some(renderer), Some(scene), Some(window)) =
            (self.renderer.as_mut(), self.scene.as_mut(), &self.window)
        else {
            return;
        };

        scene.set_airplane_pose(self.flight.state());
        renderer.update_node_transform(scene.airplane, scene.airplane_model_matrix());

        let view_proj = self.chase.view_proj(&self.pose, renderer.aspect());

        let hud = (!self.cli.no_ui).then(|| {
            let state = self.flight.state();
            Hud {
                fps: self.fps,
                position: geo::unproject(state.position),
                altitude: state.position.length() - scene::GLOBE_RADIUS,
            }
        });

        match renderer.render(view_proj, &scene.lights, window, hud.as_ref()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.size();
                renderer.resize(size);
            }
            Err(e) => error!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Globe Tour")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            if let Err(e) = self.initialize(window.clone()) {
                error!("Startup failed: {:#}", e);
                event_loop.exit();
                return;
            }

            self.window = Some(window);
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
                return;
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
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli)?;

    info!("Globe Tour - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
