//! Simulation builder and the render loop.
//!
//! `Simulation` configures a run from a decoded RGBA buffer; `run()` samples
//! the image, builds the particle field and drives a winit event loop. The
//! redraw handler is the only place the field mutates: it reads the frame
//! clock, applies pointer influence and integration, uploads the new
//! positions and draws. Pointer and resize events only mutate tracker and
//! viewport state between frames; everything runs on the event-loop thread,
//! and exiting the loop drops the app and releases the GPU state exactly
//! once.

use std::sync::Arc;

use image::RgbaImage;
use winit::{
    application::ApplicationHandler,
    event::{Touch, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::SimulationError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::influence::InfluenceEngine;
use crate::pointer::PointerTracker;
use crate::sampler;
use crate::time::Time;
use crate::viewport::Viewport;

/// An interactive particle rendition of one source image.
///
/// Use method chaining to configure, then call `.run()` to start.
pub struct Simulation {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    title: String,
    touch_input: bool,
    seed: Option<u64>,
}

impl Simulation {
    /// Create a simulation from a pre-decoded RGBA buffer.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
            title: "pxdrift".to_string(),
            touch_input: false,
            seed: None,
        }
    }

    /// Create a simulation from a decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Treat the device as touch-capable.
    ///
    /// Touch devices get no mouse pointer; particles react to touch contacts
    /// only. Decided once here, not inferred per event.
    pub fn with_touch_input(mut self, touch_input: bool) -> Self {
        self.touch_input = touch_input;
        self
    }

    /// Seed the influence jitter for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the simulation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let seeds = sampler::contentful_pixels(self.width, self.height, &self.rgba);
        if seeds.is_empty() {
            return Err(SimulationError::NoParticles);
        }
        log::info!(
            "sampled {} contentful pixels from a {}x{} image",
            seeds.len(),
            self.width,
            self.height
        );

        let field = ParticleField::new(&seeds, self.width, self.height);
        let engine = match self.seed {
            Some(seed) => InfluenceEngine::with_seed(seed),
            None => InfluenceEngine::new(),
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            window: None,
            gpu: None,
            field,
            engine,
            tracker: PointerTracker::new(self.touch_input),
            viewport: Viewport::new(0.0, 0.0),
            time: Time::new(),
            title: self.title,
            error: None,
        };
        event_loop.run_app(&mut app)?;
        // Setup failures exit the loop instead of panicking inside winit's
        // callback; surface them to the caller here.
        match app.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: ParticleField,
    engine: InfluenceEngine,
    tracker: PointerTracker,
    viewport: Viewport,
    time: Time,
    title: String,
    error: Option<SimulationError>,
}

impl App {
    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.viewport.resize(size.width as f32, size.height as f32);
        self.tracker.set_window_height(size.height as f32);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(size);
            self.viewport.apply_to(&mut gpu.camera);
        }
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let (_, delta) = self.time.update();
        self.engine
            .step(&mut self.field, &self.tracker, self.viewport.anchor(), delta);

        if let Some(gpu) = &mut self.gpu {
            match gpu.render(self.field.positions(), self.viewport.anchor()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title(self.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    self.error = Some(SimulationError::Window(e));
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let size = window.inner_size();
            self.viewport.resize(size.width as f32, size.height as f32);
            self.tracker.set_window_height(size.height as f32);

            match pollster::block_on(GpuState::new(
                window,
                self.field.positions(),
                self.field.colors(),
            )) {
                Ok(gpu) => self.gpu = Some(gpu),
                Err(e) => {
                    self.error = Some(SimulationError::Gpu(e));
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.resize(physical_size);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.tracker
                    .move_primary(position.x as f32, position.y as f32);
            }
            WindowEvent::Touch(Touch {
                phase, location, id, ..
            }) => match phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    self.tracker
                        .begin_or_update_touch(id, location.x as f32, location.y as f32);
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    self.tracker.end_touch(id);
                }
            },
            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
            }
            _ => {}
        }
    }
}
