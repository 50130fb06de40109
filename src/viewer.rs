//! Viewer builder and windowed application.
//!
//! [`Viewer`] configures a particle field and opens a window that animates
//! it: one [`FrameLoop`] step per redraw (wave update, then draw), orbit
//! controls on the mouse, viewport bookkeeping on resize. All state lives in
//! the [`App`] struct owned by the event loop; nothing is global.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::camera::OrbitCamera;
use crate::controls::OrbitControls;
use crate::error::ViewerError;
use crate::field::{FieldConfig, ParticleField};
use crate::frame_loop::{FrameLoop, LoopHandle};
use crate::gpu::{FrameParams, GpuState};
use crate::sprite::SpriteMask;
use crate::time::Time;
use crate::viewport::Viewport;
use crate::wave::Waveform;

#[cfg(feature = "egui")]
use crate::gpu::panel::{DebugPanel, PanelStats};

/// Default material tint, a soft green (#4bcc37).
pub const DEFAULT_TINT: [f32; 3] = [75.0 / 255.0, 204.0 / 255.0, 55.0 / 255.0];

/// A particle field viewer builder.
///
/// Use method chaining to configure, then call `.run()` to open the window.
pub struct Viewer {
    field_config: FieldConfig,
    waveform: Waveform,
    seed: Option<u64>,
    sprite: SpriteMask,
    point_size: f32,
    tint: [f32; 3],
    title: String,
}

impl Viewer {
    /// The default viewer: 20k colored particles riding a sine wave.
    pub fn new() -> Self {
        Self {
            field_config: FieldConfig::default(),
            waveform: Waveform::Sine,
            seed: None,
            sprite: SpriteMask::default(),
            point_size: 0.02,
            tint: DEFAULT_TINT,
            title: "wavefield".to_string(),
        }
    }

    /// The minimal variant: a small, uncolored, static field that is still
    /// redrawn every frame.
    pub fn minimal() -> Self {
        Self {
            field_config: FieldConfig::minimal(),
            waveform: Waveform::Still,
            ..Self::new()
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.field_config.count = count;
        self
    }

    /// Set the side length of the spawn cube.
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.field_config.spread = spread;
        self
    }

    /// Enable or disable per-particle colors.
    pub fn with_vertex_colors(mut self, enabled: bool) -> Self {
        self.field_config.vertex_colors = enabled;
        self
    }

    /// Set the per-frame update.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Seed the particle layout for a reproducible field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the sprite alpha mask used for each particle.
    pub fn with_sprite(mut self, sprite: SpriteMask) -> Self {
        self.sprite = sprite;
        self
    }

    /// Set the particle size, in clip-space units.
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Set the material tint multiplied into every particle's color.
    pub fn with_tint(mut self, tint: [f32; 3]) -> Self {
        self.tint = tint;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), ViewerError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let field = ParticleField::generate(&self.field_config, &mut rng);
        log::info!(
            "wavefield: {} particles, {:?} update",
            field.count(),
            self.waveform
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let (frame_loop, handle) = FrameLoop::new(Time::new());

        let mut app = App {
            window: None,
            gpu: None,
            #[cfg(feature = "egui")]
            panel: None,
            viewport: None,
            field,
            waveform: self.waveform,
            camera: OrbitCamera::new(),
            controls: OrbitControls::new(),
            frame_loop,
            handle,
            sprite: self.sprite,
            point_size: self.point_size,
            tint: self.tint,
            title: self.title,
            init_error: None,
        };
        event_loop.run_app(&mut app)?;

        match app.init_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    #[cfg(feature = "egui")]
    panel: Option<DebugPanel>,
    viewport: Option<Viewport>,
    field: ParticleField,
    waveform: Waveform,
    camera: OrbitCamera,
    controls: OrbitControls,
    frame_loop: FrameLoop<Time>,
    handle: LoopHandle,
    sprite: SpriteMask,
    point_size: f32,
    tint: [f32; 3],
    title: String,
    init_error: Option<ViewerError>,
}

impl App {
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        #[cfg(feature = "egui")]
        let Self {
            window,
            gpu,
            panel,
            viewport,
            field,
            waveform,
            camera,
            controls,
            frame_loop,
            tint,
            point_size,
            ..
        } = self;
        #[cfg(not(feature = "egui"))]
        let Self {
            window,
            gpu,
            viewport,
            field,
            waveform,
            camera,
            controls,
            frame_loop,
            tint,
            point_size,
            ..
        } = self;

        let (Some(window), Some(gpu), Some(viewport)) =
            (window.as_ref(), gpu.as_mut(), viewport.as_ref())
        else {
            return;
        };

        // One frame: fold control inertia into the camera, then run the
        // wave update at the clock's elapsed time.
        let running = frame_loop.step(|tick| {
            controls.update(camera, tick.delta);
            waveform.apply(field, tick.elapsed);
        });

        let elapsed = frame_loop.clock().elapsed();

        #[cfg(feature = "egui")]
        if let Some(panel) = panel.as_mut() {
            let stats = PanelStats {
                particle_count: field.count(),
                fps: frame_loop.clock().fps(),
            };
            panel.run(window, &stats, tint);
        }

        let positions_dirty = field.take_dirty();
        let params = FrameParams {
            view_proj: camera.view_proj(viewport.aspect()),
            tint: *tint,
            time: elapsed,
            point_size: *point_size,
            positions: if positions_dirty {
                Some(field.positions())
            } else {
                None
            },
        };

        let overlay = |device: &wgpu::Device,
                       queue: &wgpu::Queue,
                       encoder: &mut wgpu::CommandEncoder,
                       view: &wgpu::TextureView,
                       size: (u32, u32)| {
            #[cfg(feature = "egui")]
            if let Some(panel) = panel.as_mut() {
                panel.paint(device, queue, encoder, view, size);
            }
            #[cfg(not(feature = "egui"))]
            {
                let _ = (device, queue, view, size);
                let _ = encoder;
            }
        };

        match gpu.render(&params, overlay) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = (gpu.config.width, gpu.config.height);
                gpu.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }

        if running {
            window.request_redraw();
        } else {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.init_error = Some(ViewerError::Window(err));
                event_loop.exit();
                return;
            }
        };

        let scale_factor = window.scale_factor();
        let logical = window.inner_size().to_logical::<f64>(scale_factor);
        let viewport = Viewport::new(
            logical.width.round() as u32,
            logical.height.round() as u32,
            scale_factor,
        );

        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            viewport.render_size(),
            &self.field,
            &self.sprite,
        ));
        let gpu = match gpu {
            Ok(gpu) => gpu,
            Err(err) => {
                self.init_error = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        // Initial positions went up with the buffer; no re-upload needed.
        self.field.take_dirty();

        #[cfg(feature = "egui")]
        {
            self.panel = Some(DebugPanel::new(gpu.device(), gpu.config.format, &window));
        }

        self.viewport = Some(viewport);
        self.gpu = Some(gpu);
        self.window = Some(window.clone());
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Events over the debug panel stay with the panel.
        #[cfg(feature = "egui")]
        let ui_consumed = match (self.window.as_ref(), self.panel.as_mut()) {
            (Some(window), Some(panel)) => panel.on_window_event(window, &event),
            _ => false,
        };
        #[cfg(not(feature = "egui"))]
        let ui_consumed = false;

        match event {
            WindowEvent::CloseRequested => {
                self.handle.cancel();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let (Some(window), Some(viewport)) =
                    (self.window.as_ref(), self.viewport.as_mut())
                {
                    let logical = physical_size.to_logical::<f64>(window.scale_factor());
                    viewport.resize(
                        logical.width.round() as u32,
                        logical.height.round() as u32,
                    );
                    if let Some(gpu) = self.gpu.as_mut() {
                        gpu.resize(viewport.render_size());
                    }
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(viewport) = self.viewport.as_mut() {
                    viewport.set_scale_factor(scale_factor);
                    if let Some(gpu) = self.gpu.as_mut() {
                        gpu.resize(viewport.render_size());
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                #[cfg(feature = "egui")]
                if event.state == ElementState::Pressed && !event.repeat {
                    use winit::keyboard::{KeyCode, PhysicalKey};
                    if event.physical_key == PhysicalKey::Code(KeyCode::KeyD) {
                        if let Some(panel) = self.panel.as_mut() {
                            panel.toggle();
                        }
                    }
                }
                #[cfg(not(feature = "egui"))]
                let _ = event;
            }
            WindowEvent::MouseInput { state, button, .. } if !ui_consumed => {
                if button == MouseButton::Left {
                    self.controls.set_dragging(state == ElementState::Pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } if !ui_consumed => {
                self.controls.cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } if !ui_consumed => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                self.controls.scrolled(lines);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
