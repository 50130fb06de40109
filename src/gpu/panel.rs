//! Debug panel (requires the `egui` feature).
//!
//! A small overlay window, hidden by default and toggled with `D`, exposing
//! the material tint as a live color edit plus a couple of read-only stats.
//! Wraps egui context, winit state, and wgpu renderer.

use std::sync::Arc;

use winit::window::Window;

/// Per-frame stats shown in the panel.
pub struct PanelStats {
    pub particle_count: u32,
    pub fps: f32,
}

struct PendingFrame {
    paint_jobs: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    pixels_per_point: f32,
}

/// Hidden-by-default debug panel.
pub struct DebugPanel {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    visible: bool,
    pending: Option<PendingFrame>,
}

impl DebugPanel {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();

        let mut style = egui::Style::default();
        style.visuals = egui::Visuals::dark();
        style.visuals.window_shadow = egui::Shadow::NONE;
        style.visuals.popup_shadow = egui::Shadow::NONE;
        ctx.set_style(style);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self {
            ctx,
            state,
            renderer,
            visible: false,
            pending: None,
        }
    }

    /// Whether the panel is currently shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the panel.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Process a winit event.
    ///
    /// Returns true if the panel consumed the event (don't pass it to the
    /// orbit controls). A hidden panel never consumes anything.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        self.visible && response.consumed
    }

    /// Build this frame's UI. No-op while hidden.
    ///
    /// `tint` is the live material color; edits apply on the very next draw.
    pub fn run(&mut self, window: &Window, stats: &PanelStats, tint: &mut [f32; 3]) {
        if !self.visible {
            self.pending = None;
            return;
        }

        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);

        egui::Window::new("wavefield")
            .resizable(false)
            .show(&self.ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("tint");
                    ui.color_edit_button_rgb(tint);
                });
                ui.label(format!("{} particles", stats.particle_count));
                ui.label(format!("{:.0} fps", stats.fps));
            });

        let full_output = self.ctx.end_frame();
        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        self.pending = Some(PendingFrame {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        });
    }

    /// Paint the UI produced by the last [`run`](Self::run) over the frame.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        size: (u32, u32),
    ) {
        let Some(frame) = self.pending.take() else {
            return;
        };

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.0, size.1],
            pixels_per_point: frame.pixels_per_point,
        };

        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen_descriptor);

        {
            let mut ui_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Panel Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut ui_pass, &frame.paint_jobs, &screen_descriptor);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
