//! Scene drawing: reactor canvas plus floating culture and help windows.
//!
//! egui is the drawing surface for the whole scene: the reactor canvas is
//! painted on the background layer and the floating info/help windows sit on
//! top of it.

mod canvas;
mod panels;
mod state;
mod theme;
mod widgets;

pub use state::HudState;
pub use theme::{HudColors, HudTheme};

use egui::Context;
use egui_wgpu::ScreenDescriptor;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::simulation::SimulationController;
use crate::state::SimulationMetrics;

/// Draws the reactor scene and floating windows each frame
pub struct HudOverlay {
    /// Which floating windows are shown
    pub state: HudState,
    pub theme: HudTheme,
    ctx: Context,
    /// Translates winit input for `ctx`
    egui_state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl HudOverlay {
    pub fn new(window: &Window, device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let ctx = Context::default();
        let theme = HudTheme::default();
        theme.apply(&ctx);

        let viewport_id = ctx.viewport_id();
        let egui_state = egui_winit::State::new(
            ctx.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1);

        Self {
            state: HudState::default(),
            theme,
            ctx,
            egui_state,
            renderer,
        }
    }

    /// Feed a window event to egui; true when a floating window claimed it
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    /// Lay out the canvas and windows for the current controller state
    pub fn render(
        &mut self,
        window: &Window,
        controller: &SimulationController,
        metrics: &SimulationMetrics,
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let raw_input = self.egui_state.take_egui_input(window);

        let output = self.ctx.run(raw_input, |ctx| {
            canvas::draw_scene(ctx, controller);
            panels::render_panels(ctx, &self.state, metrics);
        });

        self.egui_state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = self.ctx.pixels_per_point();
        let primitives = self.ctx.tessellate(output.shapes, pixels_per_point);

        (primitives, output.textures_delta)
    }

    /// Upload and draw the tessellated frame over the cleared surface
    #[allow(clippy::too_many_arguments)]
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: ScreenDescriptor,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        self.renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    /// Physical size and scale egui-wgpu needs to map points to pixels
    pub fn screen_descriptor(&self, window: &Window) -> ScreenDescriptor {
        let size = window.inner_size();
        ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        }
    }

    pub fn toggle_hud(&mut self) {
        self.state.toggle_hud();
    }

    pub fn toggle_help(&mut self) {
        self.state.toggle_help();
    }

    pub fn toggle_info(&mut self) {
        self.state.toggle_info();
    }

    /// True while a floating window has keyboard focus
    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }
}
