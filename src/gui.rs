use winit::event::WindowEvent;
use winit::window::Window;

/// Width of the inspector side panel, in logical points. The scene
/// viewport is shrunk by the same amount.
pub const PANEL_WIDTH: f32 = 300.0;

/// egui plumbing: winit event translation on one side, a wgpu render pass
/// on the other. Panel contents are supplied by the caller each frame.
pub struct Gui {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Gui {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            None,
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, None, 1, false);
        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Returns true when egui consumed the event (pointer over the panel,
    /// text field focus, ...), so it should not reach the camera.
    pub fn on_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the panel UI and paint it over the already-rendered scene.
    pub fn render(
        &mut self,
        window: &Window,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        size: winit::dpi::PhysicalSize<u32>,
        mut run_ui: impl FnMut(&egui::Context),
    ) {
        let input = self.state.take_egui_input(window);
        let output = self.ctx.run(input, |ctx| run_ui(ctx));
        self.state
            .handle_platform_output(window, output.platform_output);

        let primitives = self
            .ctx
            .tessellate(output.shapes, output.pixels_per_point);
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: output.pixels_per_point,
        };

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        let _ = self
            .renderer
            .update_buffers(device, queue, encoder, &primitives, &screen);

        let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("egui"),
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
        });
        self.renderer
            .render(&mut pass.forget_lifetime(), &primitives, &screen);

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
