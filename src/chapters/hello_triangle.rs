use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::mesh::{self, FlatVertex};
use crate::pipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Primitive {
    Triangle,
    Rectangle,
}

/// One orange triangle, or the indexed-rectangle variant.
pub struct HelloTriangle {
    pipeline: wgpu::RenderPipeline,
    triangle_buf: wgpu::Buffer,
    rect_buf: wgpu::Buffer,
    rect_index_buf: wgpu::Buffer,
    primitive: Primitive,
}

impl HelloTriangle {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/triangle.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "hello triangle",
            &shader,
            &[FlatVertex::layout()],
            ctx.format,
        );

        let triangle_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("triangle"),
                contents: bytemuck::cast_slice(&mesh::TRIANGLE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let rect_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("rectangle"),
                contents: bytemuck::cast_slice(&mesh::RECTANGLE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let rect_index_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("rectangle indices"),
                contents: bytemuck::cast_slice(&mesh::RECTANGLE_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        Self {
            pipeline,
            triangle_buf,
            rect_buf,
            rect_index_buf,
            primitive: Primitive::Triangle,
        }
    }
}

impl Chapter for HelloTriangle {
    fn ui(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_label("Primitive")
            .selected_text(match self.primitive {
                Primitive::Triangle => "triangle",
                Primitive::Rectangle => "rectangle",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.primitive, Primitive::Triangle, "triangle");
                ui.selectable_value(&mut self.primitive, Primitive::Rectangle, "rectangle");
            });
    }

    fn update(&mut self, _queue: &wgpu::Queue, _scene: &SceneParams) {}

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        match self.primitive {
            Primitive::Triangle => {
                pass.set_vertex_buffer(0, self.triangle_buf.slice(..));
                pass.draw(0..3, 0..1);
            }
            Primitive::Rectangle => {
                pass.set_vertex_buffer(0, self.rect_buf.slice(..));
                pass.set_index_buffer(self.rect_index_buf.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..6, 0, 0..1);
            }
        }
    }
}
