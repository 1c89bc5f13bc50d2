use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::mesh::{self, ColorVertex, FlatVertex};
use crate::pipeline;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Params {
    offset: Vec4,
    color: Vec4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    UniformPulse,
    VertexColors,
}

/// Uniform-variable and vertex-attribute shader experiments: a green
/// channel pulsing with time, per-corner colors, and a translate offset.
pub struct Shaders {
    uniform_pipeline: wgpu::RenderPipeline,
    color_pipeline: wgpu::RenderPipeline,
    flat_buf: wgpu::Buffer,
    color_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    uniform_bind: wgpu::BindGroup,
    color_bind: wgpu::BindGroup,
    task: Task,
    offset: Vec3,
}

impl Shaders {
    pub fn new(ctx: &RenderContext) -> Self {
        let uniform_shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/uniform_color.wgsl"));
        let color_shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/vertex_color.wgsl"));

        let uniform_pipeline = pipeline::render_pipeline(
            ctx.device,
            "shaders: uniform color",
            &uniform_shader,
            &[FlatVertex::layout()],
            ctx.format,
        );
        let color_pipeline = pipeline::render_pipeline(
            ctx.device,
            "shaders: vertex colors",
            &color_shader,
            &[ColorVertex::layout()],
            ctx.format,
        );

        let flat_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shaders triangle"),
                contents: bytemuck::cast_slice(&mesh::TRIANGLE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let color_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shaders color triangle"),
                contents: bytemuck::cast_slice(&mesh::COLOR_TRIANGLE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let uniform_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("shaders params"),
                contents: bytemuck::bytes_of(&Params {
                    offset: Vec4::ZERO,
                    color: Vec4::new(0.0, 1.0, 0.0, 1.0),
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        // one buffer, one bind group per pipeline (auto layouts differ)
        let uniform_bind = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shaders uniform bind"),
            layout: &uniform_pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });
        let color_bind = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shaders color bind"),
            layout: &color_pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        Self {
            uniform_pipeline,
            color_pipeline,
            flat_buf,
            color_buf,
            uniform_buf,
            uniform_bind,
            color_bind,
            task: Task::UniformPulse,
            offset: Vec3::ZERO,
        }
    }
}

impl Chapter for Shaders {
    fn ui(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_label("Task")
            .selected_text(match self.task {
                Task::UniformPulse => "uniform variable",
                Task::VertexColors => "vertex colors",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.task, Task::UniformPulse, "uniform variable");
                ui.selectable_value(&mut self.task, Task::VertexColors, "vertex colors");
            });

        ui.label("Translate offset");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut self.offset.x).speed(0.01));
            ui.add(egui::DragValue::new(&mut self.offset.y).speed(0.01));
            ui.add(egui::DragValue::new(&mut self.offset.z).speed(0.01));
        });
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let green = scene.time.sin() / 2.0 + 0.5;
        let params = Params {
            offset: self.offset.extend(0.0),
            color: Vec4::new(0.0, green, 0.0, 1.0),
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&params));
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        match self.task {
            Task::UniformPulse => {
                pass.set_pipeline(&self.uniform_pipeline);
                pass.set_bind_group(0, Some(&self.uniform_bind), &[]);
                pass.set_vertex_buffer(0, self.flat_buf.slice(..));
            }
            Task::VertexColors => {
                pass.set_pipeline(&self.color_pipeline);
                pass.set_bind_group(0, Some(&self.color_bind), &[]);
                pass.set_vertex_buffer(0, self.color_buf.slice(..));
            }
        }
        pass.draw(0..3, 0..1);
    }
}
