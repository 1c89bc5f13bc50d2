use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::chapter::{Chapter, RenderContext, SceneParams};
use crate::mesh::{self, TexVertex};
use crate::{pipeline, texture};

const TEXTURE_SIZE: u32 = 64;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Params {
    transform: Mat4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    SpinInCorner,
    PulseScale,
}

/// A textured quad driven by a CPU-built model matrix each frame.
pub struct Transformations {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    task: Task,
}

impl Transformations {
    pub fn new(ctx: &RenderContext) -> Self {
        let shader = ctx
            .device
            .create_shader_module(wgpu::include_wgsl!("../shaders/transform.wgsl"));
        let pipeline = pipeline::render_pipeline(
            ctx.device,
            "transformations",
            &shader,
            &[TexVertex::layout()],
            ctx.format,
        );

        let vertex_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("transform quad"),
                contents: bytemuck::cast_slice(&mesh::TEX_RECTANGLE),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("transform quad indices"),
                contents: bytemuck::cast_slice(&mesh::RECTANGLE_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });
        let uniform_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("transform params"),
                contents: bytemuck::bytes_of(&Params {
                    transform: Mat4::IDENTITY,
                }),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let container = texture::upload_rgba(
            ctx.device,
            ctx.queue,
            "container",
            TEXTURE_SIZE,
            &texture::container_pixels(TEXTURE_SIZE),
        );
        let sampler = texture::linear_sampler(ctx.device);

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("transform bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&container),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            pipeline,
            vertex_buf,
            index_buf,
            uniform_buf,
            bind_group,
            task: Task::SpinInCorner,
        }
    }
}

impl Chapter for Transformations {
    fn ui(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_label("Task")
            .selected_text(match self.task {
                Task::SpinInCorner => "spin in corner",
                Task::PulseScale => "pulse scale",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.task, Task::SpinInCorner, "spin in corner");
                ui.selectable_value(&mut self.task, Task::PulseScale, "pulse scale");
            });
    }

    fn update(&mut self, queue: &wgpu::Queue, scene: &SceneParams) {
        let transform = match self.task {
            // translate first, then rotate: the quad spins in place at the
            // bottom-right corner
            Task::SpinInCorner => {
                Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0))
                    * Mat4::from_rotation_z(scene.time)
            }
            Task::PulseScale => {
                let s = scene.time.sin().abs().max(0.05);
                Mat4::from_translation(Vec3::new(-0.5, 0.5, 0.0))
                    * Mat4::from_scale(Vec3::new(s, s, 1.0))
            }
        };
        queue.write_buffer(
            &self.uniform_buf,
            0,
            bytemuck::bytes_of(&Params { transform }),
        );
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, Some(&self.bind_group), &[]);
        pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        pass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..6, 0, 0..1);
    }
}
